//! Persisted user settings.

use polyku_board::BoardFlags;
use serde::{Deserialize, Serialize};

/// User-adjustable options, persisted across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Highlight cells sharing the selected cell's value.
    pub highlight_identical: bool,
    /// Tint rule-violating digits with the error color.
    pub highlight_errors: bool,
    /// Shade the selected cell's row and column.
    pub position_lines: bool,
    /// Draw candidate notes.
    pub render_notes: bool,
    /// Mask filled values behind a placeholder glyph.
    pub questions: bool,
    /// Allow pinch zoom and panning of the board.
    pub zoomable: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highlight_identical: true,
            highlight_errors: true,
            position_lines: true,
            render_notes: true,
            questions: false,
            zoomable: true,
        }
    }
}

impl Settings {
    /// Translates the toggles into renderer flags.
    #[must_use]
    pub fn board_flags(&self) -> BoardFlags {
        let mut flags = BoardFlags::empty();
        flags.set(BoardFlags::IDENTICAL_HIGHLIGHT, self.highlight_identical);
        flags.set(BoardFlags::ERROR_HIGHLIGHT, self.highlight_errors);
        flags.set(BoardFlags::POSITION_LINES, self.position_lines);
        flags.set(BoardFlags::RENDER_NOTES, self.render_notes);
        flags.set(BoardFlags::QUESTIONS, self.questions);
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags_match_renderer_default() {
        assert_eq!(Settings::default().board_flags(), BoardFlags::default());
    }

    #[test]
    fn test_questions_flag_round_trips() {
        let settings = Settings {
            questions: true,
            render_notes: false,
            ..Settings::default()
        };
        let flags = settings.board_flags();
        assert!(flags.contains(BoardFlags::QUESTIONS));
        assert!(!flags.contains(BoardFlags::RENDER_NOTES));
    }
}
