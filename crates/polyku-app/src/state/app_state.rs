//! Top-level application state.

use std::time::Duration;

use polyku_core::{CellPos, GridSize};

use crate::{
    action::MoveDirection,
    history::{BoardRecord, Difficulty, HistoryViewModel, SavedGame},
    state::{GameBoard, Settings},
};

/// Which screen the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The playable board.
    #[default]
    Game,
    /// The saved-game history list.
    History,
}

/// Everything the UI reads and the action handler mutates.
#[derive(Debug)]
pub struct AppState {
    /// The board being played.
    pub board: GameBoard,
    /// The selected cell, if any.
    pub selected: Option<CellPos>,
    /// Whether value input toggles notes instead.
    pub note_mode: bool,
    /// Persisted user settings.
    pub settings: Settings,
    /// The visible screen.
    pub screen: Screen,
    /// Finished games shown on the history screen.
    pub saved_games: Vec<SavedGame>,
    /// Filter and sort state for the history screen.
    pub history: HistoryViewModel,
    dirty: bool,
}

impl AppState {
    /// Creates the initial state with a demo board and sample history.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            board: demo_board(GridSize::NINE),
            selected: None,
            note_mode: false,
            settings,
            screen: Screen::Game,
            saved_games: demo_history(),
            history: HistoryViewModel::default(),
            dirty: false,
        }
    }

    /// Replaces the board with a fresh demo puzzle of the given size.
    pub fn start_demo_board(&mut self, size: GridSize) {
        log::info!("starting new {size} board");
        self.board = demo_board(size);
        self.selected = None;
        self.note_mode = false;
    }

    /// Moves the selection one cell, wrapping at the board edge.
    ///
    /// With no selection, selects the top-left cell.
    pub fn move_selection(&mut self, dir: MoveDirection) {
        let n = self.board.size().get();
        let pos = self.selected.unwrap_or(CellPos::new(0, 0));
        let moved = match dir {
            MoveDirection::Up => CellPos::new((pos.row + n - 1) % n, pos.col),
            MoveDirection::Down => CellPos::new((pos.row + 1) % n, pos.col),
            MoveDirection::Left => CellPos::new(pos.row, (pos.col + n - 1) % n),
            MoveDirection::Right => CellPos::new(pos.row, (pos.col + 1) % n),
        };
        self.selected = Some(moved);
    }

    /// Flags the settings as needing persistence.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns and clears the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

fn demo_board(size: GridSize) -> GameBoard {
    match size {
        GridSize::NINE => GameBoard::from_givens(
            GridSize::NINE,
            "53..7....\
             6..195...\
             .98....6.\
             8...6...3\
             4..8.3..1\
             7...2...6\
             .6....28.\
             ...419..5\
             ....8..79",
        )
        .unwrap_or_else(|_| GameBoard::empty(size)),
        GridSize::SIX => GameBoard::with_givens(
            GridSize::SIX,
            &[
                (0, 0, 1),
                (0, 4, 5),
                (1, 3, 1),
                (2, 1, 3),
                (2, 5, 4),
                (3, 0, 5),
                (3, 4, 3),
                (4, 2, 1),
                (5, 1, 4),
                (5, 5, 2),
            ],
        ),
        GridSize::TWELVE => GameBoard::with_givens(
            GridSize::TWELVE,
            &[
                (0, 0, 1),
                (0, 5, 7),
                (0, 11, 12),
                (1, 2, 3),
                (1, 8, 10),
                (2, 4, 5),
                (2, 10, 2),
                (3, 1, 9),
                (3, 7, 4),
                (4, 3, 11),
                (4, 9, 6),
                (5, 0, 8),
                (5, 6, 1),
                (6, 5, 12),
                (6, 11, 3),
                (7, 2, 6),
                (7, 8, 9),
                (8, 4, 2),
                (8, 10, 7),
                (9, 1, 5),
                (9, 7, 8),
                (10, 3, 4),
                (10, 9, 11),
                (11, 0, 10),
                (11, 6, 2),
            ],
        ),
        _ => GameBoard::empty(size),
    }
}

fn demo_history() -> Vec<SavedGame> {
    vec![
        SavedGame::new(
            1,
            Duration::from_secs(754),
            BoardRecord::new(Difficulty::Easy, GridSize::NINE),
        ),
        SavedGame::new(
            2,
            Duration::from_secs(312),
            BoardRecord::new(Difficulty::Easy, GridSize::SIX),
        ),
        SavedGame::new(
            3,
            Duration::from_secs(1408),
            BoardRecord::new(Difficulty::Moderate, GridSize::NINE),
        ),
        SavedGame::new(
            4,
            Duration::from_secs(2651),
            BoardRecord::new(Difficulty::Hard, GridSize::TWELVE),
        ),
        SavedGame::new(
            5,
            Duration::from_secs(1987),
            BoardRecord::new(Difficulty::Challenge, GridSize::NINE),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_selection_wraps() {
        let mut state = AppState::new(Settings::default());
        state.selected = Some(CellPos::new(0, 0));
        state.move_selection(MoveDirection::Up);
        assert_eq!(state.selected, Some(CellPos::new(8, 0)));
        state.move_selection(MoveDirection::Left);
        assert_eq!(state.selected, Some(CellPos::new(8, 8)));
        state.move_selection(MoveDirection::Down);
        state.move_selection(MoveDirection::Right);
        assert_eq!(state.selected, Some(CellPos::new(0, 0)));
    }

    #[test]
    fn test_move_selection_starts_at_origin() {
        let mut state = AppState::new(Settings::default());
        assert_eq!(state.selected, None);
        state.move_selection(MoveDirection::Down);
        assert_eq!(state.selected, Some(CellPos::new(1, 0)));
    }

    #[test]
    fn test_demo_boards_have_no_conflicts() {
        for size in [GridSize::SIX, GridSize::NINE, GridSize::TWELVE] {
            let board = demo_board(size);
            assert!(
                board.cells().iter().all(|c| !c.error),
                "conflicting givens in {size} demo board"
            );
        }
    }

    #[test]
    fn test_start_demo_board_resets_input_state() {
        let mut state = AppState::new(Settings::default());
        state.selected = Some(CellPos::new(3, 3));
        state.note_mode = true;
        state.start_demo_board(GridSize::SIX);
        assert_eq!(state.board.size(), GridSize::SIX);
        assert_eq!(state.selected, None);
        assert!(!state.note_mode);
    }
}
