//! Bridges egui visuals to the renderer's palette.

use eframe::egui::{Color32, Visuals};
use polyku_board::{BoardPalette, Rgba};

/// Derives the board palette from the active egui theme.
#[must_use]
pub fn board_palette(visuals: &Visuals) -> BoardPalette {
    BoardPalette {
        foreground: from_color32(visuals.text_color()),
        locked: from_color32(visuals.strong_text_color()),
        error: from_color32(visuals.error_fg_color),
        highlight: from_color32(visuals.selection.bg_fill),
    }
}

fn from_color32(color: Color32) -> Rgba {
    Rgba {
        r: color.r(),
        g: color.g(),
        b: color.b(),
        a: color.a(),
    }
}

/// Converts a renderer color back to egui.
#[must_use]
pub fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
