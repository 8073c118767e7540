//! Value entry keypad below the board.

use eframe::egui::{Button, Ui, Vec2};
use polyku_core::symbol_glyph;

use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

const BUTTON_SIZE: Vec2 = Vec2::new(44.0, 52.0);

/// Shows one button per value, plus note-mode and erase controls.
pub fn show(ui: &mut Ui, state: &AppState, queue: &mut ActionRequestQueue) {
    let n = state.board.size().get();
    let values: Vec<u8> = (1..=n).collect();
    let per_row = values.len().div_ceil(2);
    ui.vertical(|ui| {
        for chunk in values.chunks(per_row.max(1)) {
            ui.horizontal(|ui| {
                for &value in chunk {
                    value_button(ui, state, value, queue);
                }
            });
        }
        ui.horizontal(|ui| {
            if ui.selectable_label(state.note_mode, "Notes").clicked() {
                queue.request(Action::ToggleNoteMode);
            }
            let erase = ui.add_enabled(state.selected.is_some(), Button::new("Erase"));
            if erase.clicked() {
                queue.request(Action::ClearSelectedCell);
            }
        });
    });
}

fn value_button(ui: &mut Ui, state: &AppState, value: u8, queue: &mut ActionRequestQueue) {
    let Some(glyph) = symbol_glyph(value) else {
        return;
    };
    let total = usize::from(state.board.size().get());
    let remaining = total.saturating_sub(state.board.value_count(value));
    let button = Button::new(format!("{glyph}\n{remaining}")).min_size(BUTTON_SIZE);
    if ui.add_enabled(state.selected.is_some(), button).clicked() {
        queue.request(Action::InputValue(value));
    }
}
