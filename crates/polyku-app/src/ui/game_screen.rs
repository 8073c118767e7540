//! The playable board screen.

use eframe::egui::{RichText, Ui};
use egui_extras::{Size, StripBuilder};
use polyku_board::BoardInput;

use crate::{
    action::ActionRequestQueue,
    state::AppState,
    ui::{board_widget, keypad},
};

const KEYPAD_HEIGHT: f32 = 150.0;

/// Shows the board with the keypad below it.
pub fn show(ui: &mut Ui, state: &AppState, input: &mut BoardInput, queue: &mut ActionRequestQueue) {
    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(KEYPAD_HEIGHT))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                ui.vertical_centered(|ui| {
                    board_widget::show(ui, state, input, queue);
                });
            });
            strip.cell(|ui| {
                ui.vertical_centered(|ui| {
                    if state.board.is_solved() {
                        ui.label(RichText::new("Solved!").heading());
                    }
                    keypad::show(ui, state, queue);
                });
            });
        });
}
