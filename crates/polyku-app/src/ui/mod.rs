//! egui widgets and screens.

pub mod board_widget;
pub mod game_screen;
pub mod history_screen;
pub mod input;
pub mod keypad;
pub mod theme;
