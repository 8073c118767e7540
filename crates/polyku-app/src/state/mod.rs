//! Mutable application state.

pub use self::{
    app_state::{AppState, Screen},
    game_board::{BoardParseError, GameBoard},
    settings::Settings,
};

mod app_state;
mod game_board;
mod settings;
