//! The eframe application shell.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context, TopBottomPanel},
};
use polyku_board::BoardInput;
use polyku_core::GridSize;

use crate::{
    action::{self, Action, ActionRequestQueue},
    state::{AppState, Screen, Settings},
    ui,
};

const SETTINGS_KEY: &str = "settings";

/// The Polyku desktop application.
#[derive(Debug)]
pub struct PolykuApp {
    state: AppState,
    board_input: BoardInput,
}

impl PolykuApp {
    /// Builds the app, restoring settings from storage when present.
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, SETTINGS_KEY))
            .unwrap_or_default();
        let mut board_input = BoardInput::new();
        board_input.set_zoomable(settings.zoomable);
        Self {
            state: AppState::new(settings),
            board_input,
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.state.take_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
        }
    }

    fn show_top_bar(&self, ctx: &Context, queue: &mut ActionRequestQueue) {
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (screen, label) in [(Screen::Game, "Game"), (Screen::History, "History")] {
                    if ui
                        .selectable_label(self.state.screen == screen, label)
                        .clicked()
                    {
                        queue.request(Action::SwitchScreen(screen));
                    }
                }
                ui.separator();
                ui.menu_button("New board", |ui| {
                    for size in [GridSize::SIX, GridSize::NINE, GridSize::TWELVE] {
                        if ui.button(size.to_string()).clicked() {
                            queue.request(Action::NewBoard(size));
                        }
                    }
                });
                ui.menu_button("Settings", |ui| {
                    let mut settings = self.state.settings.clone();
                    ui.checkbox(&mut settings.highlight_identical, "Highlight identical");
                    ui.checkbox(&mut settings.highlight_errors, "Highlight errors");
                    ui.checkbox(&mut settings.position_lines, "Position lines");
                    ui.checkbox(&mut settings.render_notes, "Show notes");
                    ui.checkbox(&mut settings.questions, "Hide values");
                    ui.checkbox(&mut settings.zoomable, "Zoomable board");
                    if settings != self.state.settings {
                        queue.request(Action::UpdateSettings(settings));
                    }
                });
            });
        });
    }
}

impl App for PolykuApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.state.settings);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut queue = ActionRequestQueue::new();

        if self.state.screen == Screen::Game {
            ctx.input(|i| ui::input::handle_input(i, &mut queue));
        }

        self.show_top_bar(ctx, &mut queue);
        CentralPanel::default().show(ctx, |ui| match self.state.screen {
            Screen::Game => {
                ui::game_screen::show(ui, &self.state, &mut self.board_input, &mut queue);
            }
            Screen::History => ui::history_screen::show(ui, &self.state, &mut queue),
        });

        action::handle_all(&mut self.state, &mut queue);
        self.apply_persistence(frame);
    }
}
