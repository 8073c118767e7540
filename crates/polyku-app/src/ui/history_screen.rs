//! The saved-game history screen.

use std::time::Duration;

use eframe::egui::{Grid, Ui};
use polyku_core::GridSize;

use crate::{
    action::{Action, ActionRequestQueue},
    history::{Difficulty, SortField, SortOrder},
    state::AppState,
};

const FILTER_SIZES: [GridSize; 3] = [GridSize::SIX, GridSize::NINE, GridSize::TWELVE];

/// Shows filter and sort controls above the filtered game list.
pub fn show(ui: &mut Ui, state: &AppState, queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        ui.label("Difficulty:");
        for difficulty in Difficulty::ALL {
            let active = state.history.filters_difficulty(difficulty);
            if ui.selectable_label(active, difficulty.to_string()).clicked() {
                queue.request(Action::ToggleHistoryDifficulty(difficulty));
            }
        }
    });
    ui.horizontal(|ui| {
        ui.label("Size:");
        for size in FILTER_SIZES {
            let active = state.history.filters_size(size);
            if ui.selectable_label(active, size.to_string()).clicked() {
                queue.request(Action::ToggleHistorySize(size));
            }
        }
    });
    ui.horizontal(|ui| {
        ui.label("Sort by:");
        for field in SortField::ALL {
            let active = state.history.sort_field() == field;
            if ui.selectable_label(active, field.to_string()).clicked() {
                queue.request(Action::SortHistoryBy(field));
            }
        }
        let arrow = match state.history.sort_order() {
            SortOrder::Ascending => "^",
            SortOrder::Descending => "v",
        };
        if ui.button(arrow).clicked() {
            queue.request(Action::ToggleHistorySortOrder);
        }
    });
    ui.separator();

    let games = state.history.apply(&state.saved_games);
    if games.is_empty() {
        ui.label("No games match the filters.");
        return;
    }
    Grid::new("history_list").striped(true).show(ui, |ui| {
        ui.strong("Game");
        ui.strong("Size");
        ui.strong("Difficulty");
        ui.strong("Time");
        ui.end_row();
        for game in &games {
            ui.label(format!("#{}", game.id));
            ui.label(game.board.size.to_string());
            ui.label(game.board.difficulty.to_string());
            ui.label(format_elapsed(game.elapsed));
            ui.end_row();
        }
    });
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(75)), "01:15");
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "60:00");
    }
}
