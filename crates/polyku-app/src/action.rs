//! Application actions and the queue that carries them.
//!
//! UI code never mutates [`AppState`] directly. It pushes [`Action`]s onto an
//! [`ActionRequestQueue`] during the frame, and [`handle_all`] drains the
//! queue once the frame's widgets have run.

use std::collections::VecDeque;

use polyku_core::{CellPos, GridSize};

use crate::{
    history::{Difficulty, SortField},
    state::{AppState, Screen, Settings},
};

/// A single state mutation requested by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Select the cell at the given position.
    SelectCell(CellPos),
    /// Drop the current selection.
    ClearSelection,
    /// Move the selection one cell, wrapping at the board edge.
    MoveSelection(MoveDirection),
    /// Place a value (or toggle a note) in the selected cell.
    InputValue(u8),
    /// Clear the selected cell's value and notes.
    ClearSelectedCell,
    /// Select and clear the cell at the given position.
    EraseCell(CellPos),
    /// Flip between value entry and note entry.
    ToggleNoteMode,
    /// Start a fresh demo board of the given size.
    NewBoard(GridSize),
    /// Switch the visible screen.
    SwitchScreen(Screen),
    /// Replace the settings wholesale.
    UpdateSettings(Settings),
    /// Sort the history list by the given field.
    SortHistoryBy(SortField),
    /// Flip the history sort direction.
    ToggleHistorySortOrder,
    /// Toggle a difficulty in the history filter.
    ToggleHistoryDifficulty(Difficulty),
    /// Toggle a grid size in the history filter.
    ToggleHistorySize(GridSize),
}

/// Direction for [`Action::MoveSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// FIFO queue of pending actions for the current frame.
#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    requests: VecDeque<Action>,
}

impl ActionRequestQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues an action for processing at the end of the frame.
    pub fn request(&mut self, action: Action) {
        self.requests.push_back(action);
    }

    fn pop(&mut self) -> Option<Action> {
        self.requests.pop_front()
    }
}

/// Drains the queue, applying each action to `state` in request order.
pub fn handle_all(state: &mut AppState, queue: &mut ActionRequestQueue) {
    while let Some(action) = queue.pop() {
        log::debug!("handling action: {action:?}");
        handle(state, action);
    }
}

fn handle(state: &mut AppState, action: Action) {
    match action {
        Action::SelectCell(pos) => state.selected = Some(pos),
        Action::ClearSelection => state.selected = None,
        Action::MoveSelection(dir) => state.move_selection(dir),
        Action::InputValue(value) => {
            if let Some(pos) = state.selected {
                if state.note_mode {
                    state.board.toggle_note(pos, value);
                } else {
                    state.board.set_value(pos, value);
                }
            }
        }
        Action::ClearSelectedCell => {
            if let Some(pos) = state.selected {
                state.board.clear_cell(pos);
            }
        }
        Action::EraseCell(pos) => {
            state.selected = Some(pos);
            state.board.clear_cell(pos);
        }
        Action::ToggleNoteMode => state.note_mode = !state.note_mode,
        Action::NewBoard(size) => state.start_demo_board(size),
        Action::SwitchScreen(screen) => state.screen = screen,
        Action::UpdateSettings(settings) => {
            state.settings = settings;
            state.mark_dirty();
        }
        Action::SortHistoryBy(field) => state.history.set_sort_field(field),
        Action::ToggleHistorySortOrder => state.history.switch_sort_order(),
        Action::ToggleHistoryDifficulty(difficulty) => {
            state.history.toggle_difficulty(difficulty);
        }
        Action::ToggleHistorySize(size) => state.history.toggle_size(size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Settings::default())
    }

    fn apply(state: &mut AppState, actions: impl IntoIterator<Item = Action>) {
        let mut queue = ActionRequestQueue::new();
        for action in actions {
            queue.request(action);
        }
        handle_all(state, &mut queue);
    }

    #[test]
    fn test_select_then_input() {
        let mut state = state();
        let pos = state
            .board
            .size()
            .positions()
            .find(|&p| state.board.cell(p).is_empty())
            .unwrap();
        apply(&mut state, [Action::SelectCell(pos), Action::InputValue(5)]);
        assert_eq!(state.selected, Some(pos));
        assert_eq!(state.board.cell(pos).value, 5);
    }

    #[test]
    fn test_input_without_selection_is_ignored() {
        let mut state = state();
        apply(&mut state, [Action::ClearSelection, Action::InputValue(5)]);
        assert!(state.board.size().positions().all(|p| {
            let cell = state.board.cell(p);
            cell.locked || cell.is_empty()
        }));
    }

    #[test]
    fn test_note_mode_routes_input_to_notes() {
        let mut state = state();
        let pos = state
            .board
            .size()
            .positions()
            .find(|&p| state.board.cell(p).is_empty())
            .unwrap();
        apply(
            &mut state,
            [
                Action::SelectCell(pos),
                Action::ToggleNoteMode,
                Action::InputValue(3),
            ],
        );
        assert!(state.board.cell(pos).is_empty());
        assert!(state.board.notes().iter().any(|n| n.pos == pos && n.value == 3));
    }

    #[test]
    fn test_erase_selects_and_clears() {
        let mut state = state();
        let pos = state
            .board
            .size()
            .positions()
            .find(|&p| state.board.cell(p).is_empty())
            .unwrap();
        apply(&mut state, [Action::SelectCell(pos), Action::InputValue(2)]);
        apply(&mut state, [Action::ClearSelection, Action::EraseCell(pos)]);
        assert_eq!(state.selected, Some(pos));
        assert!(state.board.cell(pos).is_empty());
    }

    #[test]
    fn test_update_settings_marks_dirty() {
        let mut state = state();
        assert!(!state.take_dirty());
        let mut settings = state.settings.clone();
        settings.questions = true;
        apply(&mut state, [Action::UpdateSettings(settings)]);
        assert!(state.take_dirty());
        assert!(state.settings.questions);
    }

    #[test]
    fn test_switch_screen() {
        let mut state = state();
        apply(&mut state, [Action::SwitchScreen(Screen::History)]);
        assert_eq!(state.screen, Screen::History);
    }
}
