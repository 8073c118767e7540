//! Keyboard shortcuts for the game screen.

use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue, MoveDirection};

struct Shortcut {
    key: Key,
    action: Action,
}

impl Shortcut {
    const fn plain(key: Key, action: Action) -> Self {
        Self { key, action }
    }

    const fn value(key: Key, value: u8) -> Self {
        Self::plain(key, Action::InputValue(value))
    }
}

const SHORTCUTS: [Shortcut; 23] = [
    Shortcut::plain(Key::ArrowUp, Action::MoveSelection(MoveDirection::Up)),
    Shortcut::plain(Key::ArrowDown, Action::MoveSelection(MoveDirection::Down)),
    Shortcut::plain(Key::ArrowLeft, Action::MoveSelection(MoveDirection::Left)),
    Shortcut::plain(Key::ArrowRight, Action::MoveSelection(MoveDirection::Right)),
    Shortcut::plain(Key::Escape, Action::ClearSelection),
    Shortcut::plain(Key::S, Action::ToggleNoteMode),
    Shortcut::plain(Key::Delete, Action::ClearSelectedCell),
    Shortcut::plain(Key::Backspace, Action::ClearSelectedCell),
    Shortcut::value(Key::Num1, 1),
    Shortcut::value(Key::Num2, 2),
    Shortcut::value(Key::Num3, 3),
    Shortcut::value(Key::Num4, 4),
    Shortcut::value(Key::Num5, 5),
    Shortcut::value(Key::Num6, 6),
    Shortcut::value(Key::Num7, 7),
    Shortcut::value(Key::Num8, 8),
    Shortcut::value(Key::Num9, 9),
    // Values past nine use their hex letters.
    Shortcut::value(Key::A, 10),
    Shortcut::value(Key::B, 11),
    Shortcut::value(Key::C, 12),
    Shortcut::value(Key::D, 13),
    Shortcut::value(Key::E, 14),
    Shortcut::value(Key::F, 15),
];

/// Translates pressed keys into actions.
///
/// Values larger than the current grid size are filtered out later by the
/// board itself.
pub fn handle_input(i: &InputState, queue: &mut ActionRequestQueue) {
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.key) && i.modifiers.is_none() {
            queue.request(shortcut.action);
            return;
        }
    }
}
