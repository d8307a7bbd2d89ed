//! Shift/ctrl state as seen by the controller.

use browser::{KeyListener, ListenerContext};
use core_types::{KeyCode, KeyEvent};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub shift_active: bool,
    pub ctrl_active: bool,
}

impl ModifierState {
    /// The state carried by a single event.
    pub fn from_event(event: &KeyEvent) -> Self {
        Self {
            shift_active: event.modifiers.shift,
            ctrl_active: event.modifiers.ctrl,
        }
    }

    /// Flip the flag for `code` (Shift or Control). Returns `false` and leaves
    /// the state alone for any other key.
    pub fn toggle(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::SHIFT => self.shift_active = !self.shift_active,
            KeyCode::CONTROL => self.ctrl_active = !self.ctrl_active,
            _ => return false,
        }
        true
    }
}

/// Shared toggled state for [`ModifierSource::Toggled`](crate::ModifierSource::Toggled).
pub type SharedModifiers = Rc<Cell<ModifierState>>;

/// Document-level listener that flips the shared state on every Shift or
/// Control event it sees, key-down and key-up alike. Repeated key-downs flip
/// it again.
pub(crate) struct ModifierToggle {
    state: SharedModifiers,
}

impl ModifierToggle {
    pub(crate) fn new(state: SharedModifiers) -> Self {
        Self { state }
    }
}

impl KeyListener for ModifierToggle {
    fn on_key(&mut self, event: &KeyEvent, _ctx: &mut ListenerContext<'_>) {
        if !event.code.is_tracked_modifier() {
            return;
        }
        let mut state = self.state.get();
        state.toggle(event.code);
        log::trace!("modifier toggle {:?} {:?} -> {:?}", event.code, event.kind, state);
        self.state.set(state);
    }
}
