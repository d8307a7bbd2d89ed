use crate::indent::{Outdent, insert_indent, remove_indent};
use crate::modifiers::{ModifierState, SharedModifiers};
use crate::style::IndentStyle;
use browser::{KeyListener, ListenerContext};
use core_types::{KeyCode, KeyEvent};
use input_core::EditableSurface;

/// What the controller did with a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabAction {
    /// Tab without shift: one indent unit inserted, caret at `caret`.
    Indented { caret: usize },
    /// Shift+Tab.
    Outdented(Outdent),
    /// Not a Tab key-down.
    Ignored,
}

impl TabAction {
    pub fn is_handled(&self) -> bool {
        !matches!(self, TabAction::Ignored)
    }
}

enum ModifierReader {
    Event,
    Toggled(SharedModifiers),
}

/// Turns Tab key-downs on a text surface into indent edits.
///
/// Used directly through [`handle_key_down`](Self::handle_key_down), or
/// registered on a page as a [`KeyListener`] by [`attach`](crate::attach).
pub struct IndentController {
    style: IndentStyle,
    modifiers: ModifierReader,
}

impl IndentController {
    /// A controller reading shift from each event's own flags.
    pub fn new(style: IndentStyle) -> Self {
        Self {
            style,
            modifiers: ModifierReader::Event,
        }
    }

    /// A controller reading shift from state flipped by document listeners.
    pub fn with_toggled_modifiers(style: IndentStyle, state: SharedModifiers) -> Self {
        Self {
            style,
            modifiers: ModifierReader::Toggled(state),
        }
    }

    pub fn style(&self) -> &IndentStyle {
        &self.style
    }

    /// Modifier state in effect for `event`. Ctrl is reported but never
    /// changes the decision.
    pub fn modifier_state(&self, event: &KeyEvent) -> ModifierState {
        match &self.modifiers {
            ModifierReader::Event => ModifierState::from_event(event),
            ModifierReader::Toggled(state) => state.get(),
        }
    }

    /// Indent on Tab, outdent on Shift+Tab; ignore everything else.
    pub fn handle_key_down<S>(&self, event: &KeyEvent, surface: &mut S) -> TabAction
    where
        S: EditableSurface + ?Sized,
    {
        if !event.is_down() || event.code != KeyCode::TAB {
            return TabAction::Ignored;
        }

        if self.modifier_state(event).shift_active {
            TabAction::Outdented(remove_indent(surface, &self.style))
        } else {
            TabAction::Indented {
                caret: insert_indent(surface, &self.style),
            }
        }
    }
}

impl KeyListener for IndentController {
    fn on_key(&mut self, event: &KeyEvent, ctx: &mut ListenerContext<'_>) {
        if !event.is_down() || event.code != KeyCode::TAB {
            return;
        }
        // Tab never leaves the surface while attached, even when the edit is
        // a no-op.
        ctx.prevent_default();

        let Some(surface) = ctx.surface() else {
            return;
        };
        let action = self.handle_key_down(event, surface);
        log::trace!("tab on {:?}: {:?}", ctx.target(), action);
    }
}
