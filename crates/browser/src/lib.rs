//! The host page: a DOM with text controls, keyboard focus, key listeners and
//! the default actions a browser performs for unhandled keys.

pub mod form_controls;
pub mod input_state;
pub mod interactions;

mod default_actions;
mod listeners;
mod page;

pub use default_actions::DefaultAction;
pub use form_controls::{TextControlIndex, TextControlKind};
pub use input_state::to_input_id;
pub use listeners::{EventTarget, KeyListener, ListenerContext};
pub use page::{DispatchOutcome, Page};
