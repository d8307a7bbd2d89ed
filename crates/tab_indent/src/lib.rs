//! # tab_indent
//!
//! Tab-key indentation for text controls on a [`browser::Page`].
//!
//! While attached, Tab inserts one indent unit at the caret (replacing any
//! selection) and Shift+Tab strips one unit from the start of a line. The
//! page's default Tab action, moving focus, is suppressed.
//!
//! ```
//! use browser::Page;
//! use core_types::{KeyCode, KeyEvent, Modifiers};
//! use html::Node;
//! use tab_indent::{IndentConfig, attach};
//!
//! let mut page = Page::new(Node::document(vec![Node::element(
//!     "textarea",
//!     vec![("id", Some("code"))],
//!     vec![Node::text("fn main() {}")],
//! )]));
//! let sub = attach(&mut page, "code", IndentConfig::default()).unwrap();
//!
//! page.focus(sub.surface());
//! page.dispatch_key(&KeyEvent::down(KeyCode::TAB, Modifiers::NONE));
//! assert_eq!(page.value(sub.surface()), Some("fn main() {}    "));
//!
//! sub.detach(&mut page);
//! ```
//!
//! The edit operations work on any [`input_core::EditableSurface`] and can be
//! used without a page through [`insert_indent`] and [`remove_indent`].

mod attach;
mod controller;
mod indent;
mod modifiers;
mod style;

pub use attach::{AttachError, IndentSubscription, attach};
pub use controller::{IndentController, TabAction};
pub use indent::{Outdent, insert_indent, remove_indent};
pub use modifiers::{ModifierState, SharedModifiers};
pub use style::{IndentConfig, IndentStyle, IndentUnit, LineLookup, ModifierSource};
