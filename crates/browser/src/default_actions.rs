//! What the page does with a key-down that no listener prevented.
//!
//! The only default is Tab focus traversal over the page's text controls.
//! Text editing belongs to the host widget.

use crate::page::Page;
use core_types::{KeyCode, KeyEvent};
use html::Id;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultAction {
    /// Tab / Shift+Tab focus traversal. `to == None` means focus left the page.
    FocusMoved { from: Option<Id>, to: Option<Id> },
}

pub(crate) fn apply(page: &mut Page, event: &KeyEvent) -> Option<DefaultAction> {
    if event.code != KeyCode::TAB {
        return None;
    }

    let from = page.focused();
    let controls = page.text_controls();
    let to = if event.modifiers.shift {
        controls.prev_before(from)
    } else {
        controls.next_after(from)
    };
    page.move_focus(to);
    Some(DefaultAction::FocusMoved { from, to })
}
