//! Per-document table of text control values and selections.
//!
//! The store only holds state. Edits are made through an
//! [`EditableSurface`](crate::EditableSurface) obtained from
//! [`InputValueStore::surface`].

use crate::id::InputId;
use crate::selection::SelectionRange;
use crate::state::InputState;
use crate::surface::StoreSurface;
use std::collections::HashMap;

/// Values and selections of every text control on a page.
///
/// ```
/// use input_core::{EditableSurface, InputId, InputValueStore, SelectionRange};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::from_raw(1);
/// store.ensure_initial(id, "Hello".to_string());
///
/// let mut surface = store.surface(id).unwrap();
/// surface.set_value("Hello World".to_string());
/// surface.set_selection(SelectionRange::collapsed(5));
///
/// assert_eq!(store.get(id), Some("Hello World"));
/// assert_eq!(store.selection(id), Some(SelectionRange::collapsed(5)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, InputState>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|st| st.value.as_str())
    }

    pub fn selection(&self, id: InputId) -> Option<SelectionRange> {
        self.values.get(&id).map(|st| st.selection)
    }

    /// Replace the value. The caret moves to the end.
    pub fn set(&mut self, id: InputId, value: String) {
        self.values.insert(id, InputState::new(value));
    }

    /// Insert `initial` unless the control already has a value.
    pub fn ensure_initial(&mut self, id: InputId, initial: String) {
        self.values
            .entry(id)
            .or_insert_with(|| InputState::new(initial));
    }

    /// Replace the selection, snapped onto character boundaries. Unknown
    /// controls are ignored.
    pub fn set_selection(&mut self, id: InputId, range: SelectionRange) {
        if let Some(st) = self.values.get_mut(&id) {
            st.selection = range;
            st.clamp();
        }
    }

    /// A control gaining focus keeps its selection.
    pub fn focus(&mut self, id: InputId) {
        if let Some(st) = self.values.get_mut(&id) {
            st.clamp();
        }
    }

    /// A control losing focus collapses its selection to the caret.
    pub fn blur(&mut self, id: InputId) {
        if let Some(st) = self.values.get_mut(&id) {
            st.clamp();
            st.selection = SelectionRange::collapsed(st.selection.end);
        }
    }

    /// Borrow one entry as an [`EditableSurface`](crate::EditableSurface).
    pub fn surface(&mut self, id: InputId) -> Option<StoreSurface<'_>> {
        if !self.has(id) {
            return None;
        }
        Some(StoreSurface::new(self, id))
    }
}
