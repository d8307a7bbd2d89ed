//! The editable-surface abstraction: a text value plus a selection range.
//!
//! Editing features (such as Tab indentation) are written against
//! [`EditableSurface`] so they work the same on a standalone buffer and on a
//! text control living inside an [`InputValueStore`].

use crate::id::InputId;
use crate::selection::SelectionRange;
use crate::store::InputValueStore;

/// A mutable text value with a selection.
///
/// Offsets are byte indices into [`value`](Self::value). Implementations clamp
/// whatever they are given onto character boundaries, so callers never have
/// to.
pub trait EditableSurface {
    fn value(&self) -> &str;

    /// Current selection; collapsed at the caret when nothing is selected.
    fn selection(&self) -> SelectionRange;

    /// Replace the whole value. The selection afterwards is unspecified until
    /// [`set_selection`](Self::set_selection) is called.
    fn set_value(&mut self, value: String);

    fn set_selection(&mut self, selection: SelectionRange);
}

/// An owned value + selection, for callers that are not backed by a store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextSurface {
    value: String,
    selection: SelectionRange,
}

impl TextSurface {
    pub fn new(value: impl Into<String>, selection: SelectionRange) -> Self {
        let value = value.into();
        let selection = selection.clamp_to(&value);
        Self { value, selection }
    }

    /// A surface with the caret at byte offset `caret`.
    pub fn with_caret(value: impl Into<String>, caret: usize) -> Self {
        Self::new(value, SelectionRange::collapsed(caret))
    }

    pub fn caret(&self) -> usize {
        self.selection.end
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl EditableSurface for TextSurface {
    fn value(&self) -> &str {
        &self.value
    }

    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
        self.selection = self.selection.clamp_to(&self.value);
    }

    fn set_selection(&mut self, selection: SelectionRange) {
        self.selection = selection.clamp_to(&self.value);
    }
}

/// A view of one [`InputValueStore`] entry as an editable surface.
///
/// Obtained through [`InputValueStore::surface`].
#[derive(Debug)]
pub struct StoreSurface<'a> {
    store: &'a mut InputValueStore,
    id: InputId,
}

impl<'a> StoreSurface<'a> {
    pub(crate) fn new(store: &'a mut InputValueStore, id: InputId) -> Self {
        Self { store, id }
    }

    pub fn id(&self) -> InputId {
        self.id
    }
}

impl EditableSurface for StoreSurface<'_> {
    fn value(&self) -> &str {
        self.store.get(self.id).unwrap_or("")
    }

    fn selection(&self) -> SelectionRange {
        self.store
            .selection(self.id)
            .unwrap_or(SelectionRange::collapsed(0))
    }

    fn set_value(&mut self, value: String) {
        self.store.set(self.id, value);
    }

    fn set_selection(&mut self, selection: SelectionRange) {
        self.store.set_selection(self.id, selection);
    }
}
