use super::dom::TextControlKind;
use html::Id;
use std::collections::HashMap;

/// Text controls discovered in the DOM, in document (tab) order.
#[derive(Clone, Debug, Default)]
pub struct TextControlIndex {
    kinds: HashMap<Id, TextControlKind>,
    order: Vec<Id>,
}

impl TextControlIndex {
    pub(super) fn register(&mut self, id: Id, kind: TextControlKind) {
        // Last write wins for the kind; order keeps the first sighting.
        if self.kinds.insert(id, kind).is_none() {
            self.order.push(id);
        }
    }

    pub fn kind(&self, id: Id) -> Option<TextControlKind> {
        self.kinds.get(&id).copied()
    }

    pub fn contains(&self, id: Id) -> bool {
        self.kinds.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The control after `from` in tab order (`None` = before the first one).
    /// Returns `None` when focus would leave the page.
    pub fn next_after(&self, from: Option<Id>) -> Option<Id> {
        match from.and_then(|id| self.position(id)) {
            Some(pos) => self.order.get(pos + 1).copied(),
            None => self.order.first().copied(),
        }
    }

    /// The control before `from` in tab order (`None` = after the last one).
    pub fn prev_before(&self, from: Option<Id>) -> Option<Id> {
        match from.and_then(|id| self.position(id)) {
            Some(0) => None,
            Some(pos) => self.order.get(pos - 1).copied(),
            None => self.order.last().copied(),
        }
    }

    fn position(&self, id: Id) -> Option<usize> {
        self.order.iter().position(|&o| o == id)
    }
}
