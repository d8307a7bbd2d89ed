use crate::interactions::InteractionState;
use html::Id;
use input_core::{InputId, InputValueStore};

/// Document-scoped input state owned by the page.
#[derive(Debug, Default)]
pub struct DocumentInputState {
    pub input_values: InputValueStore,
    pub interaction: InteractionState,
}

impl DocumentInputState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[inline]
pub fn to_input_id(id: Id) -> InputId {
    InputId::from(id.0)
}
