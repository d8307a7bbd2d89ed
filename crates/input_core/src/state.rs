use crate::selection::SelectionRange;

/// Value and selection of one text control.
#[derive(Clone, Debug, Default)]
pub(crate) struct InputState {
    pub value: String,
    /// Always clamped to `value`; collapsed when only a caret is shown.
    pub selection: SelectionRange,
}

impl InputState {
    pub(crate) fn new(value: String) -> Self {
        let selection = SelectionRange::collapsed(value.len());
        Self { value, selection }
    }

    pub(crate) fn clamp(&mut self) {
        self.selection = self.selection.clamp_to(&self.value);
    }
}
