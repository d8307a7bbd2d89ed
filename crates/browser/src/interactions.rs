use html::Id;

#[derive(Default, Debug)]
pub struct InteractionState {
    pub focused_node_id: Option<Id>,
}

impl InteractionState {
    pub fn clear_focus(&mut self) {
        self.focused_node_id = None;
    }

    pub fn set_focus(&mut self, id: Id) {
        self.focused_node_id = Some(id);
    }
}
