use crate::default_actions::{self, DefaultAction};
use crate::form_controls::{TextControlIndex, seed_input_state_from_dom};
use crate::input_state::{DocumentInputState, to_input_id};
use crate::listeners::{EventTarget, KeyListener, KeyListeners};
use core_types::{KeyEvent, KeyEventKind, ListenerId};
use html::{Id, Node, assign_node_ids, find_node_by_id, get_element_by_id};
use input_core::{SelectionRange, StoreSurface};

/// Result of [`Page::dispatch_key`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub default_prevented: bool,
    pub listeners_run: usize,
    /// The default action the page performed, if any.
    pub default_action: Option<DefaultAction>,
}

/// A loaded document: its DOM, the state of its text controls, keyboard
/// focus and the key listeners registered against it.
pub struct Page {
    dom: Node,
    controls: TextControlIndex,
    input: DocumentInputState,
    listeners: KeyListeners,
}

impl Page {
    /// Take ownership of `dom`, assign node ids and seed text control values.
    pub fn new(mut dom: Node) -> Self {
        assign_node_ids(&mut dom);
        let mut input = DocumentInputState::new();
        let controls = seed_input_state_from_dom(&mut input.input_values, &dom);
        log::debug!("page loaded with {} text control(s)", controls.len());

        Self {
            dom,
            controls,
            input,
            listeners: KeyListeners::default(),
        }
    }

    pub fn dom(&self) -> &Node {
        &self.dom
    }

    /// The node id of the first element whose `id` attribute is `element_id`.
    pub fn get_element_by_id(&self, element_id: &str) -> Option<Id> {
        get_element_by_id(&self.dom, element_id).map(Node::id)
    }

    pub fn element(&self, id: Id) -> Option<&Node> {
        find_node_by_id(&self.dom, id)
    }

    pub fn is_editable(&self, id: Id) -> bool {
        self.controls.contains(id)
    }

    pub fn text_controls(&self) -> &TextControlIndex {
        &self.controls
    }

    // --- focus ---

    pub fn focused(&self) -> Option<Id> {
        self.input.interaction.focused_node_id
    }

    /// Focus a text control. Returns `false` (and leaves focus alone) for
    /// anything that is not editable.
    pub fn focus(&mut self, id: Id) -> bool {
        if !self.is_editable(id) {
            return false;
        }
        self.move_focus(Some(id));
        true
    }

    pub fn blur(&mut self) {
        self.move_focus(None);
    }

    pub(crate) fn move_focus(&mut self, to: Option<Id>) {
        let from = self.focused();
        if from == to {
            return;
        }
        if let Some(prev) = from {
            self.input.input_values.blur(to_input_id(prev));
        }
        match to {
            Some(id) => {
                self.input.input_values.focus(to_input_id(id));
                self.input.interaction.set_focus(id);
            }
            None => self.input.interaction.clear_focus(),
        }
    }

    // --- text control state ---

    pub fn value(&self, id: Id) -> Option<&str> {
        self.input.input_values.get(to_input_id(id))
    }

    pub fn selection(&self, id: Id) -> Option<SelectionRange> {
        self.input.input_values.selection(to_input_id(id))
    }

    /// Overwrite a text control's value. The caret moves to the end.
    pub fn set_value(&mut self, id: Id, value: String) -> bool {
        if !self.is_editable(id) {
            return false;
        }
        self.input.input_values.set(to_input_id(id), value);
        true
    }

    pub fn set_selection(&mut self, id: Id, selection: SelectionRange) {
        self.input
            .input_values
            .set_selection(to_input_id(id), selection);
    }

    pub fn surface(&mut self, id: Id) -> Option<StoreSurface<'_>> {
        self.input.input_values.surface(to_input_id(id))
    }

    // --- events ---

    pub fn add_key_listener(
        &mut self,
        target: EventTarget,
        kind: KeyEventKind,
        listener: Box<dyn KeyListener>,
    ) -> ListenerId {
        self.listeners.add(target, kind, listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver a key event to the focused text control (or the document when
    /// nothing is focused), then run the page's default action unless a
    /// listener prevented it.
    pub fn dispatch_key(&mut self, event: &KeyEvent) -> DispatchOutcome {
        let target = self
            .focused()
            .map(EventTarget::Element)
            .unwrap_or(EventTarget::Document);

        let run = self
            .listeners
            .dispatch(event, target, &mut self.input.input_values);

        let default_action = if run.default_prevented || !event.is_down() {
            None
        } else {
            default_actions::apply(self, event)
        };

        log::trace!(
            "key {:?} {:?} -> {:?}: {} listener(s), prevented={}, default={:?}",
            event.code,
            event.kind,
            target,
            run.listeners_run,
            run.default_prevented,
            default_action
        );

        DispatchOutcome {
            default_prevented: run.default_prevented,
            listeners_run: run.listeners_run,
            default_action,
        }
    }
}
