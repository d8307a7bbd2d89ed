//! Key listener registration and dispatch.
//!
//! Dispatch runs listeners on the event target first (in registration order),
//! then bubbles to listeners on the document, mirroring DOM event flow for
//! elements that sit directly under the document.

use crate::input_state::to_input_id;
use core_types::{KeyEvent, KeyEventKind, ListenerId};
use html::Id;
use input_core::{InputValueStore, StoreSurface};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Document,
    Element(Id),
}

/// Something that reacts to key events delivered to an [`EventTarget`].
pub trait KeyListener {
    fn on_key(&mut self, event: &KeyEvent, ctx: &mut ListenerContext<'_>);
}

impl<F> KeyListener for F
where
    F: FnMut(&KeyEvent, &mut ListenerContext<'_>),
{
    fn on_key(&mut self, event: &KeyEvent, ctx: &mut ListenerContext<'_>) {
        self(event, ctx)
    }
}

/// Per-listener view of the event being dispatched.
pub struct ListenerContext<'a> {
    target: EventTarget,
    current_target: EventTarget,
    surface: Option<StoreSurface<'a>>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl<'a> ListenerContext<'a> {
    /// The element the event was dispatched to.
    pub fn target(&self) -> EventTarget {
        self.target
    }

    /// The target the running listener was registered on.
    pub fn current_target(&self) -> EventTarget {
        self.current_target
    }

    /// The editable surface of the event target, if the target is a text
    /// control.
    pub fn surface(&mut self) -> Option<&mut StoreSurface<'a>> {
        self.surface.as_mut()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Skip the remaining phases (listeners on the same target still run).
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

struct Registered {
    id: ListenerId,
    target: EventTarget,
    kind: KeyEventKind,
    listener: Box<dyn KeyListener>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ListenerRun {
    pub default_prevented: bool,
    pub listeners_run: usize,
}

#[derive(Default)]
pub(crate) struct KeyListeners {
    next_id: ListenerId,
    entries: Vec<Registered>,
}

impl KeyListeners {
    pub(crate) fn add(
        &mut self,
        target: EventTarget,
        kind: KeyEventKind,
        listener: Box<dyn KeyListener>,
    ) -> ListenerId {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Registered {
            id,
            target,
            kind,
            listener,
        });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn dispatch(
        &mut self,
        event: &KeyEvent,
        target: EventTarget,
        store: &mut InputValueStore,
    ) -> ListenerRun {
        let mut run = ListenerRun::default();

        let phases = match target {
            EventTarget::Document => [Some(EventTarget::Document), None],
            EventTarget::Element(_) => [Some(target), Some(EventTarget::Document)],
        };

        for phase in phases.into_iter().flatten() {
            let mut stopped = false;
            for entry in self
                .entries
                .iter_mut()
                .filter(|e| e.target == phase && e.kind == event.kind)
            {
                let surface = match target {
                    EventTarget::Element(id) => store.surface(to_input_id(id)),
                    EventTarget::Document => None,
                };
                let mut ctx = ListenerContext {
                    target,
                    current_target: phase,
                    surface,
                    default_prevented: run.default_prevented,
                    propagation_stopped: false,
                };
                entry.listener.on_key(event, &mut ctx);
                run.listeners_run += 1;
                run.default_prevented = ctx.default_prevented;
                stopped |= ctx.propagation_stopped;
            }
            if stopped {
                break;
            }
        }

        run
    }
}
