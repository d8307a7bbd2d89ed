use crate::controller::IndentController;
use crate::modifiers::{ModifierState, ModifierToggle, SharedModifiers};
use crate::style::{IndentConfig, ModifierSource};
use browser::{EventTarget, Page};
use core_types::{KeyEventKind, ListenerId};
use html::Id;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachError {
    #[error("no element with id `{id}`")]
    SurfaceNotFound { id: String },

    #[error("element `{id}` (<{tag}>) is not an editable text control")]
    NotEditable { id: String, tag: String },
}

/// Listeners installed by [`attach`]. Pass back to
/// [`detach`](Self::detach) to remove them.
#[derive(Debug)]
#[must_use = "the listeners stay installed until the subscription is detached"]
pub struct IndentSubscription {
    surface: Id,
    listeners: Vec<ListenerId>,
    toggled: Option<SharedModifiers>,
}

impl IndentSubscription {
    pub fn surface(&self) -> Id {
        self.surface
    }

    pub fn listener_ids(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Current toggled state; `None` when modifiers are read from events.
    pub fn modifier_state(&self) -> Option<ModifierState> {
        self.toggled.as_ref().map(|s| s.get())
    }

    /// Remove every listener this subscription installed. Returns how many
    /// were still registered.
    pub fn detach(self, page: &mut Page) -> usize {
        let removed = self
            .listeners
            .iter()
            .filter(|&&id| page.remove_listener(id))
            .count();
        log::debug!(
            "tab indentation detached from {:?} ({removed} listener(s) removed)",
            self.surface
        );
        removed
    }
}

/// Install Tab indentation on the text control whose `id` attribute is
/// `surface_id`.
///
/// A key-down listener goes on the control. With
/// [`ModifierSource::Toggled`], two document listeners (key-down and key-up)
/// are added as well to maintain the shared shift/ctrl flags.
pub fn attach(
    page: &mut Page,
    surface_id: &str,
    config: IndentConfig,
) -> Result<IndentSubscription, AttachError> {
    let surface = page
        .get_element_by_id(surface_id)
        .ok_or_else(|| AttachError::SurfaceNotFound {
            id: surface_id.to_string(),
        })?;

    if !page.is_editable(surface) {
        let tag = page
            .element(surface)
            .and_then(|n| n.tag_name())
            .unwrap_or_default()
            .to_string();
        return Err(AttachError::NotEditable {
            id: surface_id.to_string(),
            tag,
        });
    }

    let mut listeners = Vec::with_capacity(3);
    let (controller, toggled) = match config.modifiers {
        ModifierSource::Event => (IndentController::new(config.style), None),
        ModifierSource::Toggled => {
            let state: SharedModifiers = Rc::new(Cell::new(ModifierState::default()));
            for kind in [KeyEventKind::Down, KeyEventKind::Up] {
                listeners.push(page.add_key_listener(
                    EventTarget::Document,
                    kind,
                    Box::new(ModifierToggle::new(Rc::clone(&state))),
                ));
            }
            (
                IndentController::with_toggled_modifiers(config.style, Rc::clone(&state)),
                Some(state),
            )
        }
    };

    listeners.insert(
        0,
        page.add_key_listener(
            EventTarget::Element(surface),
            KeyEventKind::Down,
            Box::new(controller),
        ),
    );

    log::debug!(
        "tab indentation attached to `{surface_id}` ({surface:?}), {:?} modifiers",
        config.modifiers
    );

    Ok(IndentSubscription {
        surface,
        listeners,
        toggled,
    })
}
