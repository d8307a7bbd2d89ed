//! The demo view: one page with a textarea, rendered as an egui `TextEdit`.
//!
//! egui never sees Tab while the editor has focus. Those key events are pulled
//! out of the input queue, dispatched through the page (where the indent
//! controller is attached) and the resulting value and caret are pushed back
//! into the widget.

use browser::{DefaultAction, DispatchOutcome, Page};
use core_types::{KeyCode, KeyEvent, Modifiers};
use egui::text::{CCursor, CCursorRange};
use html::{Id, Node};
use input_core::{SelectionRange, byte_to_char_index, char_to_byte_index};
use tab_indent::{AttachError, IndentConfig, IndentSubscription, attach};

pub const EDITOR_ID: &str = "editor";

const SAMPLE: &str = "fn main() {\nprintln!(\"indent me\");\n}";

fn demo_document() -> Node {
    Node::document(vec![Node::element(
        "body",
        Vec::new(),
        vec![
            Node::element("h1", Vec::new(), vec![Node::text("Tabsmith")]),
            Node::element(
                "textarea",
                vec![("id", Some(EDITOR_ID)), ("rows", Some("20"))],
                vec![Node::text(SAMPLE)],
            ),
        ],
    )])
}

/// Translate an egui Tab key event. Every other event yields `None`.
pub fn tab_event_from_egui(event: &egui::Event) -> Option<KeyEvent> {
    let egui::Event::Key {
        key: egui::Key::Tab,
        pressed,
        repeat,
        modifiers,
        ..
    } = event
    else {
        return None;
    };

    let mods = Modifiers {
        shift: modifiers.shift,
        ctrl: modifiers.ctrl,
        alt: modifiers.alt,
        meta: modifiers.mac_cmd,
    };
    let ev = if *pressed {
        KeyEvent::down(KeyCode::TAB, mods)
    } else {
        KeyEvent::up(KeyCode::TAB, mods)
    };
    Some(ev.with_repeat(*repeat))
}

fn take_tab_events(ctx: &egui::Context) -> Vec<KeyEvent> {
    ctx.input_mut(|i| {
        let mut taken = Vec::new();
        i.events.retain(|ev| match tab_event_from_egui(ev) {
            Some(key) => {
                taken.push(key);
                false
            }
            None => true,
        });
        taken
    })
}

pub struct EditorView {
    page: Page,
    editor: Id,
    config: IndentConfig,
    subscription: Option<IndentSubscription>,
    text: String,
    widget_id: egui::Id,
    last_outcome: Option<DispatchOutcome>,
}

impl EditorView {
    pub fn new(config: IndentConfig) -> Result<Self, AttachError> {
        let mut page = Page::new(demo_document());
        let subscription = attach(&mut page, EDITOR_ID, config.clone())?;
        let editor = subscription.surface();
        let text = page.value(editor).unwrap_or_default().to_string();

        Ok(Self {
            page,
            editor,
            config,
            subscription: Some(subscription),
            text,
            widget_id: egui::Id::new(EDITOR_ID),
            last_outcome: None,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn set_attached(&mut self, on: bool) -> Result<(), AttachError> {
        match (on, self.subscription.take()) {
            (true, None) => {
                self.subscription = Some(attach(&mut self.page, EDITOR_ID, self.config.clone())?);
            }
            (false, Some(sub)) => {
                sub.detach(&mut self.page);
            }
            (_, keep) => self.subscription = keep,
        }
        Ok(())
    }

    /// Selection in the page, as byte offsets into [`text`](Self::text).
    pub fn selection(&self) -> SelectionRange {
        self.page
            .selection(self.editor)
            .unwrap_or_default()
    }

    /// Mirror an edit made by the widget into the page.
    pub fn sync_from_widget(&mut self, text: &str, chars: Option<(usize, usize)>) {
        if self.page.value(self.editor) != Some(text) {
            self.page.set_value(self.editor, text.to_string());
        }
        self.text = text.to_string();
        if let Some((a, b)) = chars {
            let range = SelectionRange::new(
                char_to_byte_index(&self.text, a),
                char_to_byte_index(&self.text, b),
            );
            self.page.set_selection(self.editor, range);
        }
    }

    /// Dispatch a key event to the focused editor through the page.
    pub fn dispatch(&mut self, event: &KeyEvent) -> DispatchOutcome {
        self.page.focus(self.editor);
        let outcome = self.page.dispatch_key(event);
        self.text = self.page.value(self.editor).unwrap_or_default().to_string();
        log::debug!("{:?} {:?} -> {:?}", event.code, event.modifiers, outcome);
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Whether the last dispatched event moved page focus off the editor.
    fn focus_left_editor(&self) -> bool {
        matches!(
            self.last_outcome,
            Some(DispatchOutcome {
                default_action: Some(DefaultAction::FocusMoved { to, .. }),
                ..
            }) if to != Some(self.editor)
        )
    }

    fn push_selection(&self, ctx: &egui::Context) {
        let sel = self.selection();
        let start = byte_to_char_index(&self.text, sel.start);
        let end = byte_to_char_index(&self.text, sel.end);
        if let Some(mut state) = egui::TextEdit::load_state(ctx, self.widget_id) {
            state.cursor.set_char_range(Some(CCursorRange::two(
                CCursor::new(start),
                CCursor::new(end),
            )));
            state.store(ctx, self.widget_id);
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let has_focus = ctx.memory(|m| m.has_focus(self.widget_id));
        if has_focus {
            let tabs = take_tab_events(ctx);
            if !tabs.is_empty() {
                for ev in &tabs {
                    self.dispatch(ev);
                }
                if self.focus_left_editor() {
                    ctx.memory_mut(|m| m.surrender_focus(self.widget_id));
                    self.page.blur();
                } else {
                    self.push_selection(ctx);
                }
            }
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut attached = self.is_attached();
                if ui.checkbox(&mut attached, "Tab indentation").changed() {
                    if let Err(e) = self.set_attached(attached) {
                        eprintln!("attach failed: {e}");
                    }
                }
                let sel = self.selection();
                ui.label(format!("selection {}..{}", sel.start, sel.end));
                if let Some(outcome) = self.last_outcome {
                    ui.label(format!(
                        "last Tab: prevented={}, listeners={}",
                        outcome.default_prevented, outcome.listeners_run
                    ));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut text = self.text.clone();
            let output = egui::TextEdit::multiline(&mut text)
                .id(self.widget_id)
                .code_editor()
                .lock_focus(true)
                .desired_rows(20)
                .desired_width(f32::INFINITY)
                .show(ui);

            let chars = output
                .cursor_range
                .map(|r| (r.secondary.index, r.primary.index));
            self.sync_from_widget(&text, chars);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: egui::Key, pressed: bool, modifiers: egui::Modifiers) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers,
        }
    }

    #[test]
    fn only_tab_key_events_are_translated() {
        let down = tab_event_from_egui(&key(egui::Key::Tab, true, egui::Modifiers::SHIFT))
            .expect("tab event");
        assert_eq!(down, KeyEvent::down(KeyCode::TAB, Modifiers::SHIFT));

        let up = tab_event_from_egui(&key(egui::Key::Tab, false, egui::Modifiers::NONE))
            .expect("tab event");
        assert_eq!(up, KeyEvent::up(KeyCode::TAB, Modifiers::NONE));

        assert!(tab_event_from_egui(&key(egui::Key::Enter, true, egui::Modifiers::NONE)).is_none());
        assert!(tab_event_from_egui(&egui::Event::Text("\t".into())).is_none());
    }

    #[test]
    fn tab_goes_through_the_attached_controller() {
        let mut view = EditorView::new(IndentConfig::default()).expect("demo page");
        assert!(view.is_attached());

        // caret at the start of the second line
        view.sync_from_widget(SAMPLE, Some((12, 12)));
        let out = view.dispatch(&KeyEvent::down(KeyCode::TAB, Modifiers::NONE));

        assert!(out.default_prevented);
        assert!(view.text().starts_with("fn main() {\n    println!"));
        assert_eq!(view.selection(), SelectionRange::collapsed(16));
        assert!(!view.focus_left_editor());
    }

    #[test]
    fn detached_tab_moves_focus_away() {
        let mut view = EditorView::new(IndentConfig::default()).expect("demo page");
        view.set_attached(false).expect("detach");
        assert!(!view.is_attached());

        let out = view.dispatch(&KeyEvent::down(KeyCode::TAB, Modifiers::NONE));
        assert!(!out.default_prevented);
        assert!(view.focus_left_editor());
        assert_eq!(view.text(), SAMPLE);

        view.set_attached(true).expect("re-attach");
        assert!(view.is_attached());
    }

    #[test]
    fn widget_edits_reach_the_page() {
        let mut view = EditorView::new(IndentConfig::default()).expect("demo page");
        view.sync_from_widget("héllo", Some((2, 2)));
        assert_eq!(view.selection(), SelectionRange::collapsed(3));

        view.dispatch(&KeyEvent::down(KeyCode::TAB, Modifiers::NONE));
        assert_eq!(view.text(), "hé    llo");
    }
}
