use super::dom::{TextControlKind, normalize_textarea_newlines, text_control_kind};
use super::index::TextControlIndex;
use crate::input_state::to_input_id;
use html::Node;
use html::dom_utils::{attr, collect_text};
use input_core::InputValueStore;

/// Seed the store with the initial value of every text control in `dom` and
/// return the tab-order index of those controls.
///
/// Entries already present in the store are left alone, so user edits survive
/// a re-seed.
pub fn seed_input_state_from_dom(store: &mut InputValueStore, dom: &Node) -> TextControlIndex {
    fn walk(store: &mut InputValueStore, node: &Node, index: &mut TextControlIndex) {
        if let Some(kind) = text_control_kind(node) {
            let id = node.id();
            index.register(id, kind);

            let input_id = to_input_id(id);
            if store.has(input_id) {
                return;
            }

            let initial = match kind {
                TextControlKind::TextInput => attr(node, "value").unwrap_or("").to_string(),
                TextControlKind::TextArea => {
                    let mut raw = String::new();
                    collect_text(node.children(), &mut raw);
                    let mut initial = normalize_textarea_newlines(&raw);

                    // HTML textarea parsing: if the first character is a newline, strip it.
                    if initial.starts_with('\n') {
                        initial.remove(0);
                    }
                    initial
                }
            };

            store.ensure_initial(input_id, initial);
            return;
        }

        for c in node.children() {
            walk(store, c, index);
        }
    }

    let mut index = TextControlIndex::default();
    walk(store, dom, &mut index);
    index
}
