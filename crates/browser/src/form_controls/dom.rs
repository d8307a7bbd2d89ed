use html::Node;
use html::dom_utils::{attr, has_attr, is_element_named};

/// The kinds of element that own an editable text value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextControlKind {
    /// `<textarea>`: multi-line, seeded from its text content.
    TextArea,
    /// `<input>` of a text-like type, seeded from its `value` attribute.
    TextInput,
}

/// The text control kind of `node`, or `None` for anything that is not an
/// enabled text control. Disabled controls take no focus and no edits.
pub fn text_control_kind(node: &Node) -> Option<TextControlKind> {
    if has_attr(node, "disabled") {
        return None;
    }
    if is_element_named(node, "textarea") {
        return Some(TextControlKind::TextArea);
    }
    if !is_element_named(node, "input") {
        return None;
    }

    let ty = attr(node, "type").map(str::trim).filter(|s| !s.is_empty());
    match ty {
        None => Some(TextControlKind::TextInput), // missing type defaults to text
        Some(t)
            if ["text", "search", "url", "email", "tel", "password"]
                .iter()
                .any(|k| t.eq_ignore_ascii_case(k)) =>
        {
            Some(TextControlKind::TextInput)
        }
        _ => None,
    }
}

pub(super) fn normalize_textarea_newlines(s: &str) -> String {
    // Browsers store textarea values with LF newlines.
    input_core::normalize_newlines(s).into_owned()
}
