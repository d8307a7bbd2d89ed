use crate::Node;

/// Value of the attribute `name` (ASCII case-insensitive), if present.
///
/// Boolean attributes without a value yield `None`; use [`has_attr`] for them.
pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// Concatenate the text of all descendant text nodes.
pub fn collect_text(nodes: &[Node], out: &mut String) {
    for n in nodes {
        match n {
            Node::Text { text, .. } => out.push_str(text),
            Node::Element { children, .. } | Node::Document { children, .. } => {
                collect_text(children, out);
            }
            Node::Comment { .. } => {}
        }
    }
}

pub fn is_element_named(node: &Node, tag: &str) -> bool {
    node.tag_name().is_some_and(|name| name.eq_ignore_ascii_case(tag))
}
