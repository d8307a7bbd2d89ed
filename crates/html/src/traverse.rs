use crate::dom_utils::attr;
use crate::{Id, Node};

pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        let needs_id = node.id() == Id(0);

        if needs_id {
            let id = Id(*next);
            *next = next.wrapping_add(1);
            node.set_id(id);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = 1;
    walk(root, &mut next);
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    for c in node.children() {
        if let Some(found) = find_node_by_id(c, id) {
            return Some(found);
        }
    }
    None
}

/// Find the first element (in document order) whose `id` attribute equals
/// `element_id`. Matching is case-sensitive, as in HTML.
pub fn get_element_by_id<'a>(node: &'a Node, element_id: &str) -> Option<&'a Node> {
    if matches!(node, Node::Element { .. }) && attr(node, "id") == Some(element_id) {
        return Some(node);
    }
    for c in node.children() {
        if let Some(found) = get_element_by_id(c, element_id) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        let mut dom = Node::document(vec![Node::element(
            "body",
            Vec::new(),
            vec![
                Node::element("p", vec![("id", Some("intro"))], vec![Node::text("hi")]),
                Node::element("textarea", vec![("id", Some("editor"))], Vec::new()),
                Node::element("textarea", vec![("id", Some("editor"))], Vec::new()),
            ],
        )]);
        assign_node_ids(&mut dom);
        dom
    }

    #[test]
    fn assigns_ids_in_document_order() {
        let dom = sample();
        assert_eq!(dom.id(), Id(1));
        let body = &dom.children()[0];
        assert_eq!(body.id(), Id(2));
        assert_eq!(body.children()[0].id(), Id(3));
        assert_eq!(body.children()[0].children()[0].id(), Id(4));
        assert_eq!(body.children()[1].id(), Id(5));
    }

    #[test]
    fn element_lookup_returns_first_match() {
        let dom = sample();
        let found = get_element_by_id(&dom, "editor").map(Node::id);
        assert_eq!(found, Some(Id(5)));
        assert!(get_element_by_id(&dom, "Editor").is_none());
        assert!(get_element_by_id(&dom, "missing").is_none());
    }

    #[test]
    fn find_node_by_id_reaches_text_nodes() {
        let dom = sample();
        assert!(matches!(
            find_node_by_id(&dom, Id(4)),
            Some(Node::Text { text, .. }) if text == "hi"
        ));
    }
}
