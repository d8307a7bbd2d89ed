use browser::{DefaultAction, EventTarget, ListenerContext, Page};
use core_types::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
use html::Node;
use input_core::{EditableSurface, SelectionRange};

fn page() -> Page {
    Page::new(Node::document(vec![Node::element(
        "body",
        Vec::new(),
        vec![
            Node::element("input", vec![("id", Some("name")), ("value", Some("ann"))], Vec::new()),
            Node::element("p", Vec::new(), vec![Node::text("between")]),
            Node::element("textarea", vec![("id", Some("editor"))], vec![Node::text("ab")]),
        ],
    )]))
}

fn tab(shift: bool) -> KeyEvent {
    let modifiers = if shift { Modifiers::SHIFT } else { Modifiers::NONE };
    KeyEvent::down(KeyCode::TAB, modifiers)
}

#[test]
fn element_lookup_and_editability() {
    let page = page();
    let editor = page.get_element_by_id("editor").expect("textarea present");
    let name = page.get_element_by_id("name").expect("input present");

    assert!(page.is_editable(editor));
    assert!(page.is_editable(name));
    assert_eq!(page.value(editor), Some("ab"));
    assert_eq!(page.value(name), Some("ann"));
    assert!(page.get_element_by_id("nope").is_none());
    assert_eq!(
        page.element(editor).and_then(Node::tag_name),
        Some("textarea")
    );
}

#[test]
fn unhandled_tab_traverses_focus_in_document_order() {
    let mut page = page();
    let name = page.get_element_by_id("name").unwrap();
    let editor = page.get_element_by_id("editor").unwrap();

    let out = page.dispatch_key(&tab(false));
    assert_eq!(
        out.default_action,
        Some(DefaultAction::FocusMoved { from: None, to: Some(name) })
    );

    page.dispatch_key(&tab(false));
    assert_eq!(page.focused(), Some(editor));

    page.dispatch_key(&tab(true));
    assert_eq!(page.focused(), Some(name));

    page.dispatch_key(&tab(true));
    assert_eq!(page.focused(), None);
}

#[test]
fn prevented_tab_keeps_focus() {
    let mut page = page();
    let editor = page.get_element_by_id("editor").unwrap();
    page.add_key_listener(
        EventTarget::Element(editor),
        KeyEventKind::Down,
        Box::new(|ev: &KeyEvent, ctx: &mut ListenerContext<'_>| {
            if ev.code == KeyCode::TAB {
                ctx.prevent_default();
            }
        }),
    );
    assert!(page.focus(editor));

    let out = page.dispatch_key(&tab(false));
    assert!(out.default_prevented);
    assert_eq!(out.listeners_run, 1);
    assert_eq!(out.default_action, None);
    assert_eq!(page.focused(), Some(editor));
}

#[test]
fn listeners_see_the_target_surface() {
    let mut page = page();
    let editor = page.get_element_by_id("editor").unwrap();
    page.add_key_listener(
        EventTarget::Document,
        KeyEventKind::Down,
        Box::new(|_: &KeyEvent, ctx: &mut ListenerContext<'_>| {
            if let Some(surface) = ctx.surface() {
                let upper = surface.value().to_uppercase();
                surface.set_value(upper);
                surface.set_selection(SelectionRange::collapsed(1));
            }
            ctx.prevent_default();
        }),
    );
    page.focus(editor);

    page.dispatch_key(&KeyEvent::down(KeyCode::ENTER, Modifiers::NONE));
    assert_eq!(page.value(editor), Some("AB"));
    assert_eq!(page.selection(editor), Some(SelectionRange::collapsed(1)));
}

#[test]
fn only_tab_has_a_default_action() {
    let mut page = page();
    let editor = page.get_element_by_id("editor").unwrap();
    page.focus(editor);

    for code in [KeyCode::ENTER, KeyCode::SHIFT, KeyCode::ALT] {
        let out = page.dispatch_key(&KeyEvent::down(code, Modifiers::SHIFT));
        assert_eq!(out.default_action, None, "{code:?}");
    }
    assert_eq!(page.value(editor), Some("ab"));
    assert_eq!(page.focused(), Some(editor));
}

#[test]
fn focus_and_blur_keep_the_caret() {
    let mut page = page();
    let editor = page.get_element_by_id("editor").unwrap();
    page.set_selection(editor, SelectionRange::new(0, 1));
    assert!(page.focus(editor));
    assert_eq!(page.selection(editor), Some(SelectionRange::new(0, 1)));

    page.blur();
    assert_eq!(page.focused(), None);
    assert_eq!(page.selection(editor), Some(SelectionRange::collapsed(1)));
}

#[test]
fn key_up_never_triggers_default_actions() {
    let mut page = page();
    let out = page.dispatch_key(&KeyEvent::up(KeyCode::TAB, Modifiers::NONE));
    assert_eq!(out.default_action, None);
    assert_eq!(page.focused(), None);
}

#[test]
fn focus_refuses_non_editable_elements() {
    let mut page = page();
    let body = page.dom().children()[0].id();
    assert!(!page.focus(body));
    assert_eq!(page.focused(), None);
}
