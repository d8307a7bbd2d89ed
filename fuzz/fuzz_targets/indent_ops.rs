#![no_main]

use input_core::{EditableSurface, SelectionRange, TextSurface};
use libfuzzer_sys::fuzz_target;
use tab_indent::{IndentStyle, IndentUnit, LineLookup, insert_indent, remove_indent};

fn style_from(byte: u8) -> IndentStyle {
    let unit = if byte & 1 == 0 {
        IndentUnit::Spaces(usize::from(byte >> 4))
    } else {
        IndentUnit::Tab
    };
    let line_lookup = if byte & 2 == 0 {
        LineLookup::CumulativeLength
    } else {
        LineLookup::CaretLine
    };
    IndentStyle {
        unit,
        trailing_line_break: byte & 4 == 0,
        line_lookup,
    }
}

fn check(surface: &TextSurface) {
    let value = surface.value();
    let sel = surface.selection();
    assert!(sel.start <= sel.end);
    assert!(sel.end <= value.len());
    assert!(value.is_char_boundary(sel.start));
    assert!(value.is_char_boundary(sel.end));
}

// Input layout: [style, start_lo, end_lo, ops..., 0xFF, text...]
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let style = style_from(data[0]);
    let (ops, text) = match data[3..].iter().position(|&b| b == 0xFF) {
        Some(split) => (&data[3..3 + split], &data[4 + split..]),
        None => (&data[3..], &[][..]),
    };
    let text = String::from_utf8_lossy(text).into_owned();

    let selection = SelectionRange::new(usize::from(data[1]), usize::from(data[2]));
    let mut surface = TextSurface::new(text, selection);
    check(&surface);

    for &op in ops.iter().take(64) {
        let before = surface.value().len();
        if op & 1 == 0 {
            let caret = insert_indent(&mut surface, &style);
            assert_eq!(caret, surface.caret());
            assert!(surface.value().len() <= before + style.unit.len());
        } else {
            let report = remove_indent(&mut surface, &style);
            assert_eq!(report.caret, surface.caret());
            assert!(surface.value().len() <= before + 1);
        }
        check(&surface);
    }
});
