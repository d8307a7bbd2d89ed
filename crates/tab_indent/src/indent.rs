//! Insert-Indent and Remove-Indent over any [`EditableSurface`].

use crate::style::{IndentStyle, LineLookup};
use input_core::{EditableSurface, SelectionRange};
use memchr::memchr_iter;
use std::ops::Range;

/// What [`remove_indent`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outdent {
    /// Caret after the edit.
    pub caret: usize,
    /// Whether an indent unit was stripped.
    pub removed: bool,
    /// Zero-based index of the line that was examined, if any line matched.
    pub line: Option<usize>,
}

/// Replace the selection with one indent unit and collapse the caret after it.
///
/// Returns the new caret.
pub fn insert_indent<S>(surface: &mut S, style: &IndentStyle) -> usize
where
    S: EditableSurface + ?Sized,
{
    let unit = style.unit.text();
    let value = surface.value();
    let sel = surface.selection().clamp_to(value);

    let mut out = String::with_capacity(value.len() - sel.len() + unit.len());
    out.push_str(&value[..sel.start]);
    out.push_str(&unit);
    out.push_str(&value[sel.end..]);

    let caret = sel.start + unit.len();
    surface.set_value(out);
    surface.set_selection(SelectionRange::collapsed(caret));
    caret
}

/// Strip one indent unit from the start of the line picked by
/// `style.line_lookup` and write the reassembled text back.
///
/// The caret is the selection start; a selection's end is ignored. The text is
/// always rewritten, even when nothing was stripped.
pub fn remove_indent<S>(surface: &mut S, style: &IndentStyle) -> Outdent
where
    S: EditableSurface + ?Sized,
{
    let unit = style.unit.text();
    let value = surface.value();
    let caret = surface.selection().clamp_to(value).start;
    let lines = line_spans(value);

    let line = match style.line_lookup {
        LineLookup::CumulativeLength => cumulative_line(&lines, caret),
        LineLookup::CaretLine => caret_line(&lines, caret),
    };

    let strip = line.filter(|&i| value[lines[i].clone()].starts_with(unit.as_ref()));

    let mut out = String::with_capacity(value.len() + 1);
    for (i, span) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let start = if strip == Some(i) {
            span.start + unit.len()
        } else {
            span.start
        };
        out.push_str(&value[start..span.end]);
    }
    if style.trailing_line_break {
        out.push('\n');
    }

    let new_caret = match strip {
        None => caret,
        Some(i) => match style.line_lookup {
            LineLookup::CumulativeLength => caret.saturating_sub(unit.len()),
            LineLookup::CaretLine => {
                let line_start = lines[i].start;
                if caret < line_start + unit.len() {
                    line_start
                } else {
                    caret - unit.len()
                }
            }
        },
    };

    log::trace!(
        "outdent: caret {caret} -> {new_caret}, line {line:?}, removed={}",
        strip.is_some()
    );

    surface.set_value(out);
    surface.set_selection(SelectionRange::collapsed(new_caret));

    Outdent {
        caret: surface.selection().start,
        removed: strip.is_some(),
        line,
    }
}

/// Byte spans of the `'\n'`-separated lines of `value`, without separators.
/// A value with `n` newlines has `n + 1` lines.
fn line_spans(value: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;
    for nl in memchr_iter(b'\n', value.as_bytes()) {
        spans.push(start..nl);
        start = nl + 1;
    }
    spans.push(start..value.len());
    spans
}

fn cumulative_line(lines: &[Range<usize>], caret: usize) -> Option<usize> {
    let mut count = 0;
    lines.iter().position(|span| {
        count += span.len();
        count >= caret
    })
}

fn caret_line(lines: &[Range<usize>], caret: usize) -> Option<usize> {
    lines
        .iter()
        .position(|span| span.start <= caret && caret <= span.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::IndentUnit;
    use input_core::TextSurface;

    fn outdent(value: &str, caret: usize, style: &IndentStyle) -> (String, Outdent) {
        let mut s = TextSurface::with_caret(value, caret);
        let report = remove_indent(&mut s, style);
        assert_eq!(s.selection(), SelectionRange::collapsed(report.caret));
        (s.into_value(), report)
    }

    #[test]
    fn line_spans_split_like_a_plain_newline_split() {
        assert_eq!(line_spans(""), vec![0..0]);
        assert_eq!(line_spans("a\n"), vec![0..1, 2..2]);
        assert_eq!(line_spans("ab\n\ncd"), vec![0..2, 3..3, 4..6]);
    }

    #[test]
    fn insert_at_caret() {
        let mut s = TextSurface::with_caret("ab", 1);
        let caret = insert_indent(&mut s, &IndentStyle::default());
        assert_eq!(caret, 5);
        assert_eq!(s.value(), "a    b");
        assert_eq!(s.selection(), SelectionRange::collapsed(5));
    }

    #[test]
    fn insert_replaces_the_selection() {
        let mut s = TextSurface::new("abcd", SelectionRange::new(1, 3));
        let caret = insert_indent(&mut s, &IndentStyle::default());
        assert_eq!(s.value(), "a    d");
        assert_eq!(caret, 5);
    }

    #[test]
    fn insert_uses_the_configured_unit() {
        let mut s = TextSurface::with_caret("x", 0);
        insert_indent(&mut s, &IndentStyle::tabs());
        assert_eq!(s.value(), "\tx");
        assert_eq!(s.caret(), 1);

        let mut s = TextSurface::with_caret("x", 1);
        insert_indent(&mut s, &IndentStyle::spaces(2));
        assert_eq!(s.value(), "x  ");
        assert_eq!(s.caret(), 3);
    }

    #[test]
    fn insert_never_splits_a_character() {
        // byte 1 is inside 'é'
        let mut s = TextSurface::new("é!", SelectionRange::collapsed(1));
        insert_indent(&mut s, &IndentStyle::default());
        assert!(s.value().is_char_boundary(s.caret()));
        assert_eq!(s.value().chars().filter(|&c| c == 'é').count(), 1);
    }

    #[test]
    fn outdent_strips_one_unit() {
        let (value, report) = outdent("    abc", 7, &IndentStyle::default());
        assert_eq!(value, "abc\n");
        assert_eq!(
            report,
            Outdent {
                caret: 3,
                removed: true,
                line: Some(0)
            }
        );
    }

    #[test]
    fn outdent_without_a_prefix_only_reassembles() {
        let (value, report) = outdent("abc", 2, &IndentStyle::default());
        assert_eq!(value, "abc\n");
        assert_eq!(report.caret, 2);
        assert!(!report.removed);
    }

    #[test]
    fn outdent_is_idempotent_on_a_single_unit() {
        let style = IndentStyle::default();
        let mut s = TextSurface::with_caret("    abc", 7);
        remove_indent(&mut s, &style);
        let second = remove_indent(&mut s, &style);
        assert!(!second.removed);
        assert!(s.value().starts_with("abc"));
        assert_eq!(s.caret(), 3);
    }

    #[test]
    fn outdent_always_appends_a_newline_by_default() {
        let (value, _) = outdent("abc\n", 0, &IndentStyle::default());
        assert_eq!(value, "abc\n\n");
    }

    #[test]
    fn outdent_can_preserve_the_trailing_newline_state() {
        let style = IndentStyle::default().with_trailing_line_break(false);
        assert_eq!(outdent("    abc", 7, &style).0, "abc");
        assert_eq!(outdent("    abc\n", 7, &style).0, "abc\n");
    }

    #[test]
    fn outdent_caret_saturates_at_zero() {
        let (value, report) = outdent("    abc", 2, &IndentStyle::default());
        assert_eq!(value, "abc\n");
        assert_eq!(report.caret, 0);
    }

    #[test]
    fn cumulative_lookup_can_pick_a_later_line() {
        // caret at the end of line 1 ("b", byte 3); the running total without
        // separators first reaches 3 on line 2
        let (value, report) = outdent("a\nb\n    c", 3, &IndentStyle::default());
        assert_eq!(report.line, Some(2));
        assert_eq!(value, "a\nb\nc\n");
        assert_eq!(report.caret, 0);

        // at the start of an indented line the caret's own line matches
        let (value, report) = outdent("abc\n    def", 4, &IndentStyle::default());
        assert_eq!(report.line, Some(1));
        assert_eq!(value, "abc\ndef\n");
        assert_eq!(report.caret, 0);
    }

    #[test]
    fn caret_beyond_the_cumulative_count_matches_no_line() {
        let (value, report) = outdent("ab\ncd", 5, &IndentStyle::default());
        assert_eq!(report.line, None);
        assert_eq!(value, "ab\ncd\n");
        assert_eq!(report.caret, 5);
    }

    #[test]
    fn caret_line_lookup_outdents_the_caret_line() {
        let style = IndentStyle::default().with_line_lookup(LineLookup::CaretLine);
        let (value, report) = outdent("a\n    b\n    c", 13, &style);
        assert_eq!(report.line, Some(2));
        assert_eq!(value, "a\n    b\nc\n");
        assert_eq!(report.caret, 9);

        // caret inside the stripped prefix lands on the line start
        let (value, report) = outdent("a\n    b", 4, &style);
        assert_eq!(value, "a\nb\n");
        assert_eq!(report.caret, 2);
    }

    #[test]
    fn tab_unit_outdents_tabs_only() {
        let style = IndentStyle::tabs();
        let (value, report) = outdent("\tx", 2, &style);
        assert_eq!(value, "x\n");
        assert_eq!(report.caret, 1);

        let (value, report) = outdent("    x", 5, &style);
        assert_eq!(value, "    x\n");
        assert!(!report.removed);
    }

    #[test]
    fn outdent_keeps_the_caret_on_a_char_boundary() {
        let style = IndentStyle {
            unit: IndentUnit::Spaces(1),
            ..IndentStyle::default()
        };
        // caret after 'é' on line 1 (byte 5); line 2 is stripped and the
        // caret moves back one byte into 'é', then snaps to its start
        let (value, report) = outdent("ab\né\n x", 5, &style);
        assert_eq!(report.line, Some(2));
        assert_eq!(value, "ab\né\nx\n");
        assert_eq!(report.caret, 3);
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut s = TextSurface::with_caret("", 0);
        let surface: &mut dyn EditableSurface = &mut s;
        insert_indent(&mut *surface, &IndentStyle::default());
        remove_indent(&mut *surface, &IndentStyle::default());
        assert_eq!(s.value(), "\n");
        assert_eq!(s.caret(), 0);
    }
}
