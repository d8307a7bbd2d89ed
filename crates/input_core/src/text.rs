//! Offsets in this crate are UTF-8 byte indices. These helpers keep them on
//! character boundaries and convert to and from the character indices UI
//! toolkits count in.

use std::borrow::Cow;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 0), 0); // 'a'
/// assert_eq!(clamp_to_char_boundary(s, 1), 1); // start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '€' -> start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 4), 4); // 'b'
/// assert_eq!(clamp_to_char_boundary(s, 100), 5); // beyond end -> len
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Normalize newlines in a string (CRLF/CR → LF).
///
/// ```
/// use input_core::normalize_newlines;
///
/// assert_eq!(normalize_newlines("hello\r\nworld"), "hello\nworld");
/// assert_eq!(normalize_newlines("hello\rworld"), "hello\nworld");
/// ```
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut it = s.chars().peekable();
    while let Some(ch) = it.next() {
        match ch {
            '\r' => {
                if it.peek() == Some(&'\n') {
                    let _ = it.next();
                }
                out.push('\n');
            }
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Convert a character index into a byte index, clamping to `s.len()`.
///
/// ```
/// use input_core::char_to_byte_index;
///
/// assert_eq!(char_to_byte_index("a€b", 2), 4);
/// assert_eq!(char_to_byte_index("a€b", 10), 5);
/// ```
pub fn char_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Convert a byte index into a character index. Mid-character indices count
/// the character they fall into as not yet reached.
///
/// ```
/// use input_core::byte_to_char_index;
///
/// assert_eq!(byte_to_char_index("a€b", 4), 2);
/// assert_eq!(byte_to_char_index("a€b", 2), 1);
/// ```
pub fn byte_to_char_index(s: &str, byte_index: usize) -> usize {
    let byte_index = clamp_to_char_boundary(s, byte_index);
    s[..byte_index].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_boundary_basic() {
        let s = "a€b";
        assert_eq!(clamp_to_char_boundary(s, 3), 1);
        assert_eq!(clamp_to_char_boundary("", 3), 0);
    }

    #[test]
    fn normalize_newlines_borrows_when_clean() {
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
        assert_eq!(normalize_newlines("a\r\n\rb"), "a\n\nb");
    }

    #[test]
    fn char_byte_conversions_agree() {
        let s = "x€y€z";
        for ci in 0..=s.chars().count() {
            let bi = char_to_byte_index(s, ci);
            assert!(s.is_char_boundary(bi));
            assert_eq!(byte_to_char_index(s, bi), ci);
        }
    }
}
