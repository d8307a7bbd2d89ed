//! Indentation style and controller configuration.
//!
//! The defaults reproduce the classic textarea Tab handler: four spaces, the
//! cumulative line lookup and an unconditional trailing newline on outdent.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

const SPACES: &str = "                ";

/// What one indent level inserts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndentUnit {
    /// `n` spaces. A width of 0 is treated as 1.
    Spaces(usize),
    /// A single `'\t'`.
    Tab,
}

impl Default for IndentUnit {
    fn default() -> Self {
        IndentUnit::Spaces(4)
    }
}

impl IndentUnit {
    pub fn text(self) -> Cow<'static, str> {
        match self {
            IndentUnit::Spaces(width) => {
                let width = width.max(1);
                match SPACES.get(..width) {
                    Some(s) => Cow::Borrowed(s),
                    None => Cow::Owned(" ".repeat(width)),
                }
            }
            IndentUnit::Tab => Cow::Borrowed("\t"),
        }
    }

    /// Length of [`text`](Self::text) in bytes.
    pub fn len(self) -> usize {
        match self {
            IndentUnit::Spaces(width) => width.max(1),
            IndentUnit::Tab => 1,
        }
    }
}

/// How Remove-Indent picks the line to outdent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineLookup {
    /// Sum line lengths without their newline separators and take the first
    /// line whose running total reaches the caret. On multi-line text this can
    /// pick a line below the caret's.
    #[default]
    CumulativeLength,
    /// The line that actually contains the caret.
    CaretLine,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndentStyle {
    pub unit: IndentUnit,
    /// Append a `'\n'` after the last line when Remove-Indent reassembles the
    /// text, whether or not the text ended with one.
    pub trailing_line_break: bool,
    pub line_lookup: LineLookup,
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self {
            unit: IndentUnit::default(),
            trailing_line_break: true,
            line_lookup: LineLookup::default(),
        }
    }
}

impl IndentStyle {
    pub fn spaces(width: usize) -> Self {
        Self {
            unit: IndentUnit::Spaces(width),
            ..Self::default()
        }
    }

    pub fn tabs() -> Self {
        Self {
            unit: IndentUnit::Tab,
            ..Self::default()
        }
    }

    pub fn with_trailing_line_break(mut self, on: bool) -> Self {
        self.trailing_line_break = on;
        self
    }

    pub fn with_line_lookup(mut self, lookup: LineLookup) -> Self {
        self.line_lookup = lookup;
        self
    }
}

/// Where the controller reads the shift/ctrl state from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierSource {
    /// The modifier flags carried by each key event.
    #[default]
    Event,
    /// Flags flipped by document-level key-down/key-up listeners on Shift and
    /// Control. Desyncs when an event is missed (e.g. focus lost while a key
    /// is held); only for hosts whose events carry no modifier flags.
    Toggled,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndentConfig {
    pub style: IndentStyle,
    pub modifiers: ModifierSource,
}

impl IndentConfig {
    pub fn new(style: IndentStyle) -> Self {
        Self {
            style,
            modifiers: ModifierSource::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: ModifierSource) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_unit_is_four_spaces() {
        let style = IndentStyle::default();
        assert_eq!(style.unit.text(), "    ");
        assert_eq!(style.unit.len(), 4);
        assert!(style.trailing_line_break);
        assert_eq!(style.line_lookup, LineLookup::CumulativeLength);
    }

    #[test]
    fn unit_text_matches_len() {
        for unit in [
            IndentUnit::Spaces(0),
            IndentUnit::Spaces(2),
            IndentUnit::Spaces(16),
            IndentUnit::Spaces(40),
            IndentUnit::Tab,
        ] {
            assert_eq!(unit.text().len(), unit.len(), "{unit:?}");
        }
        assert_eq!(IndentUnit::Spaces(0).text(), " ");
        assert_eq!(IndentUnit::Tab.text(), "\t");
    }

    #[test]
    fn config_reads_from_toml() {
        let cfg: IndentConfig = toml::from_str(
            r#"
            modifiers = "toggled"

            [style]
            unit = { spaces = 2 }
            trailing_line_break = false
            line_lookup = "caret_line"
            "#,
        )
        .expect("valid config");

        assert_eq!(
            cfg,
            IndentConfig::new(
                IndentStyle::spaces(2)
                    .with_trailing_line_break(false)
                    .with_line_lookup(LineLookup::CaretLine)
            )
            .with_modifiers(ModifierSource::Toggled)
        );
    }

    #[test]
    fn missing_config_keys_fall_back_to_defaults() {
        let cfg: IndentConfig = toml::from_str("[style]\nunit = \"tab\"\n").expect("valid config");
        assert_eq!(cfg.style, IndentStyle::tabs());
        assert_eq!(cfg.modifiers, ModifierSource::Event);
    }
}
