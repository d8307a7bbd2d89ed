//! Keyboard event value types shared by the host page, the indent controller
//! and the demo shell.
//!
//! Key codes follow the numeric `keyCode` values browsers report, so events
//! recorded from a web page and events synthesized from winit/egui line up.

pub type ListenerId = u64;

/// Numeric key code as reported by the host (`KeyboardEvent.keyCode`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const TAB: KeyCode = KeyCode(9);
    pub const ENTER: KeyCode = KeyCode(13);
    pub const SHIFT: KeyCode = KeyCode(16);
    pub const CONTROL: KeyCode = KeyCode(17);
    pub const ALT: KeyCode = KeyCode(18);

    #[inline]
    pub const fn as_raw(self) -> u32 {
        self.0
    }

    /// `true` for the two keys whose state the legacy modifier tracker follows.
    #[inline]
    pub fn is_tracked_modifier(self) -> bool {
        self == KeyCode::SHIFT || self == KeyCode::CONTROL
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// Modifier flags carried by a key event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };
}

/// A single keyboard state change delivered to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub kind: KeyEventKind,
    pub modifiers: Modifiers,
    /// `true` for auto-repeat key-downs while the key is held.
    pub repeat: bool,
}

impl KeyEvent {
    pub fn down(code: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            code,
            kind: KeyEventKind::Down,
            modifiers,
            repeat: false,
        }
    }

    pub fn up(code: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            code,
            kind: KeyEventKind::Up,
            modifiers,
            repeat: false,
        }
    }

    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    #[inline]
    pub fn is_down(&self) -> bool {
        self.kind == KeyEventKind::Down
    }
}
