//! Generic, UI-agnostic identifier for text controls.
//!
//! This type intentionally uses a plain `u64` to avoid coupling to any DOM
//! or framework-specific identifier type. Integration layers convert their
//! native ids at the call boundary.

/// Opaque identifier for a text control within an [`InputValueStore`](crate::InputValueStore).
///
/// ```ignore
/// impl From<html::Id> for InputId { ... }
/// let id = InputId::from_raw(node_id.0 as u64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u32> for InputId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}
