//! # input_core
//!
//! UI-agnostic text control state for the host page.
//!
//! - [`InputId`]: opaque identifier for a text control
//! - [`InputValueStore`]: values and selections of all controls
//! - [`SelectionRange`]: a normalized byte range
//! - [`EditableSurface`]: the value + selection view editing features work on
//!
//! Offsets are UTF-8 byte indices kept on character boundaries. The crate
//! depends only on `std`.

mod id;
mod selection;
mod state;
mod store;
mod surface;
mod text;

pub use id::InputId;
pub use selection::SelectionRange;
pub use store::InputValueStore;
pub use surface::{EditableSurface, StoreSurface, TextSurface};

pub use text::{
    byte_to_char_index, char_to_byte_index, clamp_to_char_boundary, normalize_newlines,
};
