mod dom;
mod index;
mod seed;

pub use dom::{TextControlKind, text_control_kind};
pub use index::TextControlIndex;
pub use seed::seed_input_state_from_dom;
