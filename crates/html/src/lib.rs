//! Minimal DOM model: an owned node tree with numeric node ids, attribute
//! helpers and element lookup.

pub mod dom_utils;
pub mod traverse;

mod types;

pub use crate::traverse::{assign_node_ids, find_node_by_id, get_element_by_id};
pub use crate::types::{Id, Node, NodeId};
