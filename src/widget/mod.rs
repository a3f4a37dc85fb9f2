//! Built widgets: the arena tree and per-kind payloads.

pub(crate) mod content;
pub(crate) mod tree;
