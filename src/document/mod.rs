//! The editor export: JSON model and the loaded [`Document`](document::Document).

#[allow(clippy::module_inception)]
pub(crate) mod document;
pub(crate) mod model;
