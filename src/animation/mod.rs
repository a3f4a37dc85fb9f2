//! Position timelines compiled into move-to action sequences.

pub(crate) mod action;
pub(crate) mod interp;
pub(crate) mod timeline;
