//! Shared primitives: colors and geometry, the error taxonomy, and diagnostics.

pub(crate) mod core;
pub(crate) mod diag;
pub(crate) mod error;
