//! Shared primitives: error taxonomy and scaled-cell arithmetic.

pub(crate) mod core;
pub(crate) mod error;
