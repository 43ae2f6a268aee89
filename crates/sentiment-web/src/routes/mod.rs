//! Route handlers.

pub mod analyzer;
pub mod index;
