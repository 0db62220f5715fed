//! Prelude module for day_range crate.
//!
//! Re-exports the derive macros from derive_more used across the crate.

pub use derive_more::Display;
