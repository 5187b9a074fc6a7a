//! Prelude module for jewish_date crate.
//!
//! Re-exports the derive_more macros the date and token types derive.

pub use derive_more::Display;
