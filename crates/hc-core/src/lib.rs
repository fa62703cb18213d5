//! # hc-core
//!
//! Core types and error definitions for holiday-calendar-rs.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the error taxonomy, the `ensure!` macro and a couple of
//! primitive type aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A Gregorian calendar year.
pub type Year = i32;

/// A count of working minutes.
pub type Minutes = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
