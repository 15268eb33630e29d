//! # Workflows Module
//!
//! Top-level entry points for users of the library.
//!
//! - **Selection Workflow** ([`select`]) - Validates a sequence, scans every full-length window
//!   through the filter pipeline and scoring engine, and returns the survivors best-first.

pub mod select;
