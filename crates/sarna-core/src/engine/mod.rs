//! # Engine Module
//!
//! The stateful logic that turns a validated sequence into ranked candidates.
//!
//! - **Configuration** ([`config`]) - Window length and homopolymer threshold, with validation
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping lower-layer failures
//! - **Progress Monitoring** ([`progress`]) - Phase and scan events for front-ends
//! - **Filter Pipeline** ([`filter`]) - Ordered viability checks with early termination
//! - **Scoring** ([`scoring`]) - Positional, repeat and flanking contributions to a rank
//! - **Tasks** ([`tasks`]) - The window scan and the ranking step driven by the workflow

pub mod config;
pub mod error;
pub mod filter;
pub mod progress;
pub mod scoring;
pub mod tasks;
