//! # Core Module
//!
//! Stateless building blocks shared by the engine.
//!
//! - **Data Models** ([`models`]) - The validated nucleotide sequence and the candidate records
//!   produced by a scan.
//! - **Thermodynamics** ([`thermo`]) - Nearest-neighbor free-energy parameters and the
//!   delta-G evaluator built on them.
//! - **Utilities** ([`utils`]) - Pure composition predicates evaluated on a single window.

pub mod models;
pub mod thermo;
pub mod utils;
