//! # saRNA Target Selection Core Library
//!
//! Selects candidate short-activating RNA (saRNA) target sites from a nucleotide sequence by
//! sliding a fixed-width window across it, rejecting windows that violate composition and
//! stability constraints, and ranking the survivors against a weighted rule set.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Sequence`, `Candidate`), the
//!   nearest-neighbor thermodynamic table, and pure sequence predicates.
//!
//! - **[`engine`]: The Logic Core.** Configuration, the filter pipeline, the scoring engine and
//!   the window scan and ranking tasks that drive them.
//!
//! - **[`workflows`]: The Public API.** Ties the `engine` and `core` together into a single
//!   call that validates a sequence and returns its ranked candidates.

pub mod core;
pub mod engine;
pub mod workflows;
