//! Nearest-neighbor duplex stability.
//!
//! The parameter table is compile-time constant data; [`stability::delta_g`] sums it over a
//! short sub-window to estimate the free energy of that end of a candidate duplex.

pub mod stability;
pub mod table;
