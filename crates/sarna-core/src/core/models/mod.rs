pub mod candidate;
pub mod sequence;
