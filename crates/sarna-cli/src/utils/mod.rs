pub mod loader;
pub mod progress;
