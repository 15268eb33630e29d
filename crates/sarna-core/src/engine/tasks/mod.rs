pub mod ranking;
pub mod window_scan;
