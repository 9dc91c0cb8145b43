//! Crop metadata module

pub mod jpeg;
pub mod stamper;

pub use stamper::DateStamper;
