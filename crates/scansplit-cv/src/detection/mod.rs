//! Region detection module

pub mod config;
pub mod detector;

pub use config::{DetectionConfig, SplitConfig};
pub use detector::ContourDetector;
