//! Scansplit computer vision library
//!
//! Finds individual photographs on a scanned sheet, writes each one to its
//! own file and stamps a creation date taken from the enclosing year folder.

pub mod crop;
pub mod detection;
pub mod error;
pub mod metadata;
pub mod splitter;
pub mod utils;

// Re-export commonly used types
pub use crop::Cropper;
pub use detection::{ContourDetector, DetectionConfig, SplitConfig};
pub use error::{CropError, Result};
pub use metadata::DateStamper;
pub use splitter::{SheetSplitter, SplitReport};

/// Core traits for the CV system
pub mod traits {
    use image::DynamicImage;
    use scansplit_core::RegionSet;

    /// Anything that can propose photo regions on a sheet
    pub trait RegionExtractor {
        /// Candidate regions in extraction order, unfiltered.
        fn candidate_regions(&self, image: &DynamicImage) -> RegionSet;
    }
}
