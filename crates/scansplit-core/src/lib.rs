//! Scansplit core types
//!
//! Imaging-free building blocks shared by the detector and the CLI:
//! regions and their size filter, crop file naming, and year tags.

pub mod date_tag;
pub mod naming;
pub mod region;

pub use date_tag::DateTag;
pub use naming::{CropName, CROP_MARKER, is_generated_crop};
pub use region::{Region, RegionOrder, RegionSet};
