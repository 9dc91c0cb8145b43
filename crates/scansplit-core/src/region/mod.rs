//! Detected regions and the size filter applied to them

pub mod rect;
pub mod set;

pub use rect::Region;
pub use set::{RegionOrder, RegionSet};
