use super::Region;
use serde::{Deserialize, Serialize};

/// Order in which accepted regions receive their crop index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionOrder {
    /// Keep contour extraction order.
    #[default]
    Extraction,
    /// Top to bottom, then left to right.
    ReadingOrder,
}

/// Ordered collection of regions found on one sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    pub fn push(&mut self, region: Region) {
        self.regions.push(region);
    }

    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Keep regions at least `min_width` x `min_height`, preserving order.
    pub fn filter_by_size(mut self, min_width: u32, min_height: u32) -> Self {
        self.regions
            .retain(|region| region.meets_minimum(min_width, min_height));
        self
    }

    /// Stable reorder; equal keys keep their extraction order.
    pub fn ordered(mut self, order: RegionOrder) -> Self {
        if order == RegionOrder::ReadingOrder {
            self.regions.sort_by_key(|region| (region.y, region.x));
        }
        self
    }

    /// Pairs each region with its crop index.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &Region)> {
        self.regions.iter().enumerate()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }
}

impl IntoIterator for RegionSet {
    type Item = Region;
    type IntoIter = std::vec::IntoIter<Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.into_iter()
    }
}

impl FromIterator<Region> for RegionSet {
    fn from_iter<T: IntoIterator<Item = Region>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
