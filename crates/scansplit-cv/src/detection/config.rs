//! Detection and splitting configuration

use scansplit_core::RegionOrder;
use serde::{Deserialize, Serialize};

/// Grey level below which a pixel counts as photo content.
pub const DEFAULT_THRESHOLD: u8 = 230;
pub const DEFAULT_MIN_WIDTH: u32 = 500;
pub const DEFAULT_MIN_HEIGHT: u32 = 500;
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Region detection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub threshold: u8,
    pub min_width: u32,
    pub min_height: u32,
    pub order: RegionOrder,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            order: RegionOrder::Extraction,
        }
    }
}

impl DetectionConfig {
    /// Same detection, crops indexed top-to-bottom then left-to-right.
    pub fn reading_order() -> Self {
        Self {
            order: RegionOrder::ReadingOrder,
            ..Default::default()
        }
    }

    pub fn with_minimum(mut self, min_width: u32, min_height: u32) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }
}

/// Everything needed to split one sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub detection: DetectionConfig,
    /// Encoder quality for JPEG crops (1-100)
    pub jpeg_quality: u8,
    /// Write EXIF dates when the sheet sits in a year folder
    pub stamp_dates: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            detection: DetectionConfig::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            stamp_dates: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SplitConfig =
            serde_json::from_str(r#"{"detection": {"min_width": 300}, "stamp_dates": false}"#)
                .unwrap();

        assert_eq!(config.detection.min_width, 300);
        assert_eq!(config.detection.min_height, DEFAULT_MIN_HEIGHT);
        assert_eq!(config.detection.threshold, 230);
        assert_eq!(config.jpeg_quality, 95);
        assert!(!config.stamp_dates);
    }

    #[test]
    fn test_order_serialization() {
        let json = serde_json::to_string(&DetectionConfig::reading_order()).unwrap();
        assert!(json.contains(r#""order":"reading_order""#));
    }
}
