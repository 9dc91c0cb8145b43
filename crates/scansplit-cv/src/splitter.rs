//! Per-sheet pipeline: detect, filter, crop, stamp

use crate::crop::Cropper;
use crate::detection::{ContourDetector, SplitConfig};
use crate::error::{CropError, Result};
use crate::metadata::DateStamper;
use crate::traits::RegionExtractor;
use crate::utils::ImageUtils;
use image::DynamicImage;
use log::{debug, warn};
use scansplit_core::{CropName, DateTag, RegionSet};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of splitting one sheet
#[derive(Debug, Clone, Default, Serialize)]
pub struct SplitReport {
    pub source: PathBuf,
    /// Crop files in index order
    pub crops: Vec<PathBuf>,
    /// Crops that received an EXIF date
    pub stamped: usize,
    /// Stamp errors, one message per affected crop
    pub stamp_failures: Vec<String>,
}

impl SplitReport {
    /// Number of accepted regions, which is also the number of crops written.
    pub fn detected(&self) -> usize {
        self.crops.len()
    }
}

/// Splits scanned sheets into one file per photo.
pub struct SheetSplitter<E = ContourDetector> {
    config: SplitConfig,
    extractor: E,
    cropper: Cropper,
}

impl SheetSplitter<ContourDetector> {
    pub fn new(config: SplitConfig) -> Self {
        let extractor = ContourDetector::new(config.detection.threshold);
        Self::with_extractor(config, extractor)
    }
}

impl<E: RegionExtractor> SheetSplitter<E> {
    pub fn with_extractor(config: SplitConfig, extractor: E) -> Self {
        let cropper = Cropper::new(config.jpeg_quality);
        Self {
            config,
            extractor,
            cropper,
        }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Candidate regions that pass the size filter, in index order.
    pub fn accepted_regions(&self, image: &DynamicImage) -> RegionSet {
        let detection = &self.config.detection;
        self.extractor
            .candidate_regions(image)
            .filter_by_size(detection.min_width, detection.min_height)
            .ordered(detection.order)
    }

    /// Split the sheet at `path`, writing crops beside it.
    pub fn split_file(&self, path: &Path) -> Result<SplitReport> {
        let name = CropName::from_path(path).map_err(|e| CropError::InvalidPath {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let image = ImageUtils::load(path)?;

        let mut report = self.split_image(&image, &name, dir)?;
        report.source = path.to_path_buf();
        Ok(report)
    }

    /// Split an already decoded sheet. Crops go to `dir`, the date comes from its name.
    pub fn split_image(&self, image: &DynamicImage, name: &CropName, dir: &Path) -> Result<SplitReport> {
        let regions = self.accepted_regions(image);
        let date_tag = if self.config.stamp_dates {
            DateTag::from_directory(dir)
        } else {
            None
        };

        debug!(
            "{}{}: {} accepted regions, date tag {:?}",
            name.base,
            name.extension,
            regions.len(),
            date_tag.map(|tag| tag.to_string())
        );

        let mut report = SplitReport {
            source: name_path(dir, name),
            ..Default::default()
        };

        for (index, region) in regions.indexed() {
            let crop_path = self.cropper.write_crop(image, region, name, dir, index)?;

            if let Some(tag) = &date_tag {
                match DateStamper::stamp(&crop_path, tag) {
                    Ok(()) => report.stamped += 1,
                    Err(e) => {
                        warn!("{}", e);
                        report.stamp_failures.push(e.to_string());
                    }
                }
            }

            report.crops.push(crop_path);
        }

        Ok(report)
    }
}

fn name_path(dir: &Path, name: &CropName) -> PathBuf {
    dir.join(format!("{}{}", name.base, name.extension))
}
