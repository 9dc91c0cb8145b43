//! Contour based region detector

use super::config::DEFAULT_THRESHOLD;
use crate::traits::RegionExtractor;
use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use imageproc::contours::{BorderType, Contour, find_contours};
use imageproc::filter::filter3x3;
use imageproc::map::map_colors;
use log::debug;
use scansplit_core::{Region, RegionSet};

const FOREGROUND: u8 = 255;
const BACKGROUND: u8 = 0;

/// 3x3 Gaussian weights, normalised by `GAUSSIAN_SHIFT`.
const GAUSSIAN_3X3: [i32; 9] = [
    1, 2, 1,
    2, 4, 2,
    1, 2, 1,
];

/// The weights sum to `1 << GAUSSIAN_SHIFT`.
const GAUSSIAN_SHIFT: i32 = 4;

/// Weighted sum to nearest 8 bit value, halves round up.
fn round_blurred(weighted: i32) -> i32 {
    (weighted + (1 << (GAUSSIAN_SHIFT - 1))) >> GAUSSIAN_SHIFT
}

/// Finds photos as dark blobs on a light scanner bed.
#[derive(Debug, Clone)]
pub struct ContourDetector {
    threshold: u8,
}

impl ContourDetector {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Grayscale, blur, then inverse threshold: darker than the threshold becomes foreground.
    ///
    /// The blur is rounded to the nearest intensity before the comparison, so a
    /// blurred value of 229.5 counts as 230.
    pub fn binary_mask(&self, image: &DynamicImage) -> GrayImage {
        let gray = image.to_luma8();
        let weighted: ImageBuffer<Luma<i32>, Vec<i32>> =
            filter3x3::<Luma<u8>, i32, i32>(&gray, &GAUSSIAN_3X3);

        let threshold = i32::from(self.threshold);
        map_colors(&weighted, |pixel: Luma<i32>| {
            if round_blurred(pixel[0]) < threshold {
                Luma([FOREGROUND])
            } else {
                Luma([BACKGROUND])
            }
        })
    }

    /// Bounding boxes of the outermost contours of a binary mask.
    ///
    /// Blobs touching the image border are found too: the mask is traced inside a
    /// one pixel background frame and the points are shifted back afterwards.
    pub fn external_regions(mask: &GrayImage) -> RegionSet {
        let (width, height) = mask.dimensions();
        if width == 0 || height == 0 {
            return RegionSet::new();
        }

        let mut framed = GrayImage::from_pixel(width + 2, height + 2, Luma([BACKGROUND]));
        image::imageops::replace(&mut framed, mask, 1, 1);

        let contours: Vec<Contour<u32>> = find_contours(&framed);

        contours
            .iter()
            .filter(|contour| contour.border_type == BorderType::Outer && contour.parent.is_none())
            .filter_map(|contour| {
                Region::bounding(contour.points.iter().map(|p| {
                    (
                        p.x.saturating_sub(1).min(width - 1),
                        p.y.saturating_sub(1).min(height - 1),
                    )
                }))
            })
            .collect()
    }
}

impl Default for ContourDetector {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RegionExtractor for ContourDetector {
    fn candidate_regions(&self, image: &DynamicImage) -> RegionSet {
        let mask = self.binary_mask(image);
        let regions = Self::external_regions(&mask);

        debug!(
            "{}x{} image: {} candidate regions at threshold {}",
            image.width(),
            image.height(),
            regions.len(),
            self.threshold
        );

        regions
    }
}
