//! Image loading and encoding helpers

use crate::error::{CropError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, ImageFormat};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Image utility functions
pub struct ImageUtils;

impl ImageUtils {
    /// Open and decode an image, format guessed from the contents.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
        let path = path.as_ref();
        image::ImageReader::open(path)
            .map_err(|e| CropError::ImageLoad {
                path: path.to_path_buf(),
                source: ImageError::IoError(e),
            })?
            .with_guessed_format()
            .map_err(|e| CropError::ImageLoad {
                path: path.to_path_buf(),
                source: ImageError::IoError(e),
            })?
            .decode()
            .map_err(|source| CropError::ImageLoad {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Save an image, picking the encoder from the file extension.
    ///
    /// JPEG output uses `jpeg_quality`; other formats use the encoder defaults.
    pub fn save<P: AsRef<Path>>(image: &DynamicImage, path: P, jpeg_quality: u8) -> Result<()> {
        let path = path.as_ref();
        let write_error = |source| CropError::CropWrite {
            path: path.to_path_buf(),
            source,
        };

        match ImageFormat::from_path(path) {
            Ok(ImageFormat::Jpeg) => {
                let file = File::create(path).map_err(|e| write_error(ImageError::IoError(e)))?;
                let mut writer = BufWriter::new(file);
                let encoder = JpegEncoder::new_with_quality(&mut writer, jpeg_quality.clamp(1, 100));

                Self::jpeg_compatible(image)
                    .write_with_encoder(encoder)
                    .map_err(write_error)?;

                writer
                    .flush()
                    .map_err(|e| write_error(ImageError::IoError(e)))
            }
            _ => image.save(path).map_err(write_error),
        }
    }

    /// JPEG has no alpha and no 16-bit samples.
    fn jpeg_compatible(image: &DynamicImage) -> DynamicImage {
        match image {
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => image.clone(),
            DynamicImage::ImageLuma16(_) | DynamicImage::ImageLumaA8(_) | DynamicImage::ImageLumaA16(_) => {
                DynamicImage::ImageLuma8(image.to_luma8())
            }
            _ => DynamicImage::ImageRgb8(image.to_rgb8()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_jpeg_round_trip_dimensions() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.jpg");
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 16, Rgb([10, 20, 30])));

        ImageUtils::save(&image, &path, 95)?;
        let loaded = ImageUtils::load(&path)?;

        assert_eq!((loaded.width(), loaded.height()), (32, 16));
        Ok(())
    }

    #[test]
    fn test_rgba_saved_as_jpeg() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.jpeg");
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 128])));

        ImageUtils::save(&image, &path, 90)?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let err = ImageUtils::load("does/not/exist.jpg").unwrap_err();
        assert!(matches!(err, CropError::ImageLoad { .. }));
    }

    #[test]
    fn test_load_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(matches!(ImageUtils::load(&path), Err(CropError::ImageLoad { .. })));
    }

    #[test]
    fn test_save_into_missing_directory() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        let err = ImageUtils::save(&image, "no/such/dir/out.jpg", 95).unwrap_err();
        assert!(matches!(err, CropError::CropWrite { .. }));
    }
}
