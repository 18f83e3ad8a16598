//! # Emitter Logo
//!
//! Loads the logo printed at the top of the receipt and converts it to a
//! 1-bit raster with ordered dithering. Loading is best-effort: callers are
//! expected to log a failure and render without a logo.

pub mod dither;

use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;
use serde::Serialize;

use crate::error::{DanfceError, Result};

/// A dithered monochrome logo.
///
/// `data` holds `height` rows of `width_bytes()` bytes each, MSB = leftmost
/// pixel, 1 = black.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Logo {
    pub width: u16,
    pub height: u16,
    #[serde(skip_serializing)]
    pub data: Vec<u8>,
}

impl Logo {
    /// Widest logo accepted by 58mm and 80mm printers alike.
    pub const MAX_WIDTH: u32 = 384;

    /// Decode an image file (PNG, JPEG, ...).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|e| DanfceError::Image(format!("cannot open {}: {}", path.display(), e)))?;
        Self::from_image(&image)
    }

    /// Decode an in-memory image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| DanfceError::Image(format!("cannot decode logo: {}", e)))?;
        Self::from_image(&image)
    }

    /// Scale down to [`Logo::MAX_WIDTH`] and dither.
    ///
    /// Transparent pixels count as white paper. Fails when the scaled image
    /// is taller than a raster transfer can describe.
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        let scaled = if image.width() > Self::MAX_WIDTH {
            image.resize(Self::MAX_WIDTH, u32::MAX, FilterType::Triangle)
        } else {
            image.clone()
        };

        let height = u16::try_from(scaled.height()).map_err(|_| {
            DanfceError::Image(format!(
                "logo is {} dots tall, at most {} supported",
                scaled.height(),
                u16::MAX
            ))
        })?;
        // MAX_WIDTH bounds the width.
        let width = scaled.width() as u16;

        let pixels = scaled.to_luma_alpha8();

        let data = dither::generate_raster(width.into(), height.into(), |x, y| {
            let [luma, alpha] = pixels.get_pixel(x as u32, y as u32).0;
            (1.0 - luma as f32 / 255.0) * (alpha as f32 / 255.0)
        });

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Bytes per raster row.
    pub fn width_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, RgbaImage, Rgba};

    #[test]
    fn test_black_square() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(16, 4, Luma([0])));
        let logo = Logo::from_image(&image).unwrap();
        assert_eq!((logo.width, logo.height), (16, 4));
        assert_eq!(logo.width_bytes(), 2);
        assert!(logo.data.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_transparent_is_white() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 2, Rgba([0, 0, 0, 0])));
        let logo = Logo::from_image(&image).unwrap();
        assert!(logo.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_wide_logo_is_scaled() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(768, 100, Luma([255])));
        let logo = Logo::from_image(&image).unwrap();
        assert_eq!(logo.width as u32, Logo::MAX_WIDTH);
        assert_eq!(logo.height, 50);
    }

    #[test]
    fn test_overly_tall_logo_is_rejected() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(1, 70_000, Luma([0])));
        assert!(matches!(Logo::from_image(&image), Err(DanfceError::Image(_))));
    }

    #[test]
    fn test_garbage_bytes_fail() {
        assert!(matches!(
            Logo::from_bytes(b"not an image"),
            Err(DanfceError::Image(_))
        ));
    }
}
