// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grayscale raster — the single-channel intensity grid that the enhancer
// consumes and produces. Wraps `image::GrayImage` and guarantees a non-empty
// grid.

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use bandscope_core::error::{BandscopeError, Result};
use tracing::{debug, info, instrument};

/// A non-empty grid of 8-bit intensity samples.
///
/// Every constructor rejects zero-width or zero-height input, so downstream
/// transforms never see an empty grid. Transformations return a new raster and
/// leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pixels: GrayImage,
}

impl RasterImage {
    // -- Construction ---------------------------------------------------------

    /// Build a raster from row-major samples.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let pixels = GrayImage::from_raw(width, height, samples).ok_or_else(|| {
            BandscopeError::ImageError(format!(
                "sample buffer does not match {width}x{height}"
            ))
        })?;
        Ok(Self { pixels })
    }

    /// A raster where every pixel has the same intensity.
    pub fn uniform(width: u32, height: u32, value: u8) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            pixels: GrayImage::from_pixel(width, height, Luma([value])),
        })
    }

    /// Wrap an existing grayscale buffer.
    pub fn from_gray(pixels: GrayImage) -> Result<Self> {
        check_dimensions(pixels.width(), pixels.height())?;
        Ok(Self { pixels })
    }

    /// Reduce any decoded image to its luminance channel.
    pub fn from_dynamic(image: &DynamicImage) -> Result<Self> {
        Self::from_gray(image.to_luma8())
    }

    /// Decode raw encoded bytes (JPEG, PNG, etc.) and reduce to luminance.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn decode(data: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(data).map_err(|err| {
            BandscopeError::ImageError(format!("failed to decode image: {}", err))
        })?;
        info!(
            width = decoded.width(),
            height = decoded.height(),
            "Image decoded"
        );
        Self::from_dynamic(&decoded)
    }

    /// Decode, refusing payloads larger than `max_bytes` before touching them.
    pub fn decode_limited(data: &[u8], max_bytes: u64) -> Result<Self> {
        let size = data.len() as u64;
        if size > max_bytes {
            return Err(BandscopeError::UploadTooLarge {
                size,
                limit: max_bytes,
            });
        }
        Self::decode(data)
    }

    /// Load and decode an image file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let decoded = image::open(path.as_ref()).map_err(|err| {
            BandscopeError::ImageError(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        Self::from_dynamic(&decoded)
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Intensity at `(x, y)`. Panics when out of bounds, like `GrayImage`.
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.pixels.get_pixel(x, y).0[0]
    }

    /// Row-major samples.
    pub fn samples(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn as_gray(&self) -> &GrayImage {
        &self.pixels
    }

    pub fn into_gray(self) -> GrayImage {
        self.pixels
    }

    // -- Transformations ------------------------------------------------------

    /// Downscale proportionally so the width does not exceed `max_width`.
    /// Narrower images are returned unchanged; nothing is upscaled.
    #[instrument(skip(self))]
    pub fn fit_width(&self, max_width: u32) -> Self {
        let (width, height) = (self.width(), self.height());
        if max_width == 0 || width <= max_width {
            return self.clone();
        }
        let new_height = ((height as u64 * max_width as u64) / width as u64).max(1) as u32;
        let resized = image::imageops::resize(
            &self.pixels,
            max_width,
            new_height,
            image::imageops::FilterType::Lanczos3,
        );
        debug!(
            from_w = width,
            from_h = height,
            to_w = max_width,
            to_h = new_height,
            "Width capped"
        );
        Self { pixels: resized }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        self.pixels
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|err| BandscopeError::ImageError(format!("PNG encoding failed: {}", err)))?;
        Ok(buffer)
    }

    /// Encode as JPEG bytes with the given quality (1-100).
    pub fn to_jpeg_bytes(&self, quality: u8) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
        self.pixels.write_with_encoder(encoder).map_err(|err| {
            BandscopeError::ImageError(format!("JPEG encoding failed: {}", err))
        })?;
        Ok(buffer)
    }

    /// Write to a file. The format is inferred from the file extension.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.pixels.save(path.as_ref()).map_err(|err| {
            BandscopeError::ImageError(format!(
                "failed to save image to {}: {}",
                path.as_ref().display(),
                err
            ))
        })
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(BandscopeError::EmptyImage { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn empty_grids_are_rejected() {
        assert!(matches!(
            RasterImage::uniform(0, 10, 0),
            Err(BandscopeError::EmptyImage { width: 0, height: 10 })
        ));
        assert!(matches!(
            RasterImage::new(4, 0, Vec::new()),
            Err(BandscopeError::EmptyImage { .. })
        ));
        assert!(RasterImage::from_gray(GrayImage::new(0, 0)).is_err());
    }

    #[test]
    fn sample_count_must_match() {
        let err = RasterImage::new(3, 3, vec![0; 8]).unwrap_err();
        assert!(matches!(err, BandscopeError::ImageError(_)));
        let ok = RasterImage::new(3, 3, (0..9).collect()).unwrap();
        assert_eq!(ok.pixel(2, 1), 5);
    }

    #[test]
    fn colour_input_is_reduced_to_luminance() {
        let rgb = RgbImage::from_pixel(6, 4, Rgb([255, 255, 255]));
        let raster = RasterImage::from_dynamic(&DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!((raster.width(), raster.height()), (6, 4));
        assert!(raster.samples().iter().all(|&v| v == 255));
    }

    #[test]
    fn png_bytes_decode_back_to_the_same_grid() {
        let raster = RasterImage::new(4, 2, vec![0, 50, 100, 150, 200, 250, 10, 20]).unwrap();
        let png = raster.to_png_bytes().unwrap();
        let decoded = RasterImage::decode(&png).unwrap();
        assert_eq!(decoded, raster);
    }

    #[test]
    fn jpeg_output_is_a_jpeg() {
        let raster = RasterImage::uniform(16, 16, 90).unwrap();
        let jpeg = raster.to_jpeg_bytes(85).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = RasterImage::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, BandscopeError::ImageError(_)));
    }

    #[test]
    fn oversize_upload_is_refused() {
        let raster = RasterImage::uniform(8, 8, 1).unwrap();
        let png = raster.to_png_bytes().unwrap();
        let limit = png.len() as u64 - 1;
        match RasterImage::decode_limited(&png, limit).unwrap_err() {
            BandscopeError::UploadTooLarge { size, limit: l } => {
                assert_eq!(size, png.len() as u64);
                assert_eq!(l, limit);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(RasterImage::decode_limited(&png, png.len() as u64).is_ok());
    }

    #[test]
    fn fit_width_downscales_proportionally() {
        let raster = RasterImage::uniform(1600, 900, 128).unwrap();
        let fitted = raster.fit_width(800);
        assert_eq!((fitted.width(), fitted.height()), (800, 450));
    }

    #[test]
    fn fit_width_never_upscales() {
        let raster = RasterImage::uniform(300, 200, 128).unwrap();
        let fitted = raster.fit_width(800);
        assert_eq!(fitted, raster);
    }
}
