// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Handwriting enhancement pipeline — frequency-domain filtering of a
// grayscale photo before it is handed to OCR.
//
// Enhancement is best effort: a numerically degenerate result falls back to
// the unmodified input, while caller errors (bad radius, empty image) are
// rejected.

use bandscope_core::config::EnhanceConfig;
use bandscope_core::error::{BandscopeError, Result};
use bandscope_core::types::FilterMode;
use image::DynamicImage;
use tracing::{debug, info, instrument, warn};

use crate::image::raster::RasterImage;
use crate::scan::spectrum::{FrequencyMask, Spectrum};

/// Intensity used for every pixel when the filtered result is flat.
pub const FLAT_FILL: u8 = 128;

/// Reconstructions whose value range is below this are treated as flat.
const FLAT_EPSILON: f64 = 1e-6;

/// Enhances handwriting photos for recognition.
///
/// Runs a 2-D FFT over the luminance grid, centres the spectrum, masks a
/// centred square of side `2 * radius`, transforms back and rescales the
/// result to the full 0-255 range.
///
/// - [`FilterMode::HighPass`] stops the square and keeps the magnitude of the
///   reconstruction; strokes and edges stand out.
/// - [`FilterMode::LowPass`] keeps only the square and its real part; speckle
///   and paper texture are smoothed away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageEnhancer {
    mode: FilterMode,
    radius: u32,
    max_width: Option<u32>,
}

impl ImageEnhancer {
    // -- Construction ---------------------------------------------------------

    pub fn new(mode: FilterMode, radius: u32) -> Self {
        Self {
            mode,
            radius,
            max_width: None,
        }
    }

    pub fn from_config(config: &EnhanceConfig) -> Self {
        Self {
            mode: config.mode,
            radius: config.radius,
            max_width: config.max_width,
        }
    }

    /// Downscale wider images to `max_width` before filtering.
    pub fn with_max_width(self, max_width: Option<u32>) -> Self {
        Self { max_width, ..self }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    // -- Pipeline -------------------------------------------------------------

    /// Enhance a grayscale raster. The input is never modified.
    ///
    /// Fails with `InvalidRadius` unless `0 < 2 * radius < min(width, height)`
    /// (checked after any width capping).
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height(), mode = %self.mode, radius = self.radius))]
    pub fn enhance(&self, image: &RasterImage) -> Result<RasterImage> {
        self.run(image, filter)
    }

    /// Reduce a decoded colour or grayscale image to luminance and enhance it.
    pub fn enhance_dynamic(&self, image: &DynamicImage) -> Result<RasterImage> {
        let raster = RasterImage::from_dynamic(image)?;
        self.enhance(&raster)
    }

    /// Cap, validate, filter, then settle against the caller's image.
    fn run<F>(&self, image: &RasterImage, step: F) -> Result<RasterImage>
    where
        F: FnOnce(&RasterImage, FilterMode, u32) -> Result<RasterImage>,
    {
        let resized;
        let source = match self.max_width {
            Some(max_width) if image.width() > max_width => {
                resized = image.fit_width(max_width);
                &resized
            }
            _ => image,
        };

        validate_radius(self.radius, source.width(), source.height())?;

        let outcome = step(source, self.mode, self.radius);
        let enhanced = settle(image, outcome)?;
        info!(
            width = enhanced.width(),
            height = enhanced.height(),
            "Enhancement complete"
        );
        Ok(enhanced)
    }
}

/// Enhance `image` with an explicit radius and mode.
pub fn enhance(image: &RasterImage, radius: u32, mode: FilterMode) -> Result<RasterImage> {
    ImageEnhancer::new(mode, radius).enhance(image)
}

fn validate_radius(radius: u32, width: u32, height: u32) -> Result<()> {
    let shorter = width.min(height);
    if radius == 0 || radius.saturating_mul(2) >= shorter {
        return Err(BandscopeError::InvalidRadius {
            radius,
            width,
            height,
        });
    }
    Ok(())
}

fn filter(image: &RasterImage, mode: FilterMode, radius: u32) -> Result<RasterImage> {
    let (width, height) = (image.width() as usize, image.height() as usize);

    let mut spectrum = Spectrum::forward(image);
    spectrum.shift();

    let mask = FrequencyMask::centered(width, height, radius as usize, mode);
    spectrum.apply(&mask)?;
    debug!(passing = mask.passing_count(), "Frequency mask applied");

    let values: Vec<f64> = spectrum
        .inverse()
        .iter()
        .map(|bin| match mode {
            FilterMode::HighPass => bin.norm(),
            FilterMode::LowPass => bin.re,
        })
        .collect();

    let samples = normalise(&values)?;
    RasterImage::new(image.width(), image.height(), samples)
}

/// Min-max rescale to 0-255, truncating. A flat input becomes [`FLAT_FILL`].
fn normalise(values: &[f64]) -> Result<Vec<u8>> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(BandscopeError::DegenerateImage(
            "non-finite values in reconstruction".into(),
        ));
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;
    if range < FLAT_EPSILON {
        debug!(min, max, "Flat reconstruction; filling with mid-gray");
        return Ok(vec![FLAT_FILL; values.len()]);
    }

    Ok(values
        .iter()
        .map(|v| ((v - min) * 255.0 / range).clamp(0.0, 255.0) as u8)
        .collect())
}

/// Turn a recoverable failure into a copy of the caller's unscaled image.
fn settle(original: &RasterImage, outcome: Result<RasterImage>) -> Result<RasterImage> {
    match outcome {
        Err(err) if err.falls_back_to_original() => {
            warn!(%err, "Enhancement failed; returning the original image");
            Ok(original.clone())
        }
        other => other,
    }
}

// -- Tests --------------------------------------------------------------------
