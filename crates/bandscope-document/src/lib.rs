// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bandscope-document — Image handling for handwriting recognition.
//
// Provides the grayscale raster type (decode, luminance reduction, width
// capping, PNG/JPEG encoding) and the frequency-domain enhancement pipeline
// (2-D FFT, spectrum shift, centred high-pass/low-pass mask, normalisation)
// that runs before the external OCR step.

pub mod image;
pub mod scan;

// Re-export the primary structs so callers can use `bandscope_document::RasterImage` etc.
pub use crate::image::raster::RasterImage;
pub use scan::enhance::{ImageEnhancer, enhance};
pub use scan::spectrum::{FrequencyMask, Spectrum};
