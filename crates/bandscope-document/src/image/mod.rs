// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — the grayscale raster handed between transport, enhancer and OCR.

pub mod raster;

pub use raster::RasterImage;
