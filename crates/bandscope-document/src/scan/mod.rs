// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanning pipeline — frequency-domain enhancement of handwriting photos
// ahead of optical character recognition.

pub mod enhance;
pub mod spectrum;

pub use enhance::{ImageEnhancer, enhance};
pub use spectrum::{FrequencyMask, Spectrum};
