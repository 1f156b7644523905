// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Bandscope.

use thiserror::Error;

use crate::types::Feature;

/// Top-level error type for all Bandscope operations.
#[derive(Debug, Error)]
pub enum BandscopeError {
    // -- Rubric errors --
    #[error("invalid value {value:?} for {feature}")]
    InvalidFeatureValue { feature: Feature, value: String },

    #[error("analysis text has no {0} line")]
    MissingFeature(Feature),

    #[error("point total {0} is outside the rubric range 6..=30")]
    PointTotalOutOfRange(u8),

    // -- Image errors --
    #[error(
        "radius {radius} must be positive and smaller than half the shorter side of a {width}x{height} image"
    )]
    InvalidRadius { radius: u32, width: u32, height: u32 },

    #[error("image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("degenerate transform result: {0}")]
    DegenerateImage(String),

    #[error("upload of {size} bytes exceeds the {limit} byte limit")]
    UploadTooLarge { size: u64, limit: u64 },

    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Configuration / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BandscopeError {
    /// Whether the enhancer recovers from this error by handing back the
    /// original image instead of failing.
    pub fn falls_back_to_original(&self) -> bool {
        matches!(self, Self::DegenerateImage(_))
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BandscopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_feature_value_names_the_feature() {
        let err = BandscopeError::InvalidFeatureValue {
            feature: Feature::GrammarQuality,
            value: "Superb".into(),
        };
        assert_eq!(err.to_string(), "invalid value \"Superb\" for grammar quality");
    }

    #[test]
    fn only_degenerate_images_fall_back() {
        assert!(BandscopeError::DegenerateImage("nan".into()).falls_back_to_original());
        assert!(
            !BandscopeError::InvalidRadius {
                radius: 10,
                width: 8,
                height: 8
            }
            .falls_back_to_original()
        );
        assert!(!BandscopeError::MissingFeature(Feature::SentenceLength).falls_back_to_original());
    }
}
