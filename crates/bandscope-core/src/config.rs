// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::FilterMode;

/// Settings for the frequency-domain handwriting enhancer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    /// Which spectrum band survives the mask.
    pub mode: FilterMode,
    /// Half the side of the centred square mask, in frequency bins.
    pub radius: u32,
    /// Downscale wider photos to this width before filtering.
    pub max_width: Option<u32>,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            mode: FilterMode::HighPass,
            radius: 30,
            max_width: None,
        }
    }
}

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Enhancer defaults used when the caller does not override them.
    pub enhance: EnhanceConfig,
    /// Largest accepted image upload in bytes (default 5 MB).
    pub max_upload_bytes: u64,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enhance: EnhanceConfig::default(),
            max_upload_bytes: 5_000_000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load settings from a JSON file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&raw)?)
    }
}
