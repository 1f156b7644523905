// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Point-total buckets and the band score derived from them.

use std::fmt;

use bandscope_core::error::{BandscopeError, Result};
use serde::Serialize;

/// One row of the bucket table: a point range and the band range it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandBucket {
    pub min_points: u8,
    pub max_points: u8,
    pub low: f32,
    pub high: f32,
}

/// The bucket table. Point ranges are contiguous over 6..=30 and band
/// ranges rise with them; widths are deliberately uneven.
pub const BUCKETS: [BandBucket; 7] = [
    BandBucket { min_points: 6, max_points: 15, low: 3.0, high: 4.5 },
    BandBucket { min_points: 16, max_points: 19, low: 4.0, high: 5.0 },
    BandBucket { min_points: 20, max_points: 22, low: 5.0, high: 6.0 },
    BandBucket { min_points: 23, max_points: 24, low: 6.0, high: 6.5 },
    BandBucket { min_points: 25, max_points: 27, low: 7.0, high: 8.0 },
    BandBucket { min_points: 28, max_points: 29, low: 8.0, high: 9.0 },
    BandBucket { min_points: 30, max_points: 30, low: 9.0, high: 9.0 },
];

impl BandBucket {
    /// Look up the bucket for a point total.
    pub fn for_total(total: u8) -> Result<&'static BandBucket> {
        if !(MIN_POINTS..=MAX_POINTS).contains(&total) {
            return Err(BandscopeError::PointTotalOutOfRange(total));
        }
        Ok(Self::containing(total))
    }

    /// Bucket lookup for totals already known to be in range.
    pub(crate) fn containing(total: u8) -> &'static BandBucket {
        let index = BUCKETS
            .iter()
            .position(|bucket| total <= bucket.max_points)
            .unwrap_or(BUCKETS.len() - 1);
        &BUCKETS[index]
    }

    /// The single value reported for every total in this bucket: the lower
    /// band bound.
    pub fn band(&self) -> f32 {
        self.low
    }

    pub fn contains_band(&self, band: f32) -> bool {
        band >= self.low && band <= self.high
    }
}

impl fmt::Display for BandBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{:.1}", self.low)
        } else {
            write!(f, "{:.1}-{:.1}", self.low, self.high)
        }
    }
}

pub const MIN_POINTS: u8 = 6;
pub const MAX_POINTS: u8 = 30;

/// The band key printed next to the radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UserLevel {
    /// Band 9.
    Expert,
    /// Bands 7-8.
    GoodCommand,
    /// Bands 5-6.
    Competent,
    /// Bands 3-4.
    Limited,
}

impl UserLevel {
    pub fn from_band(band: f32) -> Self {
        if band >= 9.0 {
            Self::Expert
        } else if band >= 7.0 {
            Self::GoodCommand
        } else if band >= 5.0 {
            Self::Competent
        } else {
            Self::Limited
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Expert => "Expert Level",
            Self::GoodCommand => "Good Command",
            Self::Competent => "Competent User",
            Self::Limited => "Limited User",
        }
    }
}

/// A scored essay: the reported band, the point total behind it, and the
/// bucket that total fell into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandScore {
    band: f32,
    points: u8,
    bucket: BandBucket,
}

impl BandScore {
    pub(crate) fn from_total(points: u8) -> Self {
        let bucket = *BandBucket::containing(points);
        Self {
            band: bucket.band(),
            points,
            bucket,
        }
    }

    pub fn band(&self) -> f32 {
        self.band
    }

    pub fn points(&self) -> u8 {
        self.points
    }

    pub fn bucket(&self) -> &BandBucket {
        &self.bucket
    }

    /// Whether an externally predicted band falls inside this score's bucket.
    pub fn agrees_with(&self, predicted: f32) -> bool {
        self.bucket.contains_band(predicted)
    }

    pub fn user_level(&self) -> UserLevel {
        UserLevel::from_band(self.band)
    }
}

impl fmt::Display for BandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "band {:.1} ({} points, bucket {})",
            self.band, self.points, self.bucket
        )
    }
}
