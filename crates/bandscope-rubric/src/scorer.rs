// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Feature scorer — classification in, band score out.

use bandscope_core::types::FeatureClassification;
use tracing::{debug, instrument};

use crate::bands::BandScore;
use crate::points::PointBreakdown;

/// Score one essay's feature classification.
///
/// Sums the six per-feature point values and reports the lower band bound of
/// the bucket the total falls into. The same classification always yields the
/// same score, so an essay can be re-checked any number of times.
#[instrument(level = "debug", skip_all)]
pub fn score(classification: &FeatureClassification) -> BandScore {
    let breakdown = PointBreakdown::of(classification);
    let total = breakdown.total();
    let score = BandScore::from_total(total);
    debug!(total, band = score.band(), "Essay scored");
    score
}
