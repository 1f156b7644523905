// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bandscope-rubric — The essay band rubric.
//
// Turns six feature classifications into a band score through a fixed point
// table and a fixed bucket table, maps features onto radar-chart axes, and
// parses a text generator's analysis response into typed classifications.

pub mod bands;
pub mod guidelines;
pub mod parse;
pub mod points;
pub mod profile;
pub mod scorer;

pub use bands::{BandBucket, BandScore, UserLevel};
pub use guidelines::{BandGuideline, guideline, refinement_target};
pub use parse::{ParsedAnalysis, Verdict, parse_analysis};
pub use points::{PointBreakdown, Points};
pub use profile::{AxisValue, FeatureProfile, RadarAxis, RadarProfile};
pub use scorer::score;
