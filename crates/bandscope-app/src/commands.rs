// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Subcommand implementations and the score report they print.

use std::fmt;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use bandscope_core::config::EnhanceConfig;
use bandscope_core::types::{Feature, FeatureClassification};
use bandscope_document::{ImageEnhancer, RasterImage};
use bandscope_rubric::{
    BandGuideline, BandScore, ParsedAnalysis, PointBreakdown, RadarProfile, guideline,
    parse_analysis, refinement_target, score as score_classification,
};
use serde::Serialize;
use tracing::info;

/// Everything known about one scored essay.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub classification: FeatureClassification,
    pub breakdown: PointBreakdown,
    pub score: BandScore,
    pub user_level: &'static str,
    pub radar: RadarProfile,
    pub next_target: f32,
    pub next_guideline: Option<&'static BandGuideline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_band: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agrees: Option<bool>,
}

impl ScoreReport {
    pub fn new(classification: &FeatureClassification) -> Self {
        let score = score_classification(classification);
        let next_target = refinement_target(score.band());
        Self {
            classification: *classification,
            breakdown: PointBreakdown::of(classification),
            score,
            user_level: score.user_level().description(),
            radar: RadarProfile::new(classification, &score),
            next_target,
            next_guideline: guideline(next_target.floor() as u8),
            predicted_band: None,
            agrees: None,
        }
    }

    pub fn from_analysis(parsed: &ParsedAnalysis) -> Self {
        let verdict = parsed.verdict();
        Self {
            predicted_band: verdict.predicted_band,
            agrees: verdict.agrees,
            radar: RadarProfile::for_verdict(&parsed.classification, &verdict),
            ..Self::new(&parsed.classification)
        }
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Band {:.1}  {}", self.score.band(), self.user_level)?;
        writeln!(
            f,
            "{} points, bucket {}",
            self.score.points(),
            self.score.bucket()
        )?;
        if let Some(predicted) = self.predicted_band {
            let verdict = match self.agrees {
                Some(true) => "agrees",
                _ => "disagrees",
            };
            writeln!(f, "Predicted band {predicted:.1} ({verdict})")?;
        }

        writeln!(f, "\nFeatures")?;
        for feature in Feature::ALL {
            writeln!(
                f,
                "  {:<18} {:<9} {}",
                feature.to_string(),
                self.classification.label_of(feature),
                self.breakdown.get(feature)
            )?;
        }

        writeln!(f, "\nRadar")?;
        for (axis, value) in &self.radar.axes {
            writeln!(f, "  {:<20} {}", axis.label(), value)?;
        }

        if let Some(next) = self.next_guideline {
            writeln!(f, "\nTowards band {:.1}", self.next_target)?;
            writeln!(f, "  vocabulary: {}", next.vocabulary)?;
            writeln!(f, "  structure:  {}", next.structure)?;
            writeln!(f, "  cohesion:   {}", next.cohesion)?;
            writeln!(f, "  errors:     {}", next.errors)?;
            writeln!(f, "  length:     {}", next.length)?;
        }
        Ok(())
    }
}

fn print_report(report: &ScoreReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

pub fn score(classification: &FeatureClassification, json: bool) -> Result<()> {
    print_report(&ScoreReport::new(classification), json)
}

pub fn analyze(input: &Path, json: bool) -> Result<()> {
    let text = read_text(input)?;
    let parsed = parse_analysis(&text).context("parsing analysis response")?;
    print_report(&ScoreReport::from_analysis(&parsed), json)
}

pub fn enhance(
    input: &Path,
    output: &Path,
    config: &EnhanceConfig,
    max_upload_bytes: u64,
) -> Result<()> {
    let raster = load_raster(input, max_upload_bytes)?;
    let enhanced = ImageEnhancer::from_config(config).enhance(&raster)?;
    enhanced
        .save(output)
        .with_context(|| format!("writing {}", output.display()))?;
    info!(
        input = %input.display(),
        output = %output.display(),
        mode = %config.mode,
        radius = config.radius,
        "Enhanced image written"
    );
    Ok(())
}

fn load_raster(path: &Path, max_upload_bytes: u64) -> Result<RasterImage> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(RasterImage::decode_limited(&data, max_upload_bytes)?)
}

fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
