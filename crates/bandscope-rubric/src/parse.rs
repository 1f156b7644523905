// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Analysis parser — reads a text generator's line-oriented analysis
// response into a typed `FeatureClassification`.
//
// Expected shape (one line per feature, any order, markdown tolerated):
//
//   Grammar Issues: Good
//   Advanced Vocabulary: Medium
//   Connector Count: High
//   Repeated Words: Low
//   Lexical Diversity: Medium
//   Avg Sentence Length: Long
//   Predicted IELTS Band: 7.5
//
// A missing or unrecognised feature is an error. Nothing is defaulted.

use std::str::FromStr;
use std::sync::LazyLock;

use bandscope_core::error::{BandscopeError, Result};
use bandscope_core::types::{Feature, FeatureClassification};
use regex::Regex;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::bands::BandScore;
use crate::scorer::score;

/// One pattern per feature, indexed by `Feature as usize`.
static FEATURE_LINES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    Feature::ALL
        .iter()
        .map(|feature| {
            let pattern = format!(
                r"(?im)^[^A-Za-z\n]*{}[ \t]*:[ \t]*\[?[ \t]*([^\s,;()\]]+)",
                regex::escape(feature.analysis_label())
            );
            Regex::new(&pattern).expect("feature line pattern is valid")
        })
        .collect()
});

static PREDICTED_BAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[^A-Za-z\n]*Predicted(?:[ \t]+IELTS)?[ \t]+Band[ \t]*:[ \t]*\[?[ \t]*(\d+(?:\.\d+)?)")
        .expect("predicted band pattern is valid")
});

/// A parsed analysis response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedAnalysis {
    pub classification: FeatureClassification,
    /// The generator's own band claim, if it made one.
    pub predicted_band: Option<f32>,
}

/// The deterministic score next to the generator's claim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    pub score: BandScore,
    pub predicted_band: Option<f32>,
    /// `None` when the generator made no claim.
    pub agrees: Option<bool>,
}

impl ParsedAnalysis {
    pub fn verdict(&self) -> Verdict {
        let score = score(&self.classification);
        Verdict {
            score,
            predicted_band: self.predicted_band,
            agrees: self.predicted_band.map(|band| score.agrees_with(band)),
        }
    }
}

/// Parse a generator's analysis response.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn parse_analysis(text: &str) -> Result<ParsedAnalysis> {
    let text = text.replace('*', "");

    let classification = FeatureClassification {
        grammar_quality: field(&text, Feature::GrammarQuality)?,
        vocabulary_level: field(&text, Feature::VocabularyLevel)?,
        connector_density: field(&text, Feature::ConnectorDensity)?,
        repetition_level: field(&text, Feature::RepetitionLevel)?,
        lexical_diversity: field(&text, Feature::LexicalDiversity)?,
        sentence_length: field(&text, Feature::SentenceLength)?,
    };

    let predicted_band = predicted_band(&text);
    debug!(?predicted_band, "Analysis parsed");

    Ok(ParsedAnalysis {
        classification,
        predicted_band,
    })
}

fn field<T>(text: &str, feature: Feature) -> Result<T>
where
    T: FromStr<Err = BandscopeError>,
{
    let captures = FEATURE_LINES[feature as usize]
        .captures(text)
        .ok_or(BandscopeError::MissingFeature(feature))?;
    captures
        .get(1)
        .map(|m| m.as_str())
        .ok_or(BandscopeError::MissingFeature(feature))?
        .parse()
}

fn predicted_band(text: &str) -> Option<f32> {
    let raw = PREDICTED_BAND.captures(text)?.get(1)?.as_str();
    match raw.parse::<f32>() {
        Ok(band) if (0.0..=9.0).contains(&band) => Some(band),
        Ok(band) => {
            warn!(band, "Ignoring predicted band outside the 0-9 scale");
            None
        }
        Err(_) => None,
    }
}
