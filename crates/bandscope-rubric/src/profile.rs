// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Radar profile — per-axis 1-9 values handed to the chart renderer.
//
// Each feature maps to an axis value independently of the point table; the
// renderer overlays the scored band as a reference ring, and the generator's
// predicted band as a second ring when one was claimed.

use bandscope_core::types::{
    ConnectorDensity, FeatureClassification, GrammarQuality, LexicalDiversity, RepetitionLevel,
    SentenceLength, VocabularyLevel,
};
use serde::Serialize;

use crate::bands::BandScore;
use crate::parse::Verdict;

/// Position of one feature level on a 1-9 chart axis.
pub trait AxisValue {
    fn axis_value(self) -> u8;
}

impl AxisValue for GrammarQuality {
    fn axis_value(self) -> u8 {
        match self {
            Self::Excellent => 9,
            Self::Good => 7,
            Self::Fair => 5,
            Self::Poor => 3,
        }
    }
}

impl AxisValue for VocabularyLevel {
    fn axis_value(self) -> u8 {
        match self {
            Self::Advanced => 8,
            Self::Medium => 6,
            Self::Low => 4,
        }
    }
}

impl AxisValue for ConnectorDensity {
    fn axis_value(self) -> u8 {
        match self {
            Self::High => 9,
            Self::Medium => 7,
            Self::Low => 5,
        }
    }
}

impl AxisValue for RepetitionLevel {
    fn axis_value(self) -> u8 {
        match self {
            Self::Low => 9,
            Self::Medium => 7,
            Self::High => 5,
        }
    }
}

impl AxisValue for LexicalDiversity {
    fn axis_value(self) -> u8 {
        match self {
            Self::High => 8,
            Self::Medium => 6,
            Self::Low => 4,
        }
    }
}

impl AxisValue for SentenceLength {
    fn axis_value(self) -> u8 {
        match self {
            Self::Long => 8,
            Self::Medium => 6,
            Self::Short => 4,
        }
    }
}

/// Axis values for all six features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureProfile {
    pub grammar_quality: u8,
    pub vocabulary_level: u8,
    pub connector_density: u8,
    pub repetition_level: u8,
    pub lexical_diversity: u8,
    pub sentence_length: u8,
}

impl FeatureProfile {
    pub fn of(classification: &FeatureClassification) -> Self {
        Self {
            grammar_quality: classification.grammar_quality.axis_value(),
            vocabulary_level: classification.vocabulary_level.axis_value(),
            connector_density: classification.connector_density.axis_value(),
            repetition_level: classification.repetition_level.axis_value(),
            lexical_diversity: classification.lexical_diversity.axis_value(),
            sentence_length: classification.sentence_length.axis_value(),
        }
    }
}

/// The five plotted chart axes, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RadarAxis {
    GrammarAccuracy,
    LexicalResource,
    CohesionConnectors,
    TaskAchievement,
    SentenceStructure,
}

impl RadarAxis {
    pub const ORDER: [RadarAxis; 5] = [
        Self::GrammarAccuracy,
        Self::LexicalResource,
        Self::CohesionConnectors,
        Self::TaskAchievement,
        Self::SentenceStructure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::GrammarAccuracy => "Grammar Accuracy",
            Self::LexicalResource => "Lexical Resource",
            Self::CohesionConnectors => "Cohesion/Connectors",
            Self::TaskAchievement => "Task Achievement",
            Self::SentenceStructure => "Sentence Structure",
        }
    }

    fn value_in(&self, profile: &FeatureProfile) -> u8 {
        match self {
            Self::GrammarAccuracy => profile.grammar_quality,
            Self::LexicalResource => profile.vocabulary_level,
            Self::CohesionConnectors => profile.connector_density,
            Self::TaskAchievement => profile.lexical_diversity,
            Self::SentenceStructure => profile.sentence_length,
        }
    }
}

/// Everything the renderer needs to draw one essay's chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarProfile {
    pub axes: Vec<(RadarAxis, u8)>,
    /// Scored band, drawn as a ring across all axes.
    pub reference_band: f32,
    /// The generator's own band claim, drawn as a second ring when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_band: Option<f32>,
}

impl RadarProfile {
    pub fn new(classification: &FeatureClassification, score: &BandScore) -> Self {
        let profile = FeatureProfile::of(classification);
        let axes = RadarAxis::ORDER
            .iter()
            .map(|axis| (*axis, axis.value_in(&profile)))
            .collect();
        Self {
            axes,
            reference_band: score.band(),
            claimed_band: None,
        }
    }

    /// Chart for a parsed analysis: the scored ring plus the generator's claim.
    pub fn for_verdict(classification: &FeatureClassification, verdict: &Verdict) -> Self {
        Self {
            claimed_band: verdict.predicted_band,
            ..Self::new(classification, &verdict.score)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::score;

    fn essay() -> FeatureClassification {
        FeatureClassification {
            grammar_quality: GrammarQuality::Fair,
            vocabulary_level: VocabularyLevel::Advanced,
            connector_density: ConnectorDensity::Medium,
            repetition_level: RepetitionLevel::High,
            lexical_diversity: LexicalDiversity::High,
            sentence_length: SentenceLength::Short,
        }
    }

    #[test]
    fn axis_values_stay_on_the_chart() {
        for &level in GrammarQuality::ASCENDING {
            assert!((1..=9).contains(&level.axis_value()));
        }
        for &level in SentenceLength::ASCENDING {
            assert!((1..=9).contains(&level.axis_value()));
        }
    }

    #[test]
    fn six_feature_profile() {
        let profile = FeatureProfile::of(&essay());
        assert_eq!(
            profile,
            FeatureProfile {
                grammar_quality: 5,
                vocabulary_level: 8,
                connector_density: 7,
                repetition_level: 5,
                lexical_diversity: 8,
                sentence_length: 4,
            }
        );
    }

    #[test]
    fn radar_has_five_axes_in_drawing_order() {
        let c = essay();
        let radar = RadarProfile::new(&c, &score(&c));
        let labels: Vec<&str> = radar.axes.iter().map(|(axis, _)| axis.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Grammar Accuracy",
                "Lexical Resource",
                "Cohesion/Connectors",
                "Task Achievement",
                "Sentence Structure"
            ]
        );
        let values: Vec<u8> = radar.axes.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![5, 8, 7, 8, 4]);
    }

    #[test]
    fn reference_ring_is_the_scored_band() {
        // 3 + 5 + 4 + 3 + 5 + 3 = 23
        let c = essay();
        let radar = RadarProfile::new(&c, &score(&c));
        assert_eq!(radar.reference_band, 6.0);
    }

    #[test]
    fn verdict_adds_the_claimed_ring() {
        let c = essay();
        let parsed = crate::parse::ParsedAnalysis {
            classification: c,
            predicted_band: Some(6.5),
        };
        let radar = RadarProfile::for_verdict(&c, &parsed.verdict());
        assert_eq!(radar.reference_band, 6.0);
        assert_eq!(radar.claimed_band, Some(6.5));
        assert_eq!(radar.axes, RadarProfile::new(&c, &score(&c)).axes);
    }

    #[test]
    fn chart_json_lists_axes_and_rings() {
        let c = essay();
        let plain = serde_json::to_value(RadarProfile::new(&c, &score(&c))).unwrap();
        assert_eq!(plain["axes"][0], serde_json::json!(["GrammarAccuracy", 5]));
        assert_eq!(plain["axes"].as_array().unwrap().len(), 5);
        assert_eq!(plain["reference_band"], 6.0);
        assert!(plain.get("claimed_band").is_none());

        let parsed = crate::parse::ParsedAnalysis {
            classification: c,
            predicted_band: Some(7.0),
        };
        let claimed = serde_json::to_value(RadarProfile::for_verdict(&c, &parsed.verdict())).unwrap();
        assert_eq!(claimed["claimed_band"], 7.0);
    }
}
