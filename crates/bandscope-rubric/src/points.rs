// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-feature point tables.

use bandscope_core::types::{
    ConnectorDensity, Feature, FeatureClassification, GrammarQuality, LexicalDiversity,
    RepetitionLevel, SentenceLength, VocabularyLevel,
};
use serde::Serialize;

/// Rubric points awarded for one feature level.
pub trait Points {
    fn points(self) -> u8;
}

impl Points for GrammarQuality {
    fn points(self) -> u8 {
        match self {
            Self::Excellent => 5,
            Self::Good => 4,
            Self::Fair => 3,
            Self::Poor => 2,
        }
    }
}

impl Points for VocabularyLevel {
    fn points(self) -> u8 {
        match self {
            Self::Advanced => 5,
            Self::Medium => 4,
            Self::Low => 2,
        }
    }
}

impl Points for ConnectorDensity {
    fn points(self) -> u8 {
        match self {
            Self::High => 5,
            Self::Medium => 4,
            Self::Low => 2,
        }
    }
}

impl Points for RepetitionLevel {
    fn points(self) -> u8 {
        match self {
            Self::Low => 5,
            Self::Medium => 4,
            Self::High => 3,
        }
    }
}

impl Points for LexicalDiversity {
    fn points(self) -> u8 {
        match self {
            Self::High => 5,
            Self::Medium => 4,
            Self::Low => 2,
        }
    }
}

impl Points for SentenceLength {
    fn points(self) -> u8 {
        match self {
            Self::Long => 5,
            Self::Medium => 4,
            Self::Short => 3,
        }
    }
}

/// Points per feature for one classification, kept for audit output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointBreakdown {
    pub grammar_quality: u8,
    pub vocabulary_level: u8,
    pub connector_density: u8,
    pub repetition_level: u8,
    pub lexical_diversity: u8,
    pub sentence_length: u8,
}

impl PointBreakdown {
    pub fn of(classification: &FeatureClassification) -> Self {
        Self {
            grammar_quality: classification.grammar_quality.points(),
            vocabulary_level: classification.vocabulary_level.points(),
            connector_density: classification.connector_density.points(),
            repetition_level: classification.repetition_level.points(),
            lexical_diversity: classification.lexical_diversity.points(),
            sentence_length: classification.sentence_length.points(),
        }
    }

    pub fn get(&self, feature: Feature) -> u8 {
        match feature {
            Feature::GrammarQuality => self.grammar_quality,
            Feature::VocabularyLevel => self.vocabulary_level,
            Feature::ConnectorDensity => self.connector_density,
            Feature::RepetitionLevel => self.repetition_level,
            Feature::LexicalDiversity => self.lexical_diversity,
            Feature::SentenceLength => self.sentence_length,
        }
    }

    /// Sum of the six values; always within 6..=30.
    pub fn total(&self) -> u8 {
        self.grammar_quality
            + self.vocabulary_level
            + self.connector_density
            + self.repetition_level
            + self.lexical_diversity
            + self.sentence_length
    }
}
