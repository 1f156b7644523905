// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Bandscope: the six essay feature classifications and
// the frequency filter mode used by the handwriting enhancer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BandscopeError, Result};

/// The six essay features that feed the band rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    GrammarQuality,
    VocabularyLevel,
    ConnectorDensity,
    RepetitionLevel,
    LexicalDiversity,
    SentenceLength,
}

impl Feature {
    /// All features, in the order the analysis format lists them.
    pub const ALL: [Feature; 6] = [
        Self::GrammarQuality,
        Self::VocabularyLevel,
        Self::ConnectorDensity,
        Self::RepetitionLevel,
        Self::LexicalDiversity,
        Self::SentenceLength,
    ];

    /// Line label used by the generator's analysis response
    /// (`Grammar Issues: Good`).
    pub fn analysis_label(&self) -> &'static str {
        match self {
            Self::GrammarQuality => "Grammar Issues",
            Self::VocabularyLevel => "Advanced Vocabulary",
            Self::ConnectorDensity => "Connector Count",
            Self::RepetitionLevel => "Repeated Words",
            Self::LexicalDiversity => "Lexical Diversity",
            Self::SentenceLength => "Avg Sentence Length",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GrammarQuality => "grammar quality",
            Self::VocabularyLevel => "vocabulary level",
            Self::ConnectorDensity => "connector density",
            Self::RepetitionLevel => "repetition level",
            Self::LexicalDiversity => "lexical diversity",
            Self::SentenceLength => "sentence length",
        };
        f.write_str(name)
    }
}

/// Strip the decoration a generator tends to wrap around a label
/// (`[Good]`, `**Good**`, `Good.`).
fn clean_label(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, '[' | ']' | '*' | '.' | ',' | '"'))
}

// Each level enum lists its variants weakest first. Parsing is
// case-insensitive and serde goes through the same parser, so an unknown
// label is always an `InvalidFeatureValue`.
macro_rules! feature_level {
    (
        $(#[$meta:meta])*
        $name:ident ($feature:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every level, weakest first.
            pub const ASCENDING: &'static [$name] = &[$(Self::$variant),+];

            /// Canonical label, as written in the analysis format.
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// The next better level, or `None` at the top.
            pub fn improved(self) -> Option<Self> {
                let idx = Self::ASCENDING.iter().position(|level| *level == self)?;
                Self::ASCENDING.get(idx + 1).copied()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = BandscopeError;

            fn from_str(raw: &str) -> Result<Self> {
                let cleaned = clean_label(raw);
                Self::ASCENDING
                    .iter()
                    .copied()
                    .find(|level| level.label().eq_ignore_ascii_case(cleaned))
                    .ok_or_else(|| BandscopeError::InvalidFeatureValue {
                        feature: Feature::$feature,
                        value: raw.trim().to_string(),
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = BandscopeError;

            fn try_from(raw: String) -> Result<Self> {
                raw.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(level: $name) -> Self {
                level.label()
            }
        }
    };
}

feature_level! {
    /// Grammar quality, judged from the number of grammatical and spelling errors.
    GrammarQuality (GrammarQuality) {
        /// 6+ errors.
        Poor => "Poor",
        /// 4-5 errors.
        Fair => "Fair",
        /// 2-3 minor errors.
        Good => "Good",
        /// 0-1 minor errors.
        Excellent => "Excellent",
    }
}

feature_level! {
    /// Use of sophisticated, formal or specialised vocabulary.
    VocabularyLevel (VocabularyLevel) {
        Low => "Low",
        Medium => "Medium",
        Advanced => "Advanced",
    }
}

feature_level! {
    /// Number of connectors (however, furthermore, and).
    ConnectorDensity (ConnectorDensity) {
        /// 0-5 connectors.
        Low => "Low",
        /// 6-12 connectors.
        Medium => "Medium",
        /// 13+ connectors.
        High => "High",
    }
}

feature_level! {
    /// Number of repeated nouns and verbs. Fewer repeats is better, so the
    /// weakest level is `High`.
    RepetitionLevel (RepetitionLevel) {
        /// 5+ repeated words.
        High => "High",
        /// 3-4 repeated words.
        Medium => "Medium",
        /// 0-2 repeated words.
        Low => "Low",
    }
}

feature_level! {
    /// Lexical density band: content words over total words.
    LexicalDiversity (LexicalDiversity) {
        /// Density below 0.40.
        Low => "Low",
        /// Density in [0.40, 0.60).
        Medium => "Medium",
        /// Density of 0.60 or more.
        High => "High",
    }
}

feature_level! {
    /// Average words per sentence.
    SentenceLength (SentenceLength) {
        /// 5-10 words.
        Short => "Short",
        /// 11-20 words.
        Medium => "Medium",
        /// 20+ words.
        Long => "Long",
    }
}

/// The six qualitative classifications of one essay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureClassification {
    pub grammar_quality: GrammarQuality,
    pub vocabulary_level: VocabularyLevel,
    pub connector_density: ConnectorDensity,
    pub repetition_level: RepetitionLevel,
    pub lexical_diversity: LexicalDiversity,
    pub sentence_length: SentenceLength,
}

impl FeatureClassification {
    /// Canonical label of one feature's current level.
    pub fn label_of(&self, feature: Feature) -> &'static str {
        match feature {
            Feature::GrammarQuality => self.grammar_quality.label(),
            Feature::VocabularyLevel => self.vocabulary_level.label(),
            Feature::ConnectorDensity => self.connector_density.label(),
            Feature::RepetitionLevel => self.repetition_level.label(),
            Feature::LexicalDiversity => self.lexical_diversity.label(),
            Feature::SentenceLength => self.sentence_length.label(),
        }
    }

    /// A copy with `feature` raised by one level, or `None` if it is
    /// already at the top.
    pub fn improved(&self, feature: Feature) -> Option<Self> {
        let mut next = *self;
        match feature {
            Feature::GrammarQuality => next.grammar_quality = self.grammar_quality.improved()?,
            Feature::VocabularyLevel => next.vocabulary_level = self.vocabulary_level.improved()?,
            Feature::ConnectorDensity => {
                next.connector_density = self.connector_density.improved()?
            }
            Feature::RepetitionLevel => next.repetition_level = self.repetition_level.improved()?,
            Feature::LexicalDiversity => {
                next.lexical_diversity = self.lexical_diversity.improved()?
            }
            Feature::SentenceLength => next.sentence_length = self.sentence_length.improved()?,
        }
        Some(next)
    }
}

/// Which half of the spectrum the handwriting enhancer keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Zero the centred low-frequency square; sharpens strokes and edges.
    HighPass,
    /// Keep only the centred low-frequency square; suppresses speckle noise.
    LowPass,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighPass => f.write_str("high-pass"),
            Self::LowPass => f.write_str("low-pass"),
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high-pass" | "highpass" | "sharpen" => Ok(Self::HighPass),
            "low-pass" | "lowpass" | "denoise" => Ok(Self::LowPass),
            other => Err(format!(
                "unknown filter mode {other:?} (expected high-pass or low-pass)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureClassification {
        FeatureClassification {
            grammar_quality: GrammarQuality::Good,
            vocabulary_level: VocabularyLevel::Medium,
            connector_density: ConnectorDensity::High,
            repetition_level: RepetitionLevel::Medium,
            lexical_diversity: LexicalDiversity::Low,
            sentence_length: SentenceLength::Long,
        }
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("excellent".parse::<GrammarQuality>().unwrap(), GrammarQuality::Excellent);
        assert_eq!(" ADVANCED ".parse::<VocabularyLevel>().unwrap(), VocabularyLevel::Advanced);
        assert_eq!("[Short]".parse::<SentenceLength>().unwrap(), SentenceLength::Short);
        assert_eq!("**High**".parse::<ConnectorDensity>().unwrap(), ConnectorDensity::High);
    }

    #[test]
    fn unknown_label_is_rejected_not_defaulted() {
        let err = "Advanced".parse::<LexicalDiversity>().unwrap_err();
        match err {
            BandscopeError::InvalidFeatureValue { feature, value } => {
                assert_eq!(feature, Feature::LexicalDiversity);
                assert_eq!(value, "Advanced");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!("N/A".parse::<GrammarQuality>().is_err());
        assert!("".parse::<RepetitionLevel>().is_err());
    }

    #[test]
    fn repetition_improves_towards_low() {
        assert_eq!(RepetitionLevel::High.improved(), Some(RepetitionLevel::Medium));
        assert_eq!(RepetitionLevel::Medium.improved(), Some(RepetitionLevel::Low));
        assert_eq!(RepetitionLevel::Low.improved(), None);
        assert_eq!(GrammarQuality::Excellent.improved(), None);
        assert_eq!(GrammarQuality::Poor.improved(), Some(GrammarQuality::Fair));
    }

    #[test]
    fn classification_improves_one_field() {
        let base = sample();
        let better = base.improved(Feature::LexicalDiversity).unwrap();
        assert_eq!(better.lexical_diversity, LexicalDiversity::Medium);
        assert_eq!(better.grammar_quality, base.grammar_quality);
        assert!(base.improved(Feature::SentenceLength).is_none());
        assert!(base.improved(Feature::ConnectorDensity).is_none());
    }

    #[test]
    fn classification_json_uses_camel_case_labels() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["grammarQuality"], "Good");
        assert_eq!(json["repetitionLevel"], "Medium");

        let back: FeatureClassification = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn json_with_unknown_level_fails() {
        let json = r#"{
            "grammarQuality": "Superb",
            "vocabularyLevel": "Low",
            "connectorDensity": "Low",
            "repetitionLevel": "Low",
            "lexicalDiversity": "Low",
            "sentenceLength": "Short"
        }"#;
        let err = serde_json::from_str::<FeatureClassification>(json).unwrap_err();
        assert!(err.to_string().contains("grammar quality"), "{err}");
    }

    #[test]
    fn label_of_matches_analysis_format() {
        let c = sample();
        assert_eq!(c.label_of(Feature::ConnectorDensity), "High");
        assert_eq!(Feature::SentenceLength.analysis_label(), "Avg Sentence Length");
    }

    #[test]
    fn filter_mode_aliases() {
        assert_eq!("sharpen".parse::<FilterMode>().unwrap(), FilterMode::HighPass);
        assert_eq!("Low-Pass".parse::<FilterMode>().unwrap(), FilterMode::LowPass);
        assert!("band-pass".parse::<FilterMode>().is_err());
        assert_eq!(FilterMode::HighPass.to_string(), "high-pass");
    }
}
