// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-band writing guidelines used when asking a generator for a sample essay
// at a target band, or when refining an essay towards the next band.

use serde::Serialize;

/// What an essay at one band looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandGuideline {
    pub band: u8,
    pub vocabulary: &'static str,
    pub structure: &'static str,
    pub cohesion: &'static str,
    pub errors: &'static str,
    pub length: &'static str,
}

const GUIDELINES: [BandGuideline; 7] = [
    BandGuideline {
        band: 3,
        vocabulary: "Very basic terms (study, work)",
        structure: "Fragmented sentences",
        cohesion: "No connectors",
        errors: "Severe errors",
        length: "<100 words",
    },
    BandGuideline {
        band: 4,
        vocabulary: "Basic vocabulary (school, job)",
        structure: "Short simple sentences",
        cohesion: "Minimal linking",
        errors: "Systematic errors",
        length: "150 words",
    },
    BandGuideline {
        band: 5,
        vocabulary: "Limited range (good, things)",
        structure: "Mostly simple sentences",
        cohesion: "Few connectors",
        errors: "Frequent errors",
        length: "200 words",
    },
    BandGuideline {
        band: 6,
        vocabulary: "Basic academic terms",
        structure: "Simple structures with some complexity",
        cohesion: "Basic connectors (and, but)",
        errors: "Noticeable errors",
        length: "250 words",
    },
    BandGuideline {
        band: 7,
        vocabulary: "Adequate range (significant, development)",
        structure: "Mix of simple/complex sentences",
        cohesion: "Clear paragraphing",
        errors: "Some errors",
        length: "250+ words",
    },
    BandGuideline {
        band: 8,
        vocabulary: "Advanced terms (globalization, contemporary)",
        structure: "Varied complex structures",
        cohesion: "Effective linking (however, moreover)",
        errors: "Rare minor errors",
        length: "280+ words",
    },
    BandGuideline {
        band: 9,
        vocabulary: "Sophisticated terms (paradigm shift, socioeconomic)",
        structure: "Complex sentences with subordinate clauses",
        cohesion: "Advanced transitions (consequently, furthermore)",
        errors: "Virtually error-free",
        length: "300+ words",
    },
];

/// Guideline for a whole band in 3..=9.
pub fn guideline(band: u8) -> Option<&'static BandGuideline> {
    GUIDELINES.iter().find(|g| g.band == band)
}

/// Band to aim for when refining an essay: one above the current band,
/// capped at 9.
pub fn refinement_target(current: f32) -> f32 {
    (current + 1.0).min(9.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_band_has_a_guideline() {
        for band in 3..=9 {
            assert_eq!(guideline(band).map(|g| g.band), Some(band));
        }
    }

    #[test]
    fn bands_outside_the_scale_have_none() {
        assert!(guideline(2).is_none());
        assert!(guideline(10).is_none());
    }

    #[test]
    fn refinement_caps_at_nine() {
        assert_eq!(refinement_target(6.0), 7.0);
        assert_eq!(refinement_target(8.5), 9.0);
        assert_eq!(refinement_target(9.0), 9.0);
    }
}
