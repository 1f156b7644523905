// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the bandscope-rubric crate: scoring a typed
// classification and parsing a generator response end to end.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bandscope_core::types::{
    ConnectorDensity, FeatureClassification, GrammarQuality, LexicalDiversity, RepetitionLevel,
    SentenceLength, VocabularyLevel,
};
use bandscope_rubric::{parse_analysis, score};

const RESPONSE: &str = "\
Grammar Issues: Fair
Advanced Vocabulary: Medium
Connector Count: Medium
Repeated Words: Medium
Lexical Diversity: High
Avg Sentence Length: Medium
Predicted IELTS Band: 6.0
";

fn bench_score(c: &mut Criterion) {
    let classification = FeatureClassification {
        grammar_quality: GrammarQuality::Fair,
        vocabulary_level: VocabularyLevel::Medium,
        connector_density: ConnectorDensity::Medium,
        repetition_level: RepetitionLevel::Medium,
        lexical_diversity: LexicalDiversity::High,
        sentence_length: SentenceLength::Medium,
    };

    c.bench_function("score", |b| {
        b.iter(|| black_box(score(black_box(&classification))));
    });
}

fn bench_parse_and_score(c: &mut Criterion) {
    c.bench_function("parse_analysis + verdict", |b| {
        b.iter(|| {
            let parsed = parse_analysis(black_box(RESPONSE)).expect("fixture parses");
            black_box(parsed.verdict());
        });
    });
}

criterion_group!(benches, bench_score, bench_parse_and_score);
criterion_main!(benches);
