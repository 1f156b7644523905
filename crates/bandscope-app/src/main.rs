// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bandscope — essay band scoring and handwriting enhancement workbench
//
// Entry point. Loads configuration, initialises logging, and dispatches the
// subcommand.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bandscope_core::config::AppConfig;
use bandscope_core::types::{
    ConnectorDensity, FeatureClassification, FilterMode, GrammarQuality, LexicalDiversity,
    RepetitionLevel, SentenceLength, VocabularyLevel,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bandscope")]
#[command(about = "Bandscope — deterministic essay band scoring and handwriting enhancement")]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score six feature classifications
    Score {
        #[arg(long)]
        grammar: GrammarQuality,
        #[arg(long)]
        vocabulary: VocabularyLevel,
        #[arg(long)]
        connectors: ConnectorDensity,
        #[arg(long)]
        repetition: RepetitionLevel,
        #[arg(long)]
        diversity: LexicalDiversity,
        #[arg(long)]
        sentence_length: SentenceLength,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse a generator's analysis response and score it
    Analyze {
        /// Response file, or `-` for stdin
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Sharpen or denoise a handwriting photo
    Enhance {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        mode: Option<FilterMode>,
        #[arg(long)]
        radius: Option<u32>,
        /// Downscale wider photos to this width first
        #[arg(long)]
        max_width: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Score {
            grammar,
            vocabulary,
            connectors,
            repetition,
            diversity,
            sentence_length,
            json,
        } => {
            let classification = FeatureClassification {
                grammar_quality: grammar,
                vocabulary_level: vocabulary,
                connector_density: connectors,
                repetition_level: repetition,
                lexical_diversity: diversity,
                sentence_length,
            };
            commands::score(&classification, json)?;
        }
        Commands::Analyze { input, json } => {
            commands::analyze(&input, json)?;
        }
        Commands::Enhance {
            input,
            output,
            mode,
            radius,
            max_width,
        } => {
            let mut enhance = config.enhance.clone();
            if let Some(mode) = mode {
                enhance.mode = mode;
            }
            if let Some(radius) = radius {
                enhance.radius = radius;
            }
            if max_width.is_some() {
                enhance.max_width = max_width;
            }
            commands::enhance(&input, &output, &enhance, config.max_upload_bytes)?;
        }
    }

    Ok(())
}
