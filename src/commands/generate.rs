//! @acp:module "Generate Command"
//! @acp:summary "Draw an idea, render it and write the note"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements the single `generate-mechanic` run. Write failures are
//! reported and logged but never turned into an error exit.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorConfig;
use crate::idea::IdeaRecord;
use crate::output::{write_if_absent, WriteOutcome};
use crate::render::render_body;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Resolved output settings
    pub config: GeneratorConfig,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::from_executable(),
        }
    }
}

/// What happened to the note on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteOutcome {
    Created,
    /// A note with the same filename already existed
    Skipped,
    /// The note could not be written; holds the error message
    Failed(String),
}

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub idea: IdeaRecord,
    pub body: String,
    pub path: PathBuf,
    pub outcome: NoteOutcome,
}

/// Execute the generate command with a time-seeded rng and today's UTC date
pub fn execute_generate(options: GenerateOptions) -> GenerateReport {
    let now = Utc::now();
    let seed = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64;
    let mut rng = StdRng::seed_from_u64(seed);

    generate_with(&mut rng, now.date_naive(), &options.config)
}

/// Run the pipeline with an explicit rng and date
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    date: NaiveDate,
    config: &GeneratorConfig,
) -> GenerateReport {
    let idea = IdeaRecord::draw(rng, date);
    for (category, value) in idea.selections() {
        tracing::debug!(category = category.name(), "Selected {}", value);
    }

    let body = render_body(&idea);
    let path = config.note_path(&idea.filename());

    let outcome = match write_if_absent(&path, &body) {
        Ok(WriteOutcome::Created) => {
            tracing::info!("Wrote note {}", path.display());
            NoteOutcome::Created
        }
        Ok(WriteOutcome::Skipped) => {
            tracing::info!("Note already exists, skipping {}", path.display());
            NoteOutcome::Skipped
        }
        Err(e) => {
            tracing::error!(path = %e.path().display(), "{}", e);
            NoteOutcome::Failed(e.to_string())
        }
    };

    GenerateReport {
        idea,
        body,
        path,
        outcome,
    }
}
