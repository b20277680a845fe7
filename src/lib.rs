#![forbid(unsafe_code)]

//! @acp:module "Mechanic Notes Library"
//! @acp:summary "Random game-mechanic idea notes rendered as markdown"
//! @acp:domain generation
//! @acp:layer api
//! @acp:stability stable
//!
//! # Mechanic Notes
//!
//! Draws a theme, genre, core action, constraint and AI twist from fixed
//! lists and writes them up as a dated markdown note.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mechanic_notes::{execute_generate, GenerateOptions, NoteOutcome};
//!
//! let report = execute_generate(GenerateOptions::default());
//! if report.outcome == NoteOutcome::Created {
//!     println!("{}", report.path.display());
//! }
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod idea;
pub mod output;
pub mod render;
pub mod slug;

// Re-exports
pub use catalog::{pick_random, Category, CategoryList};
pub use commands::{execute_generate, generate_with, GenerateOptions, GenerateReport, NoteOutcome};
pub use config::GeneratorConfig;
pub use error::{NoteError, Result};
pub use idea::{compose_title, IdeaRecord};
pub use output::{write_if_absent, WriteOutcome};
pub use render::{render_body, render_note};
pub use slug::{derive_filename, slugify};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
