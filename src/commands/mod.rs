//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler

pub mod generate;

pub use generate::{execute_generate, generate_with, GenerateOptions, GenerateReport, NoteOutcome};
