//! @acp:module "Slugs"
//! @acp:summary "Title slugs and note filenames"
//! @acp:domain generation
//! @acp:layer utility
//!
//! The filename format is consumed by tooling that globs the `mechanics`
//! directory, so it must not drift: `{YYYY-MM-DD}-{slug}-go-note.md`.

use chrono::NaiveDate;

/// Suffix appended after the slug in every note filename
pub const NOTE_SUFFIX: &str = "-go-note.md";

/// Lower-case `text` and turn spaces, slashes and periods into hyphens.
///
/// Repeated hyphens are kept and other punctuation passes through untouched.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '.' => '-',
            other => other,
        })
        .collect()
}

/// Build the note filename for a date and slug
pub fn derive_filename(date: NaiveDate, slug: &str) -> String {
    format!("{}-{}{}", date.format("%Y-%m-%d"), slug, NOTE_SUFFIX)
}
