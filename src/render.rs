//! @acp:module "Note Renderer"
//! @acp:summary "Markdown template rendering for idea notes"
//! @acp:domain generation
//! @acp:layer output

use chrono::NaiveDate;

use crate::idea::IdeaRecord;

/// Render a note from its seven values.
///
/// Values are inserted verbatim in a single pass; text that looks like
/// template syntax is never expanded. The notes section is static. The
/// result is trimmed and ends with exactly one newline.
pub fn render_note(
    title: &str,
    date: NaiveDate,
    theme: &str,
    genre: &str,
    action: &str,
    constraint: &str,
    twist: &str,
) -> String {
    let date = date.format("%Y-%m-%d");
    let body = format!(
        "# {title}\n\
         \n\
         **Date:** {date}  \n\
         **Go prototype**\n\
         \n\
         ## Setup\n\
         \n\
         - Theme: {theme}\n\
         - Genre: {genre}\n\
         \n\
         ## Mechanic\n\
         \n\
         - Core: {action}\n\
         - Constraint: {constraint}\n\
         - AI twist: {twist}\n\
         \n\
         ### Go notes\n\
         \n\
         - Treat the game loop as a pure tick() function: state -> state.\n\
         - Consider a simple bot that calls tick() with its own actions for testing.\n"
    );

    format!("{}\n", body.trim())
}

/// Render the note body for `idea`
pub fn render_body(idea: &IdeaRecord) -> String {
    render_note(
        &idea.title,
        idea.date,
        &idea.theme,
        &idea.genre,
        &idea.action,
        &idea.constraint,
        &idea.twist,
    )
}
