//! @acp:module "Idea Record"
//! @acp:summary "One randomly assembled mechanic idea and its title"
//! @acp:domain generation
//! @acp:layer model

use chrono::NaiveDate;
use rand::Rng;

use crate::catalog::Category;
use crate::slug::{derive_filename, slugify};

/// Selections and derived fields for a single generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaRecord {
    pub theme: String,
    pub genre: String,
    pub action: String,
    pub constraint: String,
    pub twist: String,
    pub title: String,
    pub date: NaiveDate,
}

impl IdeaRecord {
    /// Draw one entry from each category and compose the title.
    ///
    /// Categories are drawn in a fixed order (theme, genre, action,
    /// constraint, twist) so a seeded rng always yields the same record.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate) -> Self {
        let theme = Category::Theme.pick(rng);
        let genre = Category::Genre.pick(rng);
        let action = Category::Action.pick(rng);
        let constraint = Category::Constraint.pick(rng);
        let twist = Category::AiTwist.pick(rng);

        Self::from_selections(theme, genre, action, constraint, twist, date)
    }

    /// Build a record from explicit selections
    pub fn from_selections(
        theme: &str,
        genre: &str,
        action: &str,
        constraint: &str,
        twist: &str,
        date: NaiveDate,
    ) -> Self {
        Self {
            theme: theme.to_string(),
            genre: genre.to_string(),
            action: action.to_string(),
            constraint: constraint.to_string(),
            twist: twist.to_string(),
            title: compose_title(action, genre),
            date,
        }
    }

    /// The five selections paired with the category each came from
    pub fn selections(&self) -> [(Category, &str); 5] {
        [
            (Category::Theme, self.theme.as_str()),
            (Category::Genre, self.genre.as_str()),
            (Category::Action, self.action.as_str()),
            (Category::Constraint, self.constraint.as_str()),
            (Category::AiTwist, self.twist.as_str()),
        ]
    }

    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Filename this record is written under
    pub fn filename(&self) -> String {
        derive_filename(self.date, &self.slug())
    }
}

/// Capitalise every word of `action` and `genre` and join them, action first
pub fn compose_title(action: &str, genre: &str) -> String {
    format!("{} {}", title_case(action), title_case(genre))
}

/// Upper-case the first letter of each word.
///
/// A word starts at the beginning of the string or after a separator:
/// whitespace, or any ASCII character other than a letter, digit or `_`.
/// The rest of each word is left as written.
///
/// Word starts go through `char::to_uppercase`, not a Unicode titlecase
/// mapping. Titlecase digraphs come out fully upper-cased (`ǆ` gives `Ǆ`,
/// not `ǅ`) and `ß` expands to `SS`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_separator = true;

    for c in text.chars() {
        if prev_is_separator {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_separator = is_separator(c);
    }

    out
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ACTIONS, AI_TWISTS, CONSTRAINTS, GENRES, THEMES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_compose_title() {
        assert_eq!(
            compose_title("hack enemy squads as temporary allies", "co-op puzzler"),
            "Hack Enemy Squads As Temporary Allies Co-Op Puzzler"
        );
    }

    #[test]
    fn test_title_case_keeps_existing_capitals() {
        assert_eq!(title_case("AI-run gladiator arena"), "AI-Run Gladiator Arena");
        assert_eq!(title_case("top-down shooter"), "Top-Down Shooter");
    }

    #[test]
    fn test_title_case_non_ascii_apostrophe_is_not_a_break() {
        assert_eq!(title_case("you\u{2019}re low"), "You\u{2019}re Low");
        assert_eq!(title_case("it's"), "It'S");
    }

    #[test]
    fn test_title_case_uses_uppercase_mapping() {
        assert_eq!(title_case("ßeta run"), "SSeta Run");
        assert_eq!(title_case("\u{1C6}emo"), "\u{1C4}emo");
    }

    #[test]
    fn test_selections_follow_draw_order() {
        let idea = IdeaRecord::draw(&mut StdRng::seed_from_u64(21), date());
        let selections = idea.selections();

        assert_eq!(
            selections.map(|(category, _)| category),
            Category::ALL
        );
        assert_eq!(selections[0].1, idea.theme);
        assert_eq!(selections[4].1, idea.twist);
        for (category, value) in selections {
            assert!(category.list().contains(&value), "{}", category.name());
        }
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_draw_uses_catalog_entries() {
        let mut rng = StdRng::seed_from_u64(3);
        let idea = IdeaRecord::draw(&mut rng, date());

        assert!(THEMES.contains(&idea.theme.as_str()));
        assert!(GENRES.contains(&idea.genre.as_str()));
        assert!(ACTIONS.contains(&idea.action.as_str()));
        assert!(CONSTRAINTS.contains(&idea.constraint.as_str()));
        assert!(AI_TWISTS.contains(&idea.twist.as_str()));
        assert_eq!(idea.title, compose_title(&idea.action, &idea.genre));
        assert_eq!(idea.date, date());
    }

    #[test]
    fn test_draw_is_reproducible_for_a_seed() {
        let a = IdeaRecord::draw(&mut StdRng::seed_from_u64(11), date());
        let b = IdeaRecord::draw(&mut StdRng::seed_from_u64(11), date());
        assert_eq!(a, b);
        assert_eq!(a.filename(), b.filename());
    }

    #[test]
    fn test_filename_from_selections() {
        let idea = IdeaRecord::from_selections(
            THEMES[0],
            "co-op puzzler",
            "redirect projectiles mid-flight",
            CONSTRAINTS[0],
            AI_TWISTS[0],
            date(),
        );
        assert_eq!(idea.title, "Redirect Projectiles Mid-Flight Co-Op Puzzler");
        assert_eq!(
            idea.filename(),
            "2024-03-05-redirect-projectiles-mid-flight-co-op-puzzler-go-note.md"
        );
    }
}
