//! @acp:module "Catalog"
//! @acp:summary "Fixed candidate lists and uniform random selection"
//! @acp:domain generation
//! @acp:layer model
//!
//! Five category lists feed every note. They are compile-time constants and
//! cannot be changed at runtime.

use rand::Rng;

/// A fixed, ordered list of candidate strings
pub type CategoryList = &'static [&'static str];

pub const THEMES: CategoryList = &[
    "procedural labyrinth",
    "AI-run gladiator arena",
    "virtual petri dish",
    "signal-jammed battlefield",
];

pub const GENRES: CategoryList = &[
    "top-down shooter",
    "resource management sim",
    "co-op puzzler",
    "survival arena",
];

pub const ACTIONS: CategoryList = &[
    "redirect projectiles mid-flight",
    "hack enemy squads as temporary allies",
    "scrub your own footprints from the map",
    "record and replay your past runs as clones",
];

pub const CONSTRAINTS: CategoryList = &[
    "fog of war hides everything but sound cues",
    "ammo is shared across all weapons",
    "healing always has a delayed effect",
    "every ability has a visible cooldown arc",
];

pub const AI_TWISTS: CategoryList = &[
    "a small heuristic bot auto-plays for a few seconds when you freeze",
    "the game tracks your common mistakes and surfaces them as hints",
    "enemy patterns are shuffled based on a simple Markov chain",
    "the map spawns extra cover when you\u{2019}re low on health",
];

const _: () = assert!(!THEMES.is_empty());
const _: () = assert!(!GENRES.is_empty());
const _: () = assert!(!ACTIONS.is_empty());
const _: () = assert!(!CONSTRAINTS.is_empty());
const _: () = assert!(!AI_TWISTS.is_empty());

/// Which list a selection comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Theme,
    Genre,
    Action,
    Constraint,
    AiTwist,
}

impl Category {
    /// All categories, in the order they are drawn
    pub const ALL: [Category; 5] = [
        Category::Theme,
        Category::Genre,
        Category::Action,
        Category::Constraint,
        Category::AiTwist,
    ];

    /// Candidate list for this category
    pub fn list(self) -> CategoryList {
        match self {
            Category::Theme => THEMES,
            Category::Genre => GENRES,
            Category::Action => ACTIONS,
            Category::Constraint => CONSTRAINTS,
            Category::AiTwist => AI_TWISTS,
        }
    }

    /// Display name used in logs
    pub fn name(self) -> &'static str {
        match self {
            Category::Theme => "theme",
            Category::Genre => "genre",
            Category::Action => "action",
            Category::Constraint => "constraint",
            Category::AiTwist => "ai_twist",
        }
    }

    /// Draw one entry from this category
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        pick_random(rng, self.list())
    }
}

/// Return a uniformly random element of `list`.
///
/// `list` must be non-empty; an empty list is a configuration bug and panics.
pub fn pick_random<'a, R: Rng + ?Sized>(rng: &mut R, list: &[&'a str]) -> &'a str {
    debug_assert!(!list.is_empty(), "category list must not be empty");
    list[rng.random_range(0..list.len())]
}
