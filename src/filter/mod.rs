use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::{Difficulty, Temple, Tip};

static YEAR_RE: OnceLock<Regex> = OnceLock::new();

fn year_regex() -> &'static Regex {
    YEAR_RE.get_or_init(|| Regex::new(r"(?-u:\b)(?:18|19|20)[0-9]{2}(?-u:\b)").expect("year pattern is valid"))
}

/// Extracts the first standalone 4-digit year starting with 18, 19 or 20.
pub fn dedication_year(dedicated: &str) -> Option<u32> {
    year_regex()
        .find_iter(dedicated)
        .find_map(|m| m.as_str().parse::<u32>().ok())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TipFilter {
    #[default]
    All,
    Beginner,
    Intermediate,
}

impl TipFilter {
    /// Selectors match exactly; anything else falls back to `All`.
    pub fn parse(value: &str) -> Self {
        match value {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
        }
    }

    pub fn matches(self, tip: &Tip) -> bool {
        match self {
            Self::All => true,
            Self::Beginner => tip.difficulty == Difficulty::Beginner,
            Self::Intermediate => tip.difficulty == Difficulty::Intermediate,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TempleFilter {
    #[default]
    All,
    Old,
    New,
    Large,
    Small,
}

pub const OLD_BEFORE_YEAR: u32 = 1900;
pub const NEW_AFTER_YEAR: u32 = 2000;
pub const LARGE_ABOVE_AREA: u64 = 90_000;
pub const SMALL_BELOW_AREA: u64 = 10_000;

impl TempleFilter {
    /// Unknown selectors (including "home") fall back to `All`.
    pub fn parse(value: &str) -> Self {
        match value {
            "old" => Self::Old,
            "new" => Self::New,
            "large" => Self::Large,
            "small" => Self::Small,
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Old => "old",
            Self::New => "new",
            Self::Large => "large",
            Self::Small => "small",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::All => "All Temples",
            Self::Old => "Old Temples (built before 1900)",
            Self::New => "New Temples (built after 2000)",
            Self::Large => "Large Temples (> 90,000 sq ft)",
            Self::Small => "Small Temples (< 10,000 sq ft)",
        }
    }

    // records without a recognizable year never match old/new
    pub fn matches(self, temple: &Temple) -> bool {
        match self {
            Self::All => true,
            Self::Old => dedication_year(temple.dedicated).is_some_and(|y| y < OLD_BEFORE_YEAR),
            Self::New => dedication_year(temple.dedicated).is_some_and(|y| y > NEW_AFTER_YEAR),
            Self::Large => temple.area > LARGE_ABOVE_AREA,
            Self::Small => temple.area < SMALL_BELOW_AREA,
        }
    }
}

pub fn filter_tips<'a>(tips: &'a [Tip], filter: TipFilter) -> Vec<&'a Tip> {
    tips.iter().filter(|t| filter.matches(t)).collect()
}

pub fn filter_temples<'a>(temples: &'a [Temple], filter: TempleFilter) -> Vec<&'a Temple> {
    temples.iter().filter(|t| filter.matches(t)).collect()
}

/// Tips whose id is in `favorites`, kept in catalog order.
pub fn favorite_tips<'a>(tips: &'a [Tip], favorites: &[u32]) -> Vec<&'a Tip> {
    tips.iter().filter(|t| favorites.contains(&t.id)).collect()
}
