//! Rule-based task categorization for icon display.
//!
//! # Responsibility
//! - Map task text to a category via ordered whole-word keyword rules.
//!
//! # Invariants
//! - Rules are evaluated in fixed priority order; the first match wins
//!   even when a later rule's keywords also appear.
//! - Matching is case-insensitive and word-boundary aware, so keywords
//!   never fire from inside longer words.

use once_cell::sync::Lazy;
use regex::Regex;

/// Icon shown when no rule matches.
pub const DEFAULT_ICON: &str = "📌";

/// Task category derived from keyword rules, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Work,
    Shopping,
    Study,
    Exercise,
    Health,
    Home,
    Food,
    Phone,
    Email,
    Travel,
    Scheduling,
    Finance,
    Entertainment,
}

impl Category {
    /// Icon token rendered for this category.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Work => "💼",
            Self::Shopping => "🛒",
            Self::Study => "📚",
            Self::Exercise => "💪",
            Self::Health => "🏥",
            Self::Home => "🏠",
            Self::Food => "🍳",
            Self::Phone => "📞",
            Self::Email => "📧",
            Self::Travel => "✈️",
            Self::Scheduling => "📅",
            Self::Finance => "💰",
            Self::Entertainment => "🎬",
        }
    }
}

/// Ordered rule table. Order is behavior: "Schedule work meeting" is Work,
/// not Scheduling, because the work rule is checked first.
static RULES: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    [
        (
            Category::Work,
            r"work|meeting|project|deadline|report|presentation|office|business|client|boss",
        ),
        (
            Category::Shopping,
            r"buy|shop|shopping|grocery|store|market|purchase",
        ),
        (
            Category::Study,
            r"study|learn|read|homework|exam|test|assignment|course|book|class",
        ),
        (
            Category::Exercise,
            r"exercise|gym|workout|run|jog|fitness|yoga|sport|training",
        ),
        (
            Category::Health,
            r"doctor|hospital|medicine|appointment|health|checkup|dentist|clinic",
        ),
        (
            Category::Home,
            r"clean|laundry|dishes|house|home|room|organize|fix|repair",
        ),
        (
            Category::Food,
            r"cook|food|meal|dinner|lunch|breakfast|recipe|kitchen|eat|restaurant",
        ),
        (Category::Phone, r"call|phone|dial|contact|ring"),
        (Category::Email, r"email|mail|send|message|inbox"),
        (
            Category::Travel,
            r"travel|trip|flight|airport|hotel|vacation|journey|visit",
        ),
        (
            Category::Scheduling,
            r"meet|appointment|schedule|date|time|calendar",
        ),
        (
            Category::Finance,
            r"pay|bill|money|bank|finance|budget|expense|salary",
        ),
        (
            Category::Entertainment,
            r"movie|watch|game|play|entertainment|fun|party|celebrate",
        ),
    ]
    .into_iter()
    .map(|(category, keywords)| {
        let pattern = format!(r"(?i)\b(?:{keywords})\b");
        let regex = Regex::new(&pattern)
            .unwrap_or_else(|err| panic!("invalid keyword rule for {category:?}: {err}"));
        (category, regex)
    })
    .collect()
});

/// Returns the first matching category for the given task text.
pub fn classify(text: &str) -> Option<Category> {
    RULES
        .iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(category, _)| *category)
}

/// Returns the icon for the given task text, falling back to
/// [`DEFAULT_ICON`] when no rule matches.
pub fn icon_for(text: &str) -> &'static str {
    classify(text).map_or(DEFAULT_ICON, |category| category.icon())
}
