//! Expense category model
//!
//! The fixed set of categories an expense can be filed under.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Category {
    Food,
    Transport,
    Bills,
    Fun,
    Health,
    /// Catch-all, also used for unrecognized names read from disk
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Self::Food,
        Self::Transport,
        Self::Bills,
        Self::Fun,
        Self::Health,
        Self::Other,
    ];

    /// Parse a category from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" => Some(Self::Transport),
            "bills" => Some(Self::Bills),
            "fun" => Some(Self::Fun),
            "health" => Some(Self::Health),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Fun => "Fun",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }

    /// Position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Next category, wrapping around (for selector widgets)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Food
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::parse(&name).unwrap_or(Self::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
