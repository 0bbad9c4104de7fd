//! Structured filter predicate shared by the count and page stages.
//!
//! A [`Predicate`] is a conjunction of [`AnyOf`] clauses; each clause is a
//! disjunction of typed [`Condition`]s. Values travel inside the conditions and
//! are only ever bound as parameters by the SQL gateways, never spliced into
//! query text.

use crate::storm::{FlagField, IntField, StormRecord, TextField};

use super::LandfallCategory;

/// A single typed test against one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Flag is set (stored as 1).
    FlagSet(FlagField),
    /// Integer field equals the value.
    IntEquals(IntField, i64),
    /// Text field contains the needle, ASCII case-insensitively.
    TextContains(TextField, String),
}

impl Condition {
    #[must_use]
    pub fn matches(&self, record: &StormRecord) -> bool {
        match self {
            Self::FlagSet(field) => record.flag(*field),
            Self::IntEquals(field, value) => record.int(*field) == *value,
            Self::TextContains(field, needle) => contains_ignore_ascii_case(record.text(*field), needle),
        }
    }
}

/// Disjunction of conditions. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyOf(Vec<Condition>);

impl AnyOf {
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.0
    }

    #[must_use]
    pub fn matches(&self, record: &StormRecord) -> bool {
        self.0.iter().any(|c| c.matches(record))
    }
}

/// How a non-empty search term is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBranch {
    /// The term parsed as an integer: equality on numeric fields plus substring on ids and dates.
    Numeric(i32),
    /// Substring match on name, id and dates.
    Text,
}

impl SearchBranch {
    /// `None` for an empty term, which adds no search clause at all.
    #[must_use]
    pub fn classify(term: &str) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        Some(term.parse::<i32>().map_or(Self::Text, Self::Numeric))
    }
}

/// The combined category + search filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Predicate {
    clauses: Vec<AnyOf>,
}

impl Predicate {
    /// Matches every record.
    #[must_use]
    pub const fn always() -> Self {
        Self { clauses: Vec::new() }
    }

    /// Category clause, AND the search clause when `search_term` is non-empty.
    #[must_use]
    pub fn build(category: LandfallCategory, search_term: &str) -> Self {
        let mut clauses = vec![AnyOf(vec![Condition::FlagSet(category.flag())])];
        if let Some(branch) = SearchBranch::classify(search_term) {
            clauses.push(AnyOf(search_conditions(branch, search_term)));
        }
        Self { clauses }
    }

    #[must_use]
    pub fn clauses(&self) -> &[AnyOf] {
        &self.clauses
    }

    #[must_use]
    pub fn is_always(&self) -> bool {
        self.clauses.is_empty()
    }

    #[must_use]
    pub fn matches(&self, record: &StormRecord) -> bool {
        self.clauses.iter().all(|clause| clause.matches(record))
    }
}

fn search_conditions(branch: SearchBranch, term: &str) -> Vec<Condition> {
    let contains = |field| Condition::TextContains(field, term.to_owned());
    match branch {
        SearchBranch::Numeric(n) => {
            let n = i64::from(n);
            vec![
                Condition::IntEquals(IntField::DurationDays, n),
                Condition::IntEquals(IntField::WindSpeedAtLandfall, n),
                Condition::IntEquals(IntField::Year, n),
                contains(TextField::LandfallDate),
                contains(TextField::StrictLandfallDate),
                contains(TextField::Id),
            ]
        },
        SearchBranch::Text => vec![
            contains(TextField::Name),
            contains(TextField::Id),
            contains(TextField::LandfallDate),
            contains(TextField::StrictLandfallDate),
        ],
    }
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
}
