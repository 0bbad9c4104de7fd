use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::storm::FlagField;

/// How strictly a storm's landfall is defined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LandfallCategory {
    /// Hurricane status at the moment of landfall.
    Strict,
    /// Hurricane status at any point, with a landfall.
    Liberal,
    /// Any landfall, no hurricane requirement.
    Any,
}

impl LandfallCategory {
    pub const ALL_VARIANTS_STR: &'static str = "Strict|Liberal|Any";

    pub const ALL_VARIANTS: &'static [Self] = &[Self::Strict, Self::Liberal, Self::Any];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Strict => "Strict",
            Self::Liberal => "Liberal",
            Self::Any => "Any",
        }
    }

    /// The `has{Category}Landfall` flag a record must carry to belong to this category.
    #[must_use]
    pub const fn flag(&self) -> FlagField {
        match *self {
            Self::Strict => FlagField::HasStrictLandfall,
            Self::Liberal => FlagField::HasLiberalLandfall,
            Self::Any => FlagField::HasAnyLandfall,
        }
    }
}

impl std::fmt::Display for LandfallCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the allow-list.
impl FromStr for LandfallCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_VARIANTS
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::LandfallCategory(s.to_owned()))
    }
}
