use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::storm::{IntField, TextField};

/// Columns a page may be ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Id,
    Name,
    MaxWindSpeed,
    LandfallDate,
    WindSpeedAtLandfall,
}

/// The record field behind a sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Text(TextField),
    Int(IntField),
}

impl SortColumn {
    pub const ALL_VARIANTS_STR: &'static str =
        "id|name|maxWindSpeed|landfallDate|windSpeedAtLandfall";

    pub const ALL_VARIANTS: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::MaxWindSpeed,
        Self::LandfallDate,
        Self::WindSpeedAtLandfall,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Id => "id",
            Self::Name => "name",
            Self::MaxWindSpeed => "maxWindSpeed",
            Self::LandfallDate => "landfallDate",
            Self::WindSpeedAtLandfall => "windSpeedAtLandfall",
        }
    }

    #[must_use]
    pub const fn key(&self) -> SortKey {
        match *self {
            Self::Id => SortKey::Text(TextField::Id),
            Self::Name => SortKey::Text(TextField::Name),
            Self::MaxWindSpeed => SortKey::Int(IntField::MaxWindSpeed),
            Self::LandfallDate => SortKey::Text(TextField::LandfallDate),
            Self::WindSpeedAtLandfall => SortKey::Int(IntField::WindSpeedAtLandfall),
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the allow-list.
impl FromStr for SortColumn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_VARIANTS
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::SortColumn(s.to_owned()))
    }
}

/// Sort column plus direction.
///
/// Every gateway breaks ties on the record id ascending, so pages never
/// overlap or skip rows when the sort column has duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub ascending: bool,
}

impl SortOrder {
    #[must_use]
    pub const fn new(column: SortColumn, ascending: bool) -> Self {
        Self { column, ascending }
    }

    /// Ordering used by the unfiltered "all records" listing.
    #[must_use]
    pub const fn by_name() -> Self {
        Self::new(SortColumn::Name, true)
    }
}
