//! The storm record and its typed fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::DATE_DISPLAY_LEN;
use crate::error::ValidationError;

/// One historical storm with its landfall classification.
///
/// Field names on the wire follow the read API (`stormID`, `stormName`, ...).
/// The PascalCase names produced by the bulk uploader are accepted as aliases,
/// and landfall flags may arrive either as booleans or as 0/1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StormRecord {
    #[serde(rename = "stormID", alias = "StormID", alias = "stormId")]
    pub id: String,
    #[serde(rename = "stormName", alias = "StormName")]
    pub name: String,
    #[serde(default, alias = "Year")]
    pub year: i32,
    #[serde(rename = "duration", default, alias = "Duration", alias = "durationDays")]
    pub duration_days: i32,
    #[serde(alias = "MaxWindSpeed")]
    pub max_wind_speed: i32,
    #[serde(alias = "WindSpeedAtLandfall")]
    pub wind_speed_at_landfall: i32,
    #[serde(alias = "StrictWindSpeedAtLandfall")]
    pub strict_wind_speed_at_landfall: i32,
    #[serde(alias = "LandfallDate")]
    pub landfall_date: String,
    #[serde(alias = "StrictLandfallDate")]
    pub strict_landfall_date: String,
    #[serde(alias = "IsHurricane", deserialize_with = "flag::deserialize")]
    pub is_hurricane: bool,
    #[serde(alias = "HasLiberalLandfall", deserialize_with = "flag::deserialize")]
    pub has_liberal_landfall: bool,
    #[serde(alias = "HasStrictLandfall", deserialize_with = "flag::deserialize")]
    pub has_strict_landfall: bool,
    #[serde(default, alias = "HasAnyLandfall", deserialize_with = "flag::deserialize")]
    pub has_any_landfall: bool,
}

/// String-valued fields a search term can be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Id,
    Name,
    LandfallDate,
    StrictLandfallDate,
}

/// Integer-valued fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntField {
    Year,
    DurationDays,
    MaxWindSpeed,
    WindSpeedAtLandfall,
    StrictWindSpeedAtLandfall,
}

/// Boolean flags, persisted as 0/1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagField {
    IsHurricane,
    HasLiberalLandfall,
    HasStrictLandfall,
    HasAnyLandfall,
}

impl StormRecord {
    #[must_use]
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Id => &self.id,
            TextField::Name => &self.name,
            TextField::LandfallDate => &self.landfall_date,
            TextField::StrictLandfallDate => &self.strict_landfall_date,
        }
    }

    #[must_use]
    pub fn int(&self, field: IntField) -> i64 {
        let value = match field {
            IntField::Year => self.year,
            IntField::DurationDays => self.duration_days,
            IntField::MaxWindSpeed => self.max_wind_speed,
            IntField::WindSpeedAtLandfall => self.wind_speed_at_landfall,
            IntField::StrictWindSpeedAtLandfall => self.strict_wind_speed_at_landfall,
        };
        i64::from(value)
    }

    #[must_use]
    pub const fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::IsHurricane => self.is_hurricane,
            FlagField::HasLiberalLandfall => self.has_liberal_landfall,
            FlagField::HasStrictLandfall => self.has_strict_landfall,
            FlagField::HasAnyLandfall => self.has_any_landfall,
        }
    }

    /// Check the invariants a stored record must satisfy.
    ///
    /// # Errors
    /// Returns [`ValidationError::Record`] naming the first violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let reject = |reason: &str| -> Result<(), ValidationError> {
            Err(ValidationError::Record { id: self.id.clone(), reason: reason.to_owned() })
        };
        if self.id.trim().is_empty() {
            return reject("stormID must not be empty");
        }
        let numbers = [
            ("year", self.year),
            ("duration", self.duration_days),
            ("maxWindSpeed", self.max_wind_speed),
            ("windSpeedAtLandfall", self.wind_speed_at_landfall),
            ("strictWindSpeedAtLandfall", self.strict_wind_speed_at_landfall),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| *v < 0) {
            return reject(&format!("{name} must not be negative"));
        }
        if self.has_strict_landfall && !self.has_liberal_landfall {
            return reject("hasStrictLandfall requires hasLiberalLandfall");
        }
        if self.has_liberal_landfall && !self.has_any_landfall {
            return reject("hasLiberalLandfall requires hasAnyLandfall");
        }
        Ok(())
    }

    /// Trim both landfall dates to their display-significant prefix.
    #[must_use]
    pub fn with_normalized_dates(mut self) -> Self {
        self.landfall_date = normalize_date(&self.landfall_date);
        self.strict_landfall_date = normalize_date(&self.strict_landfall_date);
        self
    }
}

/// Cut a timestamp such as `1992-08-24 08:30:00` down to `1992-08-24`.
///
/// Strings whose first ten characters are not a calendar date are returned unchanged.
#[must_use]
pub fn normalize_date(raw: &str) -> String {
    match raw.get(..DATE_DISPLAY_LEN) {
        Some(prefix) if NaiveDate::parse_from_str(prefix, "%Y-%m-%d").is_ok() => prefix.to_owned(),
        _ => raw.to_owned(),
    }
}

mod flag {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Flag::deserialize(deserializer)? {
            Flag::Bool(b) => Ok(b),
            Flag::Int(0) => Ok(false),
            Flag::Int(1) => Ok(true),
            Flag::Int(other) => Err(D::Error::custom(format!("expected 0 or 1, got {other}"))),
        }
    }
}
