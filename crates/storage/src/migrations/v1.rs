//! Migration v1: the storm table

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS valid_storms (
    storm_id TEXT PRIMARY KEY NOT NULL,
    storm_name TEXT NOT NULL DEFAULT 'UNNAMED',
    year INTEGER NOT NULL DEFAULT 0 CHECK (year >= 0),
    duration INTEGER NOT NULL DEFAULT 0 CHECK (duration >= 0),
    max_wind_speed INTEGER NOT NULL CHECK (max_wind_speed >= 0),
    wind_speed_at_landfall INTEGER NOT NULL CHECK (wind_speed_at_landfall >= 0),
    strict_wind_speed_at_landfall INTEGER NOT NULL CHECK (strict_wind_speed_at_landfall >= 0),
    landfall_date TEXT NOT NULL DEFAULT '',
    strict_landfall_date TEXT NOT NULL DEFAULT '',
    is_hurricane INTEGER NOT NULL DEFAULT 0 CHECK (is_hurricane IN (0, 1)),
    has_liberal_landfall INTEGER NOT NULL DEFAULT 0 CHECK (has_liberal_landfall IN (0, 1)),
    has_strict_landfall INTEGER NOT NULL DEFAULT 0 CHECK (has_strict_landfall IN (0, 1)),
    has_any_landfall INTEGER NOT NULL DEFAULT 0 CHECK (has_any_landfall IN (0, 1))
);
";
