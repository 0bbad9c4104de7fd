//! Migration v2: indexes for the sortable columns and the category flags

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_storms_name ON valid_storms(storm_name, storm_id);
CREATE INDEX IF NOT EXISTS idx_storms_max_wind ON valid_storms(max_wind_speed, storm_id);
CREATE INDEX IF NOT EXISTS idx_storms_landfall_date ON valid_storms(landfall_date, storm_id);
CREATE INDEX IF NOT EXISTS idx_storms_landfall_wind ON valid_storms(wind_speed_at_landfall, storm_id);
CREATE INDEX IF NOT EXISTS idx_storms_strict ON valid_storms(has_strict_landfall);
CREATE INDEX IF NOT EXISTS idx_storms_liberal ON valid_storms(has_liberal_landfall);
CREATE INDEX IF NOT EXISTS idx_storms_any ON valid_storms(has_any_landfall);
";
