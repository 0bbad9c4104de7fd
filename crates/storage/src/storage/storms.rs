//! Storm queries and bulk insert.

use landfall_core::{PageWindow, Predicate, SortOrder, StormRecord};
use rusqlite::{Row, params, params_from_iter};

use super::SqliteStorage;
use crate::error::StorageError;
use crate::sql::{Dialect, count_query, insert_statement, page_query, row_count};

/// Map a row selected with [`crate::sql::STORM_COLUMNS`].
fn row_to_storm(row: &Row<'_>) -> rusqlite::Result<StormRecord> {
    Ok(StormRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        year: row.get(2)?,
        duration_days: row.get(3)?,
        max_wind_speed: row.get(4)?,
        wind_speed_at_landfall: row.get(5)?,
        strict_wind_speed_at_landfall: row.get(6)?,
        landfall_date: row.get(7)?,
        strict_landfall_date: row.get(8)?,
        is_hurricane: row.get(9)?,
        has_liberal_landfall: row.get(10)?,
        has_strict_landfall: row.get(11)?,
        has_any_landfall: row.get(12)?,
    })
}

impl SqliteStorage {
    /// # Errors
    /// Returns an error if the pool or the statement fails.
    pub fn count_storms(&self, predicate: &Predicate) -> Result<u64, StorageError> {
        let query = count_query(Dialect::Sqlite, predicate);
        let conn = self.conn()?;
        let count: i64 =
            conn.query_row(&query.sql, params_from_iter(query.params.iter()), |row| row.get(0))?;
        row_count(count)
    }

    /// # Errors
    /// Returns an error if the pool or the statement fails, or a row is malformed.
    pub fn fetch_storms(
        &self,
        predicate: &Predicate,
        order: SortOrder,
        window: Option<PageWindow>,
    ) -> Result<Vec<StormRecord>, StorageError> {
        let query = page_query(Dialect::Sqlite, predicate, order, window);
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&query.sql)?;
        let rows = stmt
            .query_map(params_from_iter(query.params.iter()), row_to_storm)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Insert all records in one transaction; nothing is kept on failure.
    ///
    /// # Errors
    /// Returns [`StorageError::Duplicate`] if any id already exists.
    pub fn insert_storms(&self, records: &[StormRecord]) -> Result<usize, StorageError> {
        if records.is_empty() {
            return Ok(0);
        }
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(&insert_statement(Dialect::Sqlite))?;
            for r in records {
                stmt.execute(params![
                    r.id,
                    r.name,
                    r.year,
                    r.duration_days,
                    r.max_wind_speed,
                    r.wind_speed_at_landfall,
                    r.strict_wind_speed_at_landfall,
                    r.landfall_date,
                    r.strict_landfall_date,
                    r.is_hurricane,
                    r.has_liberal_landfall,
                    r.has_strict_landfall,
                    r.has_any_landfall,
                ])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }
}
