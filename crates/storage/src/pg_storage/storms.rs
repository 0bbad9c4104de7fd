use async_trait::async_trait;
use landfall_core::{PageWindow, Predicate, SortOrder, StormRecord};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryScalar};
use sqlx::{Postgres, Row};

use super::PgStorage;
use crate::error::StorageError;
use crate::sql::{Dialect, SqlValue, count_query, insert_statement, page_query, row_count};
use crate::traits::{StormQueryStore, StormUploadStore};

fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &[SqlValue],
) -> Query<'q, Postgres, PgArguments> {
    for value in params {
        query = match value {
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Text(s) => query.bind(s.clone()),
        };
    }
    query
}

fn bind_all_scalar<'q>(
    mut query: QueryScalar<'q, Postgres, i64, PgArguments>,
    params: &[SqlValue],
) -> QueryScalar<'q, Postgres, i64, PgArguments> {
    for value in params {
        query = match value {
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Text(s) => query.bind(s.clone()),
        };
    }
    query
}

fn flag(row: &PgRow, column: &str) -> Result<bool, sqlx::Error> {
    Ok(row.try_get::<i16, _>(column)? != 0)
}

fn row_to_storm(row: &PgRow) -> Result<StormRecord, sqlx::Error> {
    Ok(StormRecord {
        id: row.try_get("storm_id")?,
        name: row.try_get("storm_name")?,
        year: row.try_get("year")?,
        duration_days: row.try_get("duration")?,
        max_wind_speed: row.try_get("max_wind_speed")?,
        wind_speed_at_landfall: row.try_get("wind_speed_at_landfall")?,
        strict_wind_speed_at_landfall: row.try_get("strict_wind_speed_at_landfall")?,
        landfall_date: row.try_get("landfall_date")?,
        strict_landfall_date: row.try_get("strict_landfall_date")?,
        is_hurricane: flag(row, "is_hurricane")?,
        has_liberal_landfall: flag(row, "has_liberal_landfall")?,
        has_strict_landfall: flag(row, "has_strict_landfall")?,
        has_any_landfall: flag(row, "has_any_landfall")?,
    })
}

#[async_trait]
impl StormQueryStore for PgStorage {
    async fn count(&self, predicate: &Predicate) -> Result<u64, StorageError> {
        let rendered = count_query(Dialect::Postgres, predicate);
        let count = bind_all_scalar(sqlx::query_scalar(&rendered.sql), &rendered.params)
            .fetch_one(&self.pool)
            .await?;
        row_count(count)
    }

    async fn fetch_page(
        &self,
        predicate: &Predicate,
        order: SortOrder,
        window: Option<PageWindow>,
    ) -> Result<Vec<StormRecord>, StorageError> {
        let rendered = page_query(Dialect::Postgres, predicate, order, window);
        let rows = bind_all(sqlx::query(&rendered.sql), &rendered.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(row_to_storm).collect::<Result<Vec<_>, _>>()?)
    }
}

#[async_trait]
impl StormUploadStore for PgStorage {
    async fn insert_batch(&self, records: &[StormRecord]) -> Result<usize, StorageError> {
        if records.is_empty() {
            return Ok(0);
        }
        let sql = insert_statement(Dialect::Postgres);
        let mut tx = self.pool.begin().await?;
        for r in records {
            sqlx::query(&sql)
                .bind(&r.id)
                .bind(&r.name)
                .bind(r.year)
                .bind(r.duration_days)
                .bind(r.max_wind_speed)
                .bind(r.wind_speed_at_landfall)
                .bind(r.strict_wind_speed_at_landfall)
                .bind(&r.landfall_date)
                .bind(&r.strict_landfall_date)
                .bind(i16::from(r.is_hurricane))
                .bind(i16::from(r.has_liberal_landfall))
                .bind(i16::from(r.has_strict_landfall))
                .bind(i16::from(r.has_any_landfall))
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(records.len())
    }
}
