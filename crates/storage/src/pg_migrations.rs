//! PostgreSQL schema migrations for the storm table.

use sqlx::PgPool;

/// Run all PostgreSQL migrations. Idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS valid_storms (
            storm_id TEXT PRIMARY KEY,
            storm_name TEXT NOT NULL DEFAULT 'UNNAMED',
            year INTEGER NOT NULL DEFAULT 0 CHECK (year >= 0),
            duration INTEGER NOT NULL DEFAULT 0 CHECK (duration >= 0),
            max_wind_speed INTEGER NOT NULL CHECK (max_wind_speed >= 0),
            wind_speed_at_landfall INTEGER NOT NULL CHECK (wind_speed_at_landfall >= 0),
            strict_wind_speed_at_landfall INTEGER NOT NULL CHECK (strict_wind_speed_at_landfall >= 0),
            landfall_date TEXT NOT NULL DEFAULT '',
            strict_landfall_date TEXT NOT NULL DEFAULT '',
            is_hurricane SMALLINT NOT NULL DEFAULT 0 CHECK (is_hurricane IN (0, 1)),
            has_liberal_landfall SMALLINT NOT NULL DEFAULT 0 CHECK (has_liberal_landfall IN (0, 1)),
            has_strict_landfall SMALLINT NOT NULL DEFAULT 0 CHECK (has_strict_landfall IN (0, 1)),
            has_any_landfall SMALLINT NOT NULL DEFAULT 0 CHECK (has_any_landfall IN (0, 1))
        )
        "#,
    )
    .execute(pool)
    .await?;

    for (name, columns) in [
        ("idx_storms_name", r#"storm_name COLLATE "C", storm_id COLLATE "C""#),
        ("idx_storms_max_wind", r#"max_wind_speed, storm_id COLLATE "C""#),
        ("idx_storms_landfall_date", r#"landfall_date COLLATE "C", storm_id COLLATE "C""#),
        ("idx_storms_landfall_wind", r#"wind_speed_at_landfall, storm_id COLLATE "C""#),
        ("idx_storms_strict", "has_strict_landfall"),
        ("idx_storms_liberal", "has_liberal_landfall"),
        ("idx_storms_any", "has_any_landfall"),
    ] {
        sqlx::query(&format!("CREATE INDEX IF NOT EXISTS {name} ON valid_storms ({columns})"))
            .execute(pool)
            .await?;
    }

    tracing::info!("PostgreSQL schema up to date");
    Ok(())
}
