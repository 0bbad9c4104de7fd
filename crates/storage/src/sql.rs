//! SQL rendering of structured predicates for the relational gateways.
//!
//! Identifiers come only from the fixed field enums below; every value is a bound
//! parameter. The count and page statements are both built from
//! [`render_filter`], so they always carry the same `WHERE` clause.

use landfall_core::query::{Condition, SortKey};
use landfall_core::{FlagField, IntField, PageWindow, Predicate, SortOrder, TextField};

use crate::error::StorageError;

pub(crate) const STORM_TABLE: &str = "valid_storms";

/// Column list in the order every row mapper reads it.
pub(crate) const STORM_COLUMNS: &str = "storm_id, storm_name, year, duration, max_wind_speed, \
     wind_speed_at_landfall, strict_wind_speed_at_landfall, landfall_date, strict_landfall_date, \
     is_hurricane, has_liberal_landfall, has_strict_landfall, has_any_landfall";

pub(crate) const STORM_COLUMN_COUNT: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dialect {
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    Sqlite,
    #[cfg_attr(not(feature = "postgres"), allow(dead_code))]
    Postgres,
}

impl Dialect {
    fn placeholder(self, index: usize) -> String {
        match self {
            Self::Sqlite => format!("?{index}"),
            Self::Postgres => format!("${index}"),
        }
    }

    /// SQLite `LIKE` is already ASCII case-insensitive.
    const fn contains_operator(self) -> &'static str {
        match self {
            Self::Sqlite => "LIKE",
            Self::Postgres => "ILIKE",
        }
    }

    /// Byte-wise ordering for text columns, matching SQLite's default `BINARY`.
    const fn text_collation(self) -> &'static str {
        match self {
            Self::Sqlite => "",
            Self::Postgres => " COLLATE \"C\"",
        }
    }
}

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SqlValue {
    Int(i64),
    Text(String),
}

/// Statement text plus its parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RenderedQuery {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

pub(crate) const fn text_column(field: TextField) -> &'static str {
    match field {
        TextField::Id => "storm_id",
        TextField::Name => "storm_name",
        TextField::LandfallDate => "landfall_date",
        TextField::StrictLandfallDate => "strict_landfall_date",
    }
}

pub(crate) const fn int_column(field: IntField) -> &'static str {
    match field {
        IntField::Year => "year",
        IntField::DurationDays => "duration",
        IntField::MaxWindSpeed => "max_wind_speed",
        IntField::WindSpeedAtLandfall => "wind_speed_at_landfall",
        IntField::StrictWindSpeedAtLandfall => "strict_wind_speed_at_landfall",
    }
}

pub(crate) const fn flag_column(field: FlagField) -> &'static str {
    match field {
        FlagField::IsHurricane => "is_hurricane",
        FlagField::HasLiberalLandfall => "has_liberal_landfall",
        FlagField::HasStrictLandfall => "has_strict_landfall",
        FlagField::HasAnyLandfall => "has_any_landfall",
    }
}

/// Escape special characters for LIKE pattern matching and wrap in `%...%`.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let escaped = needle.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    format!("%{escaped}%")
}

/// `COUNT(*)` as read back from the driver. A negative value is never defaulted.
pub(crate) fn row_count(count: i64) -> Result<u64, StorageError> {
    u64::try_from(count).map_err(|e| StorageError::DataCorruption {
        context: format!("datastore returned a negative row count ({count})"),
        source: Box::new(e),
    })
}

fn push_param(dialect: Dialect, params: &mut Vec<SqlValue>, value: SqlValue) -> String {
    params.push(value);
    dialect.placeholder(params.len())
}

fn render_condition(dialect: Dialect, condition: &Condition, params: &mut Vec<SqlValue>) -> String {
    match condition {
        Condition::FlagSet(field) => format!("{} = 1", flag_column(*field)),
        Condition::IntEquals(field, value) => {
            let ph = push_param(dialect, params, SqlValue::Int(*value));
            format!("{} = {ph}", int_column(*field))
        },
        Condition::TextContains(field, needle) => {
            let ph = push_param(dialect, params, SqlValue::Text(contains_pattern(needle)));
            format!(
                "{} {} {ph} ESCAPE '\\'",
                text_column(*field),
                dialect.contains_operator()
            )
        },
    }
}

/// `WHERE (a) AND (b OR c)`, or an empty string for an always-true predicate.
pub(crate) fn render_filter(
    dialect: Dialect,
    predicate: &Predicate,
    params: &mut Vec<SqlValue>,
) -> String {
    if predicate.is_always() {
        return String::new();
    }
    let clauses: Vec<String> = predicate
        .clauses()
        .iter()
        .map(|clause| {
            let alternatives: Vec<String> = clause
                .conditions()
                .iter()
                .map(|c| render_condition(dialect, c, params))
                .collect();
            format!("({})", alternatives.join(" OR "))
        })
        .collect();
    format!(" WHERE {}", clauses.join(" AND "))
}

fn render_order(dialect: Dialect, order: SortOrder) -> String {
    let direction = if order.ascending { "ASC" } else { "DESC" };
    let collation = dialect.text_collation();
    match order.column.key() {
        SortKey::Text(TextField::Id) => format!(" ORDER BY storm_id{collation} {direction}"),
        SortKey::Text(field) => format!(
            " ORDER BY {}{collation} {direction}, storm_id{collation} ASC",
            text_column(field)
        ),
        SortKey::Int(field) => format!(
            " ORDER BY {} {direction}, storm_id{collation} ASC",
            int_column(field)
        ),
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// `SELECT COUNT(*)` over the filtered table.
pub(crate) fn count_query(dialect: Dialect, predicate: &Predicate) -> RenderedQuery {
    let mut params = Vec::new();
    let filter = render_filter(dialect, predicate, &mut params);
    RenderedQuery { sql: format!("SELECT COUNT(*) FROM {STORM_TABLE}{filter}"), params }
}

/// Ordered, optionally windowed `SELECT` over the filtered table.
pub(crate) fn page_query(
    dialect: Dialect,
    predicate: &Predicate,
    order: SortOrder,
    window: Option<PageWindow>,
) -> RenderedQuery {
    let mut params = Vec::new();
    let filter = render_filter(dialect, predicate, &mut params);
    let mut sql = format!("SELECT {STORM_COLUMNS} FROM {STORM_TABLE}{filter}");
    sql.push_str(&render_order(dialect, order));
    if let Some(window) = window {
        let limit = push_param(dialect, &mut params, SqlValue::Int(saturating_i64(window.limit)));
        let offset = push_param(dialect, &mut params, SqlValue::Int(saturating_i64(window.offset)));
        sql.push_str(&format!(" LIMIT {limit} OFFSET {offset}"));
    }
    RenderedQuery { sql, params }
}

/// `INSERT` of one full row; placeholders follow [`STORM_COLUMNS`].
pub(crate) fn insert_statement(dialect: Dialect) -> String {
    let placeholders: Vec<String> =
        (1..=STORM_COLUMN_COUNT).map(|i| dialect.placeholder(i)).collect();
    format!(
        "INSERT INTO {STORM_TABLE} ({STORM_COLUMNS}) VALUES ({})",
        placeholders.join(", ")
    )
}
