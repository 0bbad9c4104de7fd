//! Request/query types (Deserialize)

use std::str::FromStr;

use landfall_core::{DEFAULT_PAGE_SIZE, QueryParams};
use serde::{Deserialize, Deserializer};

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_category() -> String {
    "Any".to_owned()
}

fn default_sort_column() -> String {
    "name".to_owned()
}

const fn default_ascending() -> bool {
    true
}

/// `true` / `false` in any letter case.
fn parse_ascending(raw: &str) -> Result<bool, String> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("invalid ascending '{raw}', expected true or false"))
    }
}

fn deserialize_ascending<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_ascending(&raw).map_err(serde::de::Error::custom)
}

/// `GET /api/storms` query string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StormPageQuery {
    #[serde(default)]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_category")]
    pub landfall_category: String,
    #[serde(default = "default_sort_column")]
    pub sort_column: String,
    #[serde(default = "default_ascending", deserialize_with = "deserialize_ascending")]
    pub ascending: bool,
    #[serde(default)]
    pub search_term: String,
}

impl From<StormPageQuery> for QueryParams {
    fn from(q: StormPageQuery) -> Self {
        Self {
            page_number: q.page_number,
            page_size: q.page_size,
            landfall_category: q.landfall_category,
            sort_column: q.sort_column,
            ascending: q.ascending,
            search_term: q.search_term,
        }
    }
}

/// The `{page}+{size}+{category}+{sort}+{ascending}` path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyPageSegment {
    pub page_number: u32,
    pub page_size: u32,
    pub landfall_category: String,
    pub sort_column: String,
    pub ascending: bool,
}

impl LegacyPageSegment {
    #[must_use]
    pub fn into_params(self, search_term: String) -> QueryParams {
        QueryParams {
            page_number: self.page_number,
            page_size: self.page_size,
            landfall_category: self.landfall_category,
            sort_column: self.sort_column,
            ascending: self.ascending,
            search_term,
        }
    }
}

fn parse_number(name: &str, raw: &str) -> Result<u32, String> {
    raw.parse().map_err(|_| format!("invalid {name} '{raw}', expected a non-negative integer"))
}

impl FromStr for LegacyPageSegment {
    type Err = String;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = segment.split('+').collect();
        let [page_number, page_size, category, sort_column, ascending] = parts.as_slice() else {
            return Err(format!(
                "malformed path segment '{segment}', expected \
                 pageNumber+pageSize+landfallCategory+sortColumn+ascending"
            ));
        };
        let ascending = parse_ascending(ascending)?;
        Ok(Self {
            page_number: parse_number("pageNumber", page_number)?,
            page_size: parse_number("pageSize", page_size)?,
            landfall_category: (*category).to_owned(),
            sort_column: (*sort_column).to_owned(),
            ascending,
        })
    }
}
