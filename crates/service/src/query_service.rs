use std::sync::Arc;

use landfall_core::query::assemble;
use landfall_core::{
    PageMetadata, Predicate, QueryConfig, QueryParams, QueryResponse, SortOrder,
};
use landfall_storage::StormStore;

use crate::ServiceError;
use crate::stage::run_stage;

/// Runs paged storm queries: validate, build one predicate, count and fetch
/// concurrently against it, assemble.
///
/// The count and page stages are independent reads, not one snapshot. An upload
/// landing between them can leave `totalRecords` and `data` momentarily out of
/// step; the dataset is effectively static, so this is tolerated.
pub struct StormQueryService {
    store: Arc<dyn StormStore>,
    config: QueryConfig,
}

impl StormQueryService {
    #[must_use]
    pub fn new(store: Arc<dyn StormStore>, config: QueryConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub const fn config(&self) -> QueryConfig {
        self.config
    }

    /// One page of storms plus pagination metadata.
    ///
    /// Invalid parameters fail before the datastore is touched.
    pub async fn query_page(&self, params: &QueryParams) -> Result<QueryResponse, ServiceError> {
        let request = params.validate(self.config.max_page_size)?;
        let predicate = request.predicate();

        tracing::debug!(
            page_number = request.page_number,
            page_size = request.page_size,
            category = %request.landfall_category,
            sort = %request.sort_column,
            ascending = request.ascending,
            search = %request.search_term,
            "storm page query"
        );

        let limit = self.config.stage_timeout;
        let (total, rows) = tokio::join!(
            run_stage("count", limit, self.store.count(&predicate)),
            run_stage(
                "page",
                limit,
                self.store.fetch_page(&predicate, request.order(), Some(request.window()))
            ),
        );

        Ok(assemble(rows?, total?, request.page_number, request.page_size))
    }

    /// Every record, sorted by name, in the same envelope as a paged query.
    ///
    /// The metadata describes a single page holding everything:
    /// `currentPage = 0`, `pageSize = totalRecords`.
    pub async fn list_all(&self) -> Result<QueryResponse, ServiceError> {
        let rows = run_stage(
            "all",
            self.config.stage_timeout,
            self.store.fetch_page(&Predicate::always(), SortOrder::by_name(), None),
        )
        .await?;
        let total = u64::try_from(rows.len()).unwrap_or(u64::MAX);
        tracing::debug!(total, "storm listing");
        Ok(QueryResponse { data: rows, metadata: PageMetadata::single_page(total) })
    }
}
