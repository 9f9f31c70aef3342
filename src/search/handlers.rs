use super::engine::filter_records;
use super::types::{FilterOptions, SearchParams};
use crate::dataset::types::{Dataset, StandardRecord};
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /api/standards?query=&section=&source=`
///
/// Returns the filtered records as a plain JSON array. Absent parameters mean
/// "no filter on that dimension".
pub async fn handle_search_standards(
    Query(params): Query<SearchParams>,
    Extension(dataset): Extension<Arc<Dataset>>,
) -> Json<Vec<StandardRecord>> {
    let results = filter_records(
        &dataset.records,
        &params.query,
        &params.section,
        &params.source,
    );

    tracing::debug!(
        "Returning {} results for query='{}', section='{}', source='{}'",
        results.len(),
        params.query,
        params.section,
        params.source
    );

    Json(results)
}

/// `GET /api/filters`
///
/// Returns the distinct section and source values for the dropdowns.
pub async fn handle_get_filters(
    Extension(dataset): Extension<Arc<Dataset>>,
) -> Json<FilterOptions> {
    Json(FilterOptions {
        sections: dataset.sections.clone(),
        sources: dataset.sources.clone(),
    })
}
