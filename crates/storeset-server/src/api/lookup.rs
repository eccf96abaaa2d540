use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use storeset_query::{run_query, QueryReport};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct LookupParams {
    /// Semicolon-separated product tokens (ids, slugs, or URLs).
    q: Option<String>,
}

pub(super) async fn lookup(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<LookupParams>,
) -> Result<Json<ApiResponse<QueryReport>>, ApiError> {
    let Some(catalog) = state.catalog().await else {
        return Err(ApiError::new(
            req_id.0,
            "catalog_loading",
            "catalog is still loading; retry shortly",
        ));
    };

    let raw = params.q.unwrap_or_default();
    if raw.trim().is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "query parameter 'q' is required",
        ));
    }

    let report = run_query(&raw, &catalog);
    Ok(Json(ApiResponse {
        data: report,
        meta: ResponseMeta::new(req_id.0),
    }))
}
