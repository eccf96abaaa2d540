use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ProductSummary {
    pub id: String,
    pub name: String,
    pub url: String,
    pub store_count: usize,
    pub in_stock: bool,
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<ProductSummary>>>, ApiError> {
    let Some(catalog) = state.catalog().await else {
        return Err(ApiError::new(
            req_id.0,
            "catalog_loading",
            "catalog is still loading; retry shortly",
        ));
    };

    let data = catalog
        .products()
        .map(|product| ProductSummary {
            id: product.id.clone(),
            name: product.name.clone(),
            url: product.url.clone(),
            store_count: product.stores.len(),
            in_stock: !product.is_out_of_stock(),
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
