use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared_http::api::{QuoteData, QuoteReadResponse, UpdateQuoteRequest};
use tracing::info;

/// GET /api/quote/{id}
///
/// The literal id `create` creates a record and reads it back through the
/// cached path; anything else is a cached lookup by numeric id. A missing
/// record is an empty read (`data: null`), not an error.
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuoteReadResponse>, StatusCode> {
    if id == "create" {
        info!("GET /api/quote/create");
        let read = state
            .quotes
            .create_and_get()
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        return Ok(Json(read.into()));
    }

    let id: i64 = id.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    info!("GET /api/quote/{}", id);

    let read = state
        .quotes
        .get_by_id(id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(read.into()))
}

/// PUT /api/quote/{id}
pub async fn update_quote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateQuoteRequest>,
) -> Result<Json<QuoteData>, StatusCode> {
    info!("PUT /api/quote/{}", id);

    // Store failures, including updates of a missing id, surface as the
    // framework's generic failure.
    let updated = state
        .quotes
        .update_by_id(id, req.quote)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(updated.into()))
}
