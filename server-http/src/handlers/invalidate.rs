use crate::state::AppState;
use axum::{extract::State, http::StatusCode};
use tracing::info;

/// POST /api/invalidate
///
/// Triggers tag-based invalidation for quote reads. The rate-limit condition
/// is distinguishable to clients as 429; everything else is a generic 500.
pub async fn invalidate_cache(State(state): State<AppState>) -> Result<&'static str, StatusCode> {
    info!("POST /api/invalidate");

    match state.quotes.invalidate().await {
        Ok(()) => Ok("Cache invalidated"),
        Err(shared::Error::RateLimited) => Err(StatusCode::TOO_MANY_REQUESTS),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
