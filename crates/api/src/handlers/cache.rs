use crate::{
    dto::{CacheEntryResponse, CacheStatsResponse},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sourcewatch_application::events::ClearScope;
use sourcewatch_domain::DomainError;
use tracing::{debug, error, instrument};

#[instrument(skip(state), name = "api_get_cache_stats")]
pub async fn get_cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    debug!("Fetching cache statistics");
    Json(state.get_cache_stats.execute().await.into())
}

#[instrument(skip(state), name = "api_get_cache_entries")]
pub async fn get_cache_entries(State(state): State<AppState>) -> Json<Vec<CacheEntryResponse>> {
    Json(
        state
            .list_cache_entries
            .execute()
            .await
            .into_iter()
            .map(CacheEntryResponse::from)
            .collect(),
    )
}

#[instrument(skip(state), name = "api_clear_cache")]
pub async fn clear_cache(
    State(state): State<AppState>,
) -> Result<Json<CacheStatsResponse>, (StatusCode, String)> {
    clear(&state, ClearScope::All).await
}

#[instrument(skip(state), name = "api_clear_source_cache")]
pub async fn clear_source_cache(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CacheStatsResponse>, (StatusCode, String)> {
    clear(&state, ClearScope::Source(id)).await
}

async fn clear(
    state: &AppState,
    scope: ClearScope,
) -> Result<Json<CacheStatsResponse>, (StatusCode, String)> {
    match state.clear_cache.execute(scope).await {
        Ok(stats) => Ok(Json(stats.into())),
        Err(DomainError::SourceNotFound(id)) => Err((
            StatusCode::NOT_FOUND,
            format!("Data source {} not found", id),
        )),
        Err(e) => {
            error!(error = %e, "Failed to clear cache");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
