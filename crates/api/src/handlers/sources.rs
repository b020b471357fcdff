use crate::{
    dto::{OverallStatusResponse, RefreshResponse, SourceStatusResponse},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sourcewatch_application::use_cases::RefreshOutcome;
use sourcewatch_domain::DomainError;
use tracing::{debug, error, instrument};

#[instrument(skip(state), name = "api_get_sources")]
pub async fn get_sources(State(state): State<AppState>) -> Json<Vec<SourceStatusResponse>> {
    let statuses: Vec<SourceStatusResponse> = state
        .get_statuses
        .execute()
        .into_iter()
        .map(SourceStatusResponse::from)
        .collect();

    debug!(count = statuses.len(), "Source statuses retrieved");
    Json(statuses)
}

#[instrument(skip(state), name = "api_get_overall_status")]
pub async fn get_overall_status(State(state): State<AppState>) -> Json<OverallStatusResponse> {
    Json(state.get_overall.execute().into())
}

#[instrument(skip(state), name = "api_refresh_sources")]
pub async fn refresh_sources(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, (StatusCode, String)> {
    match state.refresh_all.execute(&state.shutdown).await {
        RefreshOutcome::Completed { probed } => {
            debug!(probed, "Manual refresh completed");
            Ok(Json(RefreshResponse {
                probed,
                overall: state.get_overall.execute().into(),
                sources: state
                    .get_statuses
                    .execute()
                    .into_iter()
                    .map(SourceStatusResponse::from)
                    .collect(),
            }))
        }
        RefreshOutcome::Skipped => Err((
            StatusCode::CONFLICT,
            "Refresh already in progress".to_string(),
        )),
    }
}

#[instrument(skip(state), name = "api_retry_source")]
pub async fn retry_source(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SourceStatusResponse>, (StatusCode, String)> {
    match state.check_source.execute(&id, &state.shutdown).await {
        Ok(status) => Ok(Json(status.into())),
        Err(DomainError::SourceNotFound(id)) => Err((
            StatusCode::NOT_FOUND,
            format!("Data source {} not found", id),
        )),
        Err(e) => {
            error!(error = %e, "Failed to retry data source");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
