//! HTTP request handlers for the salary reporter API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Router,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::pipeline::ReportPipeline;

use super::request::ReportQuery;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /report endpoint.
///
/// Accepts the raw employee JSON array as the body and returns the rendered
/// report with the renderer's content type.
async fn report_handler(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing report request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid query string"
            );
            return error_response(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_query(rejection.body_text()),
            );
        }
    };

    let raw = match std::str::from_utf8(&body) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Body is not UTF-8");
            return error_response(
                StatusCode::BAD_REQUEST,
                ApiError::malformed_json(format!("Request body is not valid UTF-8: {}", err)),
            );
        }
    };

    let config = state.config().config();
    let format = query.format_or(config);
    let pipeline = ReportPipeline::new(query.pipeline_config_or(config));
    let renderer = config.renderer(format);

    match pipeline.render_with(raw, &*renderer) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                format = ?format,
                bytes = report.len(),
                "Report generated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, renderer.content_type())],
                report,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report generation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn error_response(status: StatusCode, error: ApiError) -> Response {
    ApiErrorResponse { status, error }.into_response()
}
