use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::models::{validate_stack_request, ErrorKind, ErrorResponse, StackResponse};
use crate::stack::StackService;

/// Map an error kind to its HTTP status.
///
/// Validation failures are the caller's fault; everything else is ours and
/// gets logged before going out sanitized.
fn error_status(error: &ErrorResponse) -> StatusCode {
    match error.error {
        ErrorKind::InvalidInput | ErrorKind::YearOutOfRange => StatusCode::BAD_REQUEST,
        ErrorKind::UnsupportedCombination => StatusCode::BAD_REQUEST,
        ErrorKind::InternalError => {
            tracing::error!("internal error: {}", error.message);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn reject(error: ErrorResponse) -> (StatusCode, Json<ErrorResponse>) {
    (error_status(&error), Json(error))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `POST /api/generate` — validate the body, assemble the stack.
///
/// The body is taken as raw bytes so a non-JSON payload becomes our own
/// `invalid_input` document instead of the framework's rejection.
pub async fn generate(
    State(service): State<StackService>,
    body: Bytes,
) -> Result<Json<StackResponse>, (StatusCode, Json<ErrorResponse>)> {
    let value: Value = serde_json::from_slice(&body)
        .map_err(|_| reject(ErrorResponse::invalid_input("Request body must be valid JSON")))?;

    let request = validate_stack_request(&value).map_err(reject)?;

    tracing::debug!(
        language = request.language.as_str(),
        framework = request.framework.as_str(),
        year = request.year,
        "generating stack"
    );

    Ok(Json(service.assemble(&request).await))
}
