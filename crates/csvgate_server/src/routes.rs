//! Upload and health routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    routing::{get, post},
};
use csvgate_core::{DatasetValidator, ValidationResult};
use csvgate_loader::{has_csv_extension, parse_bytes};
use csvgate_validator::CsvValidator;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Message returned for uploads without a `.csv` file name.
pub const INVALID_FILE_TYPE_MESSAGE: &str = "Invalid file type. Please upload a CSV file.";

/// Message returned when the multipart body carries no file.
pub const NO_FILE_MESSAGE: &str = "No file provided.";

// ==================
// Shared State
// ==================

/// Validation state shared across handlers
pub struct ValidateState {
    pub validator: Box<dyn DatasetValidator>,
}

impl ValidateState {
    pub fn new(validator: Box<dyn DatasetValidator>) -> Self {
        Self { validator }
    }
}

impl Default for ValidateState {
    fn default() -> Self {
        Self::new(Box::new(CsvValidator::new()))
    }
}

// ==================
// Response Types
// ==================

/// Body of every non-200 response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}

// ==================
// Routes
// ==================

/// Create the upload validation routes
pub fn validate_routes(state: Arc<ValidateState>) -> Router {
    Router::new()
        .route("/validate", post(validate_handler))
        .with_state(state)
}

/// Create the health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

// ==================
// Handlers
// ==================

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Validates the first uploaded file of a multipart body.
///
/// Status codes:
/// - 400 when no file is present or its name does not end in `.csv`
/// - 500 when the file cannot be loaded as CSV
/// - 200 with the validation result otherwise, pass or fail
async fn validate_handler(
    State(state): State<Arc<ValidateState>>,
    mut multipart: Multipart,
) -> Result<Json<ValidationResult>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        if !has_csv_extension(&file_name) {
            warn!("Rejected upload with invalid file type: {}", file_name);
            return Err(api_error(StatusCode::BAD_REQUEST, INVALID_FILE_TYPE_MESSAGE));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;
        info!("Validating upload {} ({} bytes)", file_name, data.len());

        let dataset = parse_bytes(&data).map_err(|e| {
            warn!("Failed to load {}: {}", file_name, e);
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error processing file: {e}"),
            )
        })?;

        let result = state.validator.validate(&dataset);
        info!(
            "Upload {}: {} ({} errors)",
            file_name,
            result.status,
            result.errors.len()
        );
        return Ok(Json(result));
    }

    Err(api_error(StatusCode::BAD_REQUEST, NO_FILE_MESSAGE))
}
