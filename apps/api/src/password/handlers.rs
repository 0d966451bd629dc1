//! Axum route handlers for the Password API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::password::GeneratedPassword;
use crate::password::generator::generate_password;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    /// Clamped into the configured range; the configured default when absent.
    pub length: Option<usize>,
}

/// POST /api/v1/passwords/generate
///
/// Generates one mnemonic password. Headline failures fall back to a
/// synthetic sentence, so this only fails on invalid input or internal errors.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GeneratedPassword>, AppError> {
    if request.length == Some(0) {
        return Err(AppError::Validation(
            "length must be a positive integer".to_string(),
        ));
    }

    let generated = generate_password(
        state.headlines.as_ref(),
        &state.config.policy,
        request.length,
    )
    .await?;

    Ok(Json(generated))
}
