//! Name generation endpoints.

use std::time::Duration;

use axum::{Json, Router, extract::State, routing::post};
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use super::error::ApiError;
use crate::generator::{self, DEFAULT_BATCH_COUNT, MAX_BATCH_COUNT, NameRecord};

const MAX_DESCRIPTION_LEN: usize = 500;

#[derive(Clone)]
pub struct NamesState {
    /// Artificial latency applied before each response. Zero in tests.
    pub delay: Duration,
}

pub fn router(state: NamesState) -> Router {
    Router::new()
        .route("/", post(generate_name))
        .route("/batch", post(generate_batch))
        .with_state(state)
}

#[derive(Deserialize)]
struct GenerateRequest {
    description: String,
    /// Omitted means "new seed": the server substitutes current Unix millis.
    seed: Option<i64>,
}

#[derive(Deserialize)]
struct BatchRequest {
    description: String,
    seed: Option<i64>,
    count: Option<u32>,
}

fn validate_description(description: &str) -> Result<(), ApiError> {
    if description.trim().is_empty() {
        return Err(ApiError::bad_request("Description cannot be empty"));
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ApiError::bad_request(format!(
            "Description cannot be longer than {} characters",
            MAX_DESCRIPTION_LEN
        )));
    }
    Ok(())
}

fn resolve_seed(seed: Option<i64>) -> i64 {
    seed.unwrap_or_else(|| Utc::now().timestamp_millis())
}

async fn generate_name(
    State(state): State<NamesState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<NameRecord>, ApiError> {
    validate_description(&payload.description)?;

    let seed = resolve_seed(payload.seed);
    debug!(seed, "Generating name");

    simulate_latency(state.delay).await;
    Ok(Json(generator::generate(&payload.description, seed)))
}

async fn generate_batch(
    State(state): State<NamesState>,
    Json(payload): Json<BatchRequest>,
) -> Result<Json<Vec<NameRecord>>, ApiError> {
    validate_description(&payload.description)?;

    let count = payload.count.unwrap_or(DEFAULT_BATCH_COUNT);
    if count == 0 || count > MAX_BATCH_COUNT {
        return Err(ApiError::bad_request(format!(
            "Count must be between 1 and {}",
            MAX_BATCH_COUNT
        )));
    }

    let seed = resolve_seed(payload.seed);
    debug!(seed, count, "Generating name batch");

    simulate_latency(state.delay).await;
    Ok(Json(generator::generate_batch(
        &payload.description,
        seed,
        count,
    )))
}

/// Single suspension point for the configured artificial latency. Carries no
/// business meaning and defaults to zero.
async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
