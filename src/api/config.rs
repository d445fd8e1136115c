//! Public configuration endpoint.

use std::time::Duration;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::generator::{DEFAULT_BATCH_COUNT, MAX_BATCH_COUNT};

/// Version embedded at compile time from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
pub struct ConfigState {
    pub delay: Duration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigResponse {
    delay_ms: u64,
    default_batch: u32,
    max_batch: u32,
    version: &'static str,
}

pub fn router(state: ConfigState) -> Router {
    Router::new().route("/", get(get_config)).with_state(state)
}

async fn get_config(State(state): State<ConfigState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        delay_ms: state.delay.as_millis() as u64,
        default_batch: DEFAULT_BATCH_COUNT,
        max_batch: MAX_BATCH_COUNT,
        version: VERSION,
    })
}
