mod config;
mod error;
mod names;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, middleware};

use crate::rate_limit::{RateLimitConfig, rate_limit_generate};

pub(crate) use error::ApiError;

/// Create the API router.
pub fn create_api_router(delay: Duration, rate_limit: bool) -> Router {
    let names_state = names::NamesState { delay };
    let config_state = config::ConfigState { delay };

    let mut names_router = names::router(names_state);
    if rate_limit {
        let limits = Arc::new(RateLimitConfig::new());
        names_router = names_router.layer(middleware::from_fn_with_state(
            limits,
            rate_limit_generate,
        ));
    }

    Router::new()
        .nest("/names", names_router)
        .nest("/config", config::router(config_state))
}
