//! Rate limiting for generation endpoints.
//!
//! Token bucket per client IP. Generation itself is cheap, but the artificial
//! response delay holds a task open per request, so unbounded request rates
//! from one client are worth refusing early.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{Quota, RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};
use std::{net::SocketAddr, num::NonZeroU32, sync::Arc};

use crate::api::ApiError;

/// Per-IP rate limiter for the generation endpoints.
pub type IpLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

const GENERATE_PER_SEC: u32 = 10;

/// Rate limiting configuration for generation endpoints.
pub struct RateLimitConfig {
    /// Per-IP limiter for name generation (10 requests per second)
    pub generate: IpLimiter,
}

impl RateLimitConfig {
    pub fn new() -> Self {
        Self {
            generate: RateLimiter::keyed(Quota::per_second(
                NonZeroU32::new(GENERATE_PER_SEC).unwrap(),
            )),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Middleware for rate limiting generation requests.
pub async fn rate_limit_generate(
    State(config): State<Arc<RateLimitConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request);
    match config.generate.check_key(&key) {
        Ok(_) => next.run(request).await,
        Err(_) => ApiError::too_many_requests("Too many requests. Please try again later.")
            .into_response(),
    }
}

/// Client key for limiter buckets: X-Forwarded-For first (reverse proxy),
/// then the connecting socket address, then one shared bucket.
fn client_key(request: &Request) -> String {
    if let Some(value) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(ip) = value.split(',').next().map(str::trim) {
            if !ip.is_empty() {
                return ip.to_string();
            }
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
