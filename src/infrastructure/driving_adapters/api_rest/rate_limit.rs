//! Per-IP Rate Limiting
//!
//! Wraps a router in a tower_governor layer keyed by the peer address. The
//! server must be served with `into_make_service_with_connect_info::<SocketAddr>()`.

use std::sync::Arc;

use axum::Router;
use config::ConfigError;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::GovernorLayer;

use crate::infrastructure::driven_adapters::config::RateLimitConfig;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Interval after which one request of the quota is replenished
fn replenish_interval_nanos(requests_per_second: u64) -> u64 {
    (NANOS_PER_SECOND / requests_per_second).max(1)
}

/// Apply rate limiting to `router`; a zero `requests_per_second` leaves it unchanged
///
/// # Errors
///
/// Returns `ConfigError::Message` if the quota cannot be built (zero burst size).
pub fn apply_rate_limit(router: Router, config: &RateLimitConfig) -> Result<Router, ConfigError> {
    if config.requests_per_second == 0 {
        return Ok(router);
    }

    let governor_config = GovernorConfigBuilder::default()
        .per_nanosecond(replenish_interval_nanos(config.requests_per_second))
        .burst_size(config.burst_size)
        .finish()
        .ok_or_else(|| ConfigError::Message("rate_limit: burst_size must be at least 1".to_string()))?;

    tracing::info!(
        requests_per_second = config.requests_per_second,
        burst_size = config.burst_size,
        "Rate limiting enabled"
    );

    Ok(router.layer(GovernorLayer {
        config: Arc::new(governor_config),
    }))
}
