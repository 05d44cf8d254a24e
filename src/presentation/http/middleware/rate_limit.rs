// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

const REPLENISH_PER_SECOND: u64 = 10;
const BURST_SIZE: u32 = 20;

/// Per-client limiter shared by every router built in this process. Keyed on the
/// forwarded or peer IP, so the server must be served with connect info.
pub fn rate_limit_layer() -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body> {
    static RATE_LIMITER: OnceLock<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> =
        OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REPLENISH_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("non-zero rate limit constants");

            GovernorLayer::new(config)
        })
        .clone()
}
