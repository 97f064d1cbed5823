// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tracing subscriber setup.

use crate::config::{Config, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "routine_planner=debug,info";

fn env_filter(config: &Config) -> EnvFilter {
    let directives = config.log_filter.as_deref().unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(directives).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?}: {}; using default", directives, e);
        EnvFilter::new(DEFAULT_FILTER)
    })
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed (e.g. by another test).
pub fn init_logging(config: &Config) -> bool {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
    };

    result.is_ok()
}
