// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Routine planner: weekly workout planning and live session tracking.
//!
//! This crate provides the core of a personal training planner: weekday
//! schedules, per-exercise set prescriptions with rest-pause, drop-set and
//! partial-rep techniques, and live training sessions.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod time_utils;

use config::Config;
use db::{FirestoreDb, WorkoutStore};
use services::{ConfigurationService, SessionService};

/// Shared application state.
pub struct AppState<S = FirestoreDb> {
    pub config: Config,
    pub configurations: ConfigurationService<S>,
    pub sessions: SessionService<S>,
}

impl<S: WorkoutStore> AppState<S> {
    pub fn new(config: Config, store: S) -> Self {
        Self {
            config,
            configurations: ConfigurationService::new(store.clone()),
            sessions: SessionService::new(store),
        }
    }
}

impl AppState<FirestoreDb> {
    /// Install logging and connect to Firestore.
    pub async fn connect(config: Config) -> error::Result<Self> {
        telemetry::init_logging(&config);
        tracing::info!(project = %config.gcp_project_id, "Starting routine planner");

        let db = FirestoreDb::new(&config.gcp_project_id).await?;
        Ok(Self::new(config, db))
    }
}
