// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived progress metrics for a training session.
//!
//! Computed on read from the session document; nothing here is stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::session::{SessionStatus, TrainingSession};

/// Completion counts and elapsed time for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProgress {
    pub total_exercises: usize,
    pub completed_exercises: usize,
    /// Planned sets across all exercises
    pub total_sets: usize,
    /// Performed sets across all exercises
    pub completed_sets: usize,
    pub session_duration_minutes: i64,
}

impl SessionProgress {
    /// Derive progress as of `now`.
    ///
    /// An active session measures up to `now`; any other status measures up to
    /// `last_activity`. Negative spans from clock skew clamp to zero.
    pub fn from_session(session: &TrainingSession, now: DateTime<Utc>) -> Self {
        let end = if session.status == SessionStatus::Active {
            now
        } else {
            session.last_activity
        };

        Self {
            total_exercises: session.exercises.len(),
            completed_exercises: session.exercises.iter().filter(|e| e.is_completed).count(),
            total_sets: session.exercises.iter().map(|e| e.sets_config.len()).sum(),
            completed_sets: session
                .exercises
                .iter()
                .map(|e| e.performed_sets.len())
                .sum(),
            session_duration_minutes: (end - session.start_time).num_minutes().max(0),
        }
    }
}
