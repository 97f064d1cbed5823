// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Live training session model and its status state machine.
//!
//! ```text
//! active <-> paused
//!   |          |
//!   +--> completed / cancelled (terminal)
//! ```
//!
//! Every mutation takes the caller's "now" and stamps `last_activity`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::exercise_config::{DsDetail, PartialDetail, RpDetail, SetConfig};

/// Session status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Paused => "paused",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Cancelled)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: SessionStatus) -> bool {
        use SessionStatus::*;
        matches!(
            (self, next),
            (Active, Paused)
                | (Paused, Active)
                | (Active | Paused, Completed)
                | (Active | Paused, Cancelled)
        )
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected session mutation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("Cannot move session from {from} to {to}")]
    InvalidTransition {
        from: SessionStatus,
        to: SessionStatus,
    },

    #[error("Session is {0}, not active")]
    NotActive(SessionStatus),

    #[error("Exercise index {index} out of range for {len} exercises")]
    ExerciseOutOfRange { index: usize, len: usize },

    #[error("Cannot move back from exercise {current} to {requested}")]
    ExerciseRegression { current: usize, requested: usize },

    #[error("Set {set_number} is not one of the {planned} planned sets")]
    InvalidSetNumber { set_number: u32, planned: usize },
}

/// One completed set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformedSet {
    /// 1-based, unique within an exercise
    pub set_number: u32,
    #[serde(default)]
    pub reps: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub rir: Option<String>,
    #[serde(default)]
    pub rest_pause_details: Option<Vec<RpDetail>>,
    #[serde(default)]
    pub drop_set_details: Option<Vec<DsDetail>>,
    #[serde(default)]
    pub partials_details: Option<PartialDetail>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// An exercise as planned and performed within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSessionExercise {
    pub exercise_id: u64,
    pub exercise_name: String,
    #[serde(default)]
    pub exercise_image: Option<String>,
    pub order_in_session: u32,
    /// Planned sets
    #[serde(default)]
    pub sets_config: Vec<SetConfig>,
    #[serde(default)]
    pub performed_sets: Vec<PerformedSet>,
    #[serde(default)]
    pub is_completed: bool,
}

impl TrainingSessionExercise {
    fn record(&mut self, set: PerformedSet) {
        match self
            .performed_sets
            .iter_mut()
            .find(|existing| existing.set_number == set.set_number)
        {
            Some(existing) => *existing = set,
            None => self.performed_sets.push(set),
        }

        let planned = self.sets_config.len() as u32;
        if planned > 0
            && (1..=planned).all(|n| self.performed_sets.iter().any(|p| p.set_number == n))
        {
            self.is_completed = true;
        }
    }
}

/// Fields needed to open a new session; the store assigns the ID.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrainingSession {
    pub profile_id: u64,
    pub routine_week_id: Option<u64>,
    pub routine_name: String,
    pub day_of_week: i64,
    pub day_name: String,
    pub exercises: Vec<TrainingSessionExercise>,
    pub notes: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl NewTrainingSession {
    pub fn into_session(self, id: u64) -> TrainingSession {
        TrainingSession {
            id,
            profile_id: self.profile_id,
            routine_week_id: self.routine_week_id,
            routine_name: self.routine_name,
            day_of_week: self.day_of_week,
            day_name: self.day_name,
            status: SessionStatus::Active,
            current_exercise_index: 0,
            start_time: self.started_at,
            last_activity: self.started_at,
            exercises: self.exercises,
            notes: self.notes,
        }
    }
}

/// A workout in progress (or finished).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Session ID (also used as document ID)
    pub id: u64,
    pub profile_id: u64,
    #[serde(default)]
    pub routine_week_id: Option<u64>,
    #[serde(default)]
    pub routine_name: String,
    pub day_of_week: i64,
    pub day_name: String,
    pub status: SessionStatus,
    #[serde(default)]
    pub current_exercise_index: usize,
    #[serde(with = "crate::time_utils::rfc3339_utc")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "crate::time_utils::rfc3339_utc")]
    pub last_activity: DateTime<Utc>,
    #[serde(default)]
    pub exercises: Vec<TrainingSessionExercise>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TrainingSession {
    fn transition(&mut self, next: SessionStatus, now: DateTime<Utc>) -> Result<(), SessionError> {
        if !self.status.can_transition_to(next) {
            return Err(SessionError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.last_activity = now;
        Ok(())
    }

    fn require_active(&self) -> Result<(), SessionError> {
        if self.status != SessionStatus::Active {
            return Err(SessionError::NotActive(self.status));
        }
        Ok(())
    }

    pub fn pause(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.transition(SessionStatus::Paused, now)
    }

    pub fn resume(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.transition(SessionStatus::Active, now)
    }

    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.transition(SessionStatus::Completed, now)
    }

    pub fn cancel(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.transition(SessionStatus::Cancelled, now)
    }

    /// Record a completed set on the exercise at `exercise_index`.
    ///
    /// `set_number` must name one of the exercise's planned sets. A set with
    /// an existing `set_number` replaces the earlier entry.
    pub fn record_set(
        &mut self,
        exercise_index: usize,
        set: PerformedSet,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.require_active()?;
        let len = self.exercises.len();
        let exercise = self
            .exercises
            .get_mut(exercise_index)
            .ok_or(SessionError::ExerciseOutOfRange {
                index: exercise_index,
                len,
            })?;

        let planned = exercise.sets_config.len();
        if set.set_number == 0 || set.set_number as usize > planned {
            return Err(SessionError::InvalidSetNumber {
                set_number: set.set_number,
                planned,
            });
        }

        exercise.record(set);
        self.last_activity = now;
        Ok(())
    }

    /// Move the cursor forward to `index`. Moving to the current index is a no-op.
    pub fn advance_to(&mut self, index: usize, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.require_active()?;
        let len = self.exercises.len();
        if index >= len {
            return Err(SessionError::ExerciseOutOfRange { index, len });
        }
        if index < self.current_exercise_index {
            return Err(SessionError::ExerciseRegression {
                current: self.current_exercise_index,
                requested: index,
            });
        }
        self.current_exercise_index = index;
        self.last_activity = now;
        Ok(())
    }
}
