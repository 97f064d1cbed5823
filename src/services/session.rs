// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training session lifecycle.
//!
//! Each operation applies one state-machine step to the session through
//! [`WorkoutStore::update_session`], so overlapping steps on the same session
//! see each other's writes and a finished session stays finished.

use crate::db::WorkoutStore;
use crate::error::{AppError, Result};
use crate::models::{
    NewTrainingSession, PerformedSet, SessionError, SessionProgress, TrainingSession,
    TrainingSessionExercise,
};
use crate::services::configuration::ConfigurationService;
use chrono::{DateTime, Utc};

fn session_not_found(session_id: u64, profile_id: u64) -> AppError {
    tracing::warn!(session_id, profile_id, "Session not found for profile");
    AppError::NotFound(format!("Session {} not found", session_id))
}

/// Session service for live workouts.
#[derive(Clone)]
pub struct SessionService<S> {
    store: S,
    configurations: ConfigurationService<S>,
}

impl<S: WorkoutStore> SessionService<S> {
    pub fn new(store: S) -> Self {
        Self {
            configurations: ConfigurationService::new(store.clone()),
            store,
        }
    }

    async fn owned_session(&self, session_id: u64, profile_id: u64) -> Result<TrainingSession> {
        self.store
            .find_session(session_id, profile_id)
            .await?
            .ok_or_else(|| session_not_found(session_id, profile_id))
    }

    /// Apply `step` atomically in the store.
    async fn mutate<F>(
        &self,
        session_id: u64,
        profile_id: u64,
        action: &str,
        step: F,
    ) -> Result<TrainingSession>
    where
        F: FnOnce(&mut TrainingSession) -> std::result::Result<(), SessionError> + Send,
    {
        let session = self
            .store
            .update_session(session_id, profile_id, |session| {
                step(session).map_err(|e| {
                    tracing::debug!(session_id, action, error = %e, "Session step rejected");
                    e
                })
            })
            .await?
            .ok_or_else(|| session_not_found(session_id, profile_id))?;

        tracing::info!(
            session_id,
            profile_id,
            action,
            status = %session.status,
            "Session updated"
        );
        Ok(session)
    }

    /// Start a workout from a week slot's current configuration.
    pub async fn start_session(
        &self,
        profile_id: u64,
        week_slot_id: u64,
        now: DateTime<Utc>,
    ) -> Result<TrainingSession> {
        let slot = self
            .configurations
            .owned_slot(week_slot_id, profile_id)
            .await?;
        if slot.is_rest_day {
            return Err(AppError::Validation(format!(
                "{} is a rest day",
                slot.day_name()
            )));
        }

        let exercises: Vec<TrainingSessionExercise> = self
            .configurations
            .resolve_exercises(&slot)
            .await?
            .into_iter()
            .map(|item| TrainingSessionExercise {
                exercise_id: item.exercise_id,
                exercise_name: item.exercise_name,
                exercise_image: item.exercise_image,
                order_in_session: item.order_index,
                sets_config: item.sets_config,
                performed_sets: Vec::new(),
                is_completed: false,
            })
            .collect();
        if exercises.is_empty() {
            return Err(AppError::Validation(
                "Week slot has no exercises to train".to_string(),
            ));
        }

        let session = self
            .store
            .create_session(NewTrainingSession {
                profile_id,
                routine_week_id: Some(slot.id),
                routine_name: slot.routine_name.clone().unwrap_or_default(),
                day_of_week: slot.day_of_week,
                day_name: slot.day_name().to_string(),
                exercises,
                notes: None,
                started_at: now,
            })
            .await?;

        tracing::info!(
            session_id = session.id,
            profile_id,
            week_slot_id,
            exercises = session.exercises.len(),
            "Training session started"
        );
        Ok(session)
    }

    pub async fn get_session(&self, session_id: u64, profile_id: u64) -> Result<TrainingSession> {
        self.owned_session(session_id, profile_id).await
    }

    pub async fn progress(
        &self,
        session_id: u64,
        profile_id: u64,
        now: DateTime<Utc>,
    ) -> Result<SessionProgress> {
        let session = self.owned_session(session_id, profile_id).await?;
        Ok(SessionProgress::from_session(&session, now))
    }

    pub async fn record_set(
        &self,
        session_id: u64,
        profile_id: u64,
        exercise_index: usize,
        set: PerformedSet,
        now: DateTime<Utc>,
    ) -> Result<TrainingSession> {
        self.mutate(session_id, profile_id, "record_set", |s| {
            s.record_set(exercise_index, set, now)
        })
        .await
    }

    pub async fn advance_to(
        &self,
        session_id: u64,
        profile_id: u64,
        exercise_index: usize,
        now: DateTime<Utc>,
    ) -> Result<TrainingSession> {
        self.mutate(session_id, profile_id, "advance", |s| {
            s.advance_to(exercise_index, now)
        })
        .await
    }

    pub async fn pause(
        &self,
        session_id: u64,
        profile_id: u64,
        now: DateTime<Utc>,
    ) -> Result<TrainingSession> {
        self.mutate(session_id, profile_id, "pause", |s| s.pause(now))
            .await
    }

    pub async fn resume(
        &self,
        session_id: u64,
        profile_id: u64,
        now: DateTime<Utc>,
    ) -> Result<TrainingSession> {
        self.mutate(session_id, profile_id, "resume", |s| s.resume(now))
            .await
    }

    pub async fn complete(
        &self,
        session_id: u64,
        profile_id: u64,
        now: DateTime<Utc>,
    ) -> Result<TrainingSession> {
        self.mutate(session_id, profile_id, "complete", |s| s.complete(now))
            .await
    }

    pub async fn cancel(
        &self,
        session_id: u64,
        profile_id: u64,
        now: DateTime<Utc>,
    ) -> Result<TrainingSession> {
        self.mutate(session_id, profile_id, "cancel", |s| s.cancel(now))
            .await
    }
}
