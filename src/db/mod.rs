// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence layer.
//!
//! Services depend on the [`WorkoutStore`] trait; [`FirestoreDb`] backs
//! production and [`MemoryStore`] backs tests and embedded use.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::{NewTrainingSession, SessionError, TrainingDay, TrainingSession, WeekSlot};
use std::future::Future;

/// Collection names as constants.
pub mod collections {
    pub const WEEK_SLOTS: &str = "week_slots";
    pub const TRAINING_DAYS: &str = "training_days";
    pub const TRAINING_SESSIONS: &str = "training_sessions";
}

/// Storage operations needed by the services.
///
/// Lookups of owned data take the caller's `profile_id`; a row owned by a
/// different profile is reported as `None`, exactly like a missing row.
/// Implementations do not retry.
pub trait WorkoutStore: Clone + Send + Sync + 'static {
    fn find_week_slot(
        &self,
        id: u64,
        profile_id: u64,
    ) -> impl Future<Output = Result<Option<WeekSlot>>> + Send;

    /// All slots of a profile, in no particular order.
    fn list_week_slots(&self, profile_id: u64)
        -> impl Future<Output = Result<Vec<WeekSlot>>> + Send;

    /// Insert or fully overwrite a slot.
    fn save_week_slot(&self, slot: &WeekSlot) -> impl Future<Output = Result<()>> + Send;

    /// Reset routine, training day and saved configuration.
    ///
    /// Returns the number of rows affected (0 if no matching slot).
    fn clear_week_slot_configuration(
        &self,
        id: u64,
        profile_id: u64,
    ) -> impl Future<Output = Result<u64>> + Send;

    fn find_training_day(
        &self,
        id: u64,
        profile_id: u64,
    ) -> impl Future<Output = Result<Option<TrainingDay>>> + Send;

    fn save_training_day(&self, day: &TrainingDay) -> impl Future<Output = Result<()>> + Send;

    /// Persist a new session, assigning its ID. Never overwrites an existing one.
    fn create_session(
        &self,
        session: NewTrainingSession,
    ) -> impl Future<Output = Result<TrainingSession>> + Send;

    fn find_session(
        &self,
        id: u64,
        profile_id: u64,
    ) -> impl Future<Output = Result<Option<TrainingSession>>> + Send;

    /// Apply `step` to the stored session and write the result back.
    ///
    /// Read, step and write happen atomically with respect to other updates
    /// of the same session. Returns `Ok(None)` if no session `id` belongs to
    /// `profile_id`. A rejected step leaves the stored session untouched.
    fn update_session<F>(
        &self,
        id: u64,
        profile_id: u64,
        step: F,
    ) -> impl Future<Output = Result<Option<TrainingSession>>> + Send
    where
        F: FnOnce(&mut TrainingSession) -> std::result::Result<(), SessionError> + Send;
}
