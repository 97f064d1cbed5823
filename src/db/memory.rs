// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process store backed by concurrent maps.
//!
//! Clones share the same underlying maps.

use crate::db::WorkoutStore;
use crate::error::Result;
use crate::models::{NewTrainingSession, SessionError, TrainingDay, TrainingSession, WeekSlot};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MemoryStore {
    week_slots: Arc<DashMap<u64, WeekSlot>>,
    training_days: Arc<DashMap<u64, TrainingDay>>,
    sessions: Arc<DashMap<u64, TrainingSession>>,
    next_session_id: Arc<AtomicU64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn owned<T: Clone>(map: &DashMap<u64, T>, id: u64, is_owner: impl Fn(&T) -> bool) -> Option<T> {
    map.get(&id)
        .filter(|entry| is_owner(entry.value()))
        .map(|entry| entry.value().clone())
}

impl WorkoutStore for MemoryStore {
    async fn find_week_slot(&self, id: u64, profile_id: u64) -> Result<Option<WeekSlot>> {
        Ok(owned(&self.week_slots, id, |s| s.profile_id == profile_id))
    }

    async fn list_week_slots(&self, profile_id: u64) -> Result<Vec<WeekSlot>> {
        Ok(self
            .week_slots
            .iter()
            .filter(|entry| entry.profile_id == profile_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn save_week_slot(&self, slot: &WeekSlot) -> Result<()> {
        self.week_slots.insert(slot.id, slot.clone());
        Ok(())
    }

    async fn clear_week_slot_configuration(&self, id: u64, profile_id: u64) -> Result<u64> {
        match self.week_slots.get_mut(&id) {
            Some(mut slot) if slot.profile_id == profile_id => {
                slot.routine_id = None;
                slot.training_day_id = None;
                slot.exercises_config = None;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn find_training_day(&self, id: u64, profile_id: u64) -> Result<Option<TrainingDay>> {
        Ok(owned(&self.training_days, id, |d| d.profile_id == profile_id))
    }

    async fn save_training_day(&self, day: &TrainingDay) -> Result<()> {
        self.training_days.insert(day.id, day.clone());
        Ok(())
    }

    async fn create_session(&self, session: NewTrainingSession) -> Result<TrainingSession> {
        let id = self.next_session_id.fetch_add(1, Ordering::Relaxed) + 1;
        let session = session.into_session(id);
        self.sessions.insert(id, session.clone());
        Ok(session)
    }

    async fn find_session(&self, id: u64, profile_id: u64) -> Result<Option<TrainingSession>> {
        Ok(owned(&self.sessions, id, |s| s.profile_id == profile_id))
    }

    async fn update_session<F>(
        &self,
        id: u64,
        profile_id: u64,
        step: F,
    ) -> Result<Option<TrainingSession>>
    where
        F: FnOnce(&mut TrainingSession) -> std::result::Result<(), SessionError> + Send,
    {
        // The entry stays write-locked until the updated session is stored
        let Some(mut entry) = self.sessions.get_mut(&id) else {
            return Ok(None);
        };
        if entry.profile_id != profile_id {
            return Ok(None);
        }

        let mut session = entry.value().clone();
        step(&mut session)?;
        *entry = session.clone();
        Ok(Some(session))
    }
}
