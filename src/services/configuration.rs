// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Week slot configuration service.
//!
//! Handles the core workflow:
//! 1. Resolve the slot under the caller's profile (missing and foreign are both NotFound)
//! 2. Return the saved configuration, or a template from the slot's training day
//! 3. Replace the configuration wholesale on update
//!
//! Updates are last-writer-wins: there is no version check, so two editors of
//! the same slot overwrite each other. Clients re-fetch before editing.

use crate::db::WorkoutStore;
use crate::error::{AppError, Result};
use crate::models::{
    ExerciseConfigItem, SetConfig, SlotAssignment, SlotHeader, TrainingDayExercise, WeekSlot,
    WeekSlotSummary,
};
use crate::services::template::build_default_configuration;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

const MAX_NOTES_LEN: u64 = 1000;
const MAX_ROUTINE_NAME_LEN: u64 = 100;
const MAX_SETS_PER_EXERCISE: u64 = 50;

/// A slot's configuration as shown to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SlotConfiguration {
    pub routine_week: SlotHeader,
    pub exercises: Vec<ExerciseConfigItem>,
}

/// Raw update request as received from a client.
///
/// `exercises` stays untyped until validated so a malformed payload is
/// reported as a validation failure rather than a decode error upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateConfigurationRequest {
    #[serde(default)]
    pub profile_id: Option<u64>,
    #[serde(default)]
    pub exercises: serde_json::Value,
    #[serde(default)]
    pub routine_name: Option<String>,
}

/// One submitted exercise.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExerciseConfigInput {
    #[validate(range(min = 1))]
    pub exercise_id: u64,
    #[serde(default)]
    pub exercise_name: Option<String>,
    #[serde(default)]
    pub exercise_image: Option<String>,
    #[serde(default)]
    #[validate(length(max = MAX_SETS_PER_EXERCISE))]
    pub sets_config: Vec<SetConfig>,
    #[serde(default)]
    #[validate(length(max = MAX_NOTES_LEN))]
    pub notes: Option<String>,
    #[serde(default)]
    pub training_day_id: Option<u64>,
}

#[derive(Debug, Validate)]
struct ValidatedExercises {
    #[validate(nested)]
    items: Vec<ExerciseConfigInput>,
    #[validate(length(max = MAX_ROUTINE_NAME_LEN))]
    routine_name: Option<String>,
}

fn parse_exercises(
    exercises: serde_json::Value,
    routine_name: Option<String>,
) -> Result<ValidatedExercises> {
    if !exercises.is_array() {
        return Err(AppError::Validation("exercises must be a list".to_string()));
    }
    let items: Vec<ExerciseConfigInput> = serde_json::from_value(exercises)
        .map_err(|e| AppError::Validation(format!("Malformed exercise entry: {}", e)))?;

    let parsed = ValidatedExercises {
        items,
        routine_name,
    };
    parsed.validate()?;
    Ok(parsed)
}

/// Fill in display metadata the client left out and fix up ordering.
fn normalize(
    items: Vec<ExerciseConfigInput>,
    known: &[(u64, String, Option<String>)],
) -> Vec<ExerciseConfigItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(position, input)| {
            let fallback = known.iter().find(|(id, _, _)| *id == input.exercise_id);
            let exercise_name = input
                .exercise_name
                .filter(|name| !name.trim().is_empty())
                .or_else(|| fallback.map(|(_, name, _)| name.clone()))
                .unwrap_or_default();
            let exercise_image = input
                .exercise_image
                .or_else(|| fallback.and_then(|(_, _, image)| image.clone()));

            ExerciseConfigItem {
                exercise_id: input.exercise_id,
                exercise_name,
                exercise_image,
                order_index: position as u32,
                sets_config: input.sets_config,
                notes: input.notes.unwrap_or_default(),
            }
        })
        .collect()
}

/// Configuration service for week slots.
#[derive(Clone)]
pub struct ConfigurationService<S> {
    store: S,
}

impl<S: WorkoutStore> ConfigurationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub(crate) async fn owned_slot(
        &self,
        week_slot_id: u64,
        profile_id: u64,
    ) -> Result<WeekSlot> {
        self.store
            .find_week_slot(week_slot_id, profile_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(week_slot_id, profile_id, "Week slot not found for profile");
                AppError::NotFound(format!("Week slot {} not found", week_slot_id))
            })
    }

    async fn training_day_exercises(&self, slot: &WeekSlot) -> Result<Vec<TrainingDayExercise>> {
        let Some(training_day_id) = slot.training_day_id else {
            return Ok(Vec::new());
        };

        match self
            .store
            .find_training_day(training_day_id, slot.profile_id)
            .await?
        {
            Some(day) => Ok(day.exercises),
            None => {
                tracing::warn!(
                    week_slot_id = slot.id,
                    training_day_id,
                    "Slot references a missing training day"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Exercises for a slot: the saved list, or the training-day template.
    pub(crate) async fn resolve_exercises(
        &self,
        slot: &WeekSlot,
    ) -> Result<Vec<ExerciseConfigItem>> {
        if let Some(saved) = slot.saved_configuration() {
            return Ok(saved.to_vec());
        }
        let template = self.training_day_exercises(slot).await?;
        Ok(build_default_configuration(&template))
    }

    /// Get the configuration for a slot owned by `profile_id`.
    pub async fn get_configuration(
        &self,
        week_slot_id: u64,
        profile_id: u64,
    ) -> Result<SlotConfiguration> {
        let slot = self.owned_slot(week_slot_id, profile_id).await?;
        let exercises = self.resolve_exercises(&slot).await?;

        tracing::debug!(
            week_slot_id,
            profile_id,
            saved = slot.saved_configuration().is_some(),
            count = exercises.len(),
            "Loaded slot configuration"
        );

        Ok(SlotConfiguration {
            routine_week: SlotHeader::from(&slot),
            exercises,
        })
    }

    /// Replace the slot's configuration with `request.exercises`.
    ///
    /// Returns the list exactly as persisted.
    pub async fn update_configuration(
        &self,
        week_slot_id: u64,
        request: UpdateConfigurationRequest,
    ) -> Result<Vec<ExerciseConfigItem>> {
        let profile_id = request
            .profile_id
            .ok_or_else(|| AppError::Validation("profile_id is required".to_string()))?;
        let parsed = parse_exercises(request.exercises, request.routine_name)?;

        let mut slot = self.owned_slot(week_slot_id, profile_id).await?;
        if slot.is_rest_day {
            return Err(AppError::Validation(format!(
                "{} is a rest day and takes no configuration",
                slot.day_name()
            )));
        }

        if let Some(training_day_id) = parsed.items.iter().find_map(|i| i.training_day_id) {
            slot.training_day_id = Some(training_day_id);
        }

        // Metadata sources for items submitted without name/image
        let mut known: Vec<(u64, String, Option<String>)> = self
            .training_day_exercises(&slot)
            .await?
            .into_iter()
            .map(|e| (e.exercise_id, e.exercise_name, e.exercise_image))
            .collect();
        known.extend(
            slot.exercises_config
                .iter()
                .flatten()
                .map(|e| (e.exercise_id, e.exercise_name.clone(), e.exercise_image.clone())),
        );
        if let Some(name) = parsed
            .routine_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
        {
            slot.routine_name = Some(name);
        }

        let exercises = normalize(parsed.items, &known);
        slot.exercises_config = Some(exercises.clone());
        self.store.save_week_slot(&slot).await?;

        tracing::info!(
            week_slot_id,
            profile_id,
            count = exercises.len(),
            "Replaced slot configuration"
        );

        Ok(exercises)
    }

    /// Reset the slot's routine, training day and configuration.
    ///
    /// Returns rows affected; 0 is not an error.
    pub async fn delete_configuration(&self, week_slot_id: u64, profile_id: u64) -> Result<u64> {
        let affected = self
            .store
            .clear_week_slot_configuration(week_slot_id, profile_id)
            .await?;

        tracing::info!(week_slot_id, profile_id, affected, "Cleared slot configuration");
        Ok(affected)
    }

    /// The profile's week, ordered Domingo through Sábado.
    pub async fn week_schedule(&self, profile_id: u64) -> Result<Vec<WeekSlotSummary>> {
        let mut slots = self.store.list_week_slots(profile_id).await?;
        slots.sort_by_key(|s| (s.day_of_week, s.id));

        tracing::debug!(profile_id, count = slots.len(), "Loaded week schedule");
        Ok(slots.iter().map(WeekSlotSummary::from).collect())
    }

    /// Assign a rest day or routine to a slot.
    pub async fn assign_slot(
        &self,
        week_slot_id: u64,
        profile_id: u64,
        assignment: SlotAssignment,
    ) -> Result<WeekSlotSummary> {
        if let SlotAssignment::Routine { routine_name, .. } = &assignment {
            if routine_name.trim().is_empty() {
                return Err(AppError::Validation("routine_name is required".to_string()));
            }
        }

        let mut slot = self.owned_slot(week_slot_id, profile_id).await?;
        let reset = slot.assign(&assignment);
        self.store.save_week_slot(&slot).await?;

        tracing::info!(
            week_slot_id,
            profile_id,
            rest_day = slot.is_rest_day,
            configuration_reset = reset,
            "Assigned week slot"
        );
        Ok(WeekSlotSummary::from(&slot))
    }
}
