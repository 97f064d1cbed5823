// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Week slot and training-day models for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::exercise_config::ExerciseConfigItem;
use crate::models::weekday::day_id_to_name;

/// One weekday's assignment for one profile.
///
/// The day name is not stored; it is always derived from `day_of_week` so
/// the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSlot {
    /// Slot ID (also used as document ID)
    pub id: u64,
    /// Owning profile
    pub profile_id: u64,
    /// Day index, 1 (Domingo) through 7 (Sábado)
    pub day_of_week: i64,
    #[serde(default)]
    pub is_rest_day: bool,
    #[serde(default)]
    pub routine_id: Option<u64>,
    #[serde(default)]
    pub routine_name: Option<String>,
    #[serde(default)]
    pub training_day_id: Option<u64>,
    /// Saved configuration; `None` until the user first saves one
    #[serde(default)]
    pub exercises_config: Option<Vec<ExerciseConfigItem>>,
}

impl WeekSlot {
    pub fn day_name(&self) -> &'static str {
        day_id_to_name(self.day_of_week)
    }

    /// Saved configuration, if one exists and is non-empty.
    pub fn saved_configuration(&self) -> Option<&[ExerciseConfigItem]> {
        self.exercises_config
            .as_deref()
            .filter(|items| !items.is_empty())
    }

    /// Apply a new assignment.
    ///
    /// Returns `true` if anything changed. A changed assignment drops the saved
    /// configuration so the new training day's template applies.
    pub fn assign(&mut self, assignment: &SlotAssignment) -> bool {
        let (is_rest_day, routine_id, routine_name, training_day_id) = match assignment {
            SlotAssignment::Rest => (true, None, None, None),
            SlotAssignment::Routine {
                routine_id,
                routine_name,
                training_day_id,
            } => (
                false,
                Some(*routine_id),
                Some(routine_name.clone()),
                *training_day_id,
            ),
        };

        let changed = self.is_rest_day != is_rest_day
            || self.routine_id != routine_id
            || self.training_day_id != training_day_id;

        self.is_rest_day = is_rest_day;
        self.routine_id = routine_id;
        self.routine_name = routine_name;
        self.training_day_id = training_day_id;
        if changed {
            self.exercises_config = None;
        }
        changed
    }
}

/// What a slot is used for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotAssignment {
    Rest,
    Routine {
        routine_id: u64,
        routine_name: String,
        #[serde(default)]
        training_day_id: Option<u64>,
    },
}

/// Slot header returned with a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SlotHeader {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub day_name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub routine_id: Option<u64>,
    pub routine_name: Option<String>,
}

impl From<&WeekSlot> for SlotHeader {
    fn from(slot: &WeekSlot) -> Self {
        Self {
            id: slot.id,
            day_name: slot.day_name().to_string(),
            routine_id: slot.routine_id,
            routine_name: slot.routine_name.clone(),
        }
    }
}

/// Schedule row for the weekly overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeekSlotSummary {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub day_of_week: i64,
    pub day_name: String,
    pub is_rest_day: bool,
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub routine_id: Option<u64>,
    pub routine_name: Option<String>,
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub training_day_id: Option<u64>,
    pub has_configuration: bool,
}

impl From<&WeekSlot> for WeekSlotSummary {
    fn from(slot: &WeekSlot) -> Self {
        Self {
            id: slot.id,
            day_of_week: slot.day_of_week,
            day_name: slot.day_name().to_string(),
            is_rest_day: slot.is_rest_day,
            routine_id: slot.routine_id,
            routine_name: slot.routine_name.clone(),
            training_day_id: slot.training_day_id,
            has_configuration: slot.saved_configuration().is_some(),
        }
    }
}

/// A reusable named list of exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingDay {
    /// Training day ID (also used as document ID)
    pub id: u64,
    /// Owning profile
    pub profile_id: u64,
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<TrainingDayExercise>,
}

/// An exercise assigned to a training day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingDayExercise {
    pub exercise_id: u64,
    pub exercise_name: String,
    #[serde(default)]
    pub exercise_image: Option<String>,
}
