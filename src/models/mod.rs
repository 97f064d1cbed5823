// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod exercise_config;
pub mod progress;
pub mod session;
pub mod week_slot;
pub mod weekday;

pub use exercise_config::{
    DsDetail, ExerciseConfigItem, Measure, PartialDetail, RpDetail, SetConfig,
};
pub use progress::SessionProgress;
pub use session::{
    NewTrainingSession, PerformedSet, SessionError, SessionStatus, TrainingSession,
    TrainingSessionExercise,
};
pub use week_slot::{
    SlotAssignment, SlotHeader, TrainingDay, TrainingDayExercise, WeekSlot, WeekSlotSummary,
};
pub use weekday::{day_id_to_name, day_name_to_id, Weekday};
