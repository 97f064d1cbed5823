// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Default configuration synthesized from a training day.

use crate::models::{ExerciseConfigItem, SetConfig, TrainingDayExercise};

/// Build the default configuration for a slot that has a training day but no
/// saved configuration yet.
///
/// One item per exercise, in input order, each with a single "0"/"0"/"0" set
/// and empty rest-pause/drop-set lists.
pub fn build_default_configuration(exercises: &[TrainingDayExercise]) -> Vec<ExerciseConfigItem> {
    exercises
        .iter()
        .enumerate()
        .map(|(position, exercise)| ExerciseConfigItem {
            exercise_id: exercise.exercise_id,
            exercise_name: exercise.exercise_name.clone(),
            exercise_image: exercise.exercise_image.clone(),
            order_index: position as u32,
            sets_config: vec![SetConfig::template_default()],
            notes: String::new(),
        })
        .collect()
}
