// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Readiness check for a configuration before it is submitted.
//!
//! Every set needs reps, weight and RIR. A technique whose toggle is on must
//! have all of its detail fields filled; a technique whose toggle is off is
//! ignored even if it still carries half-entered data.

use crate::models::exercise_config::measure_filled;
use crate::models::{ExerciseConfigItem, SetConfig};
use crate::services::toggles::{Technique, TechniqueToggles, ToggleKey};

/// Why a set is not ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteReason {
    MissingReps,
    MissingWeight,
    MissingRir,
    /// Toggle is on but the technique has no entries
    TechniqueEmpty(Technique),
    /// Toggle is on and at least one entry lacks a required field
    TechniqueDetailMissing(Technique),
}

/// First set that blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncompleteSet {
    pub exercise: usize,
    pub set: usize,
    pub reason: IncompleteReason,
}

/// Base fields are free text; only the empty string means unset.
fn check_base(set: &SetConfig) -> Option<IncompleteReason> {
    if set.reps.is_empty() {
        Some(IncompleteReason::MissingReps)
    } else if set.weight.is_empty() {
        Some(IncompleteReason::MissingWeight)
    } else if set.rir.is_empty() {
        Some(IncompleteReason::MissingRir)
    } else {
        None
    }
}

fn check_technique(set: &SetConfig, technique: Technique) -> Option<IncompleteReason> {
    let (present, complete) = match technique {
        Technique::RestPause => match set.rp.as_deref() {
            Some(entries) if !entries.is_empty() => (
                true,
                entries
                    .iter()
                    .all(|rp| measure_filled(&rp.value) && measure_filled(&rp.time)),
            ),
            _ => (false, false),
        },
        Technique::DropSet => match set.ds.as_deref() {
            Some(entries) if !entries.is_empty() => (
                true,
                entries
                    .iter()
                    .all(|ds| measure_filled(&ds.reps) && measure_filled(&ds.weight)),
            ),
            _ => (false, false),
        },
        Technique::Partials => match &set.partials {
            Some(partials) => (true, measure_filled(&partials.reps)),
            None => (false, false),
        },
    };

    if !present {
        Some(IncompleteReason::TechniqueEmpty(technique))
    } else if !complete {
        Some(IncompleteReason::TechniqueDetailMissing(technique))
    } else {
        None
    }
}

/// Locate the first set that is not ready, scanning exercises then sets in order.
pub fn find_incomplete(
    exercises: &[ExerciseConfigItem],
    toggles: &TechniqueToggles,
) -> Option<IncompleteSet> {
    exercises.iter().enumerate().find_map(|(exercise, item)| {
        item.sets_config
            .iter()
            .enumerate()
            .find_map(|(set_index, set)| {
                let reason = check_base(set).or_else(|| {
                    Technique::ALL
                        .into_iter()
                        .filter(|&t| toggles.is_enabled(ToggleKey::new(exercise, set_index, t)))
                        .find_map(|t| check_technique(set, t))
                })?;
                Some(IncompleteSet {
                    exercise,
                    set: set_index,
                    reason,
                })
            })
    })
}

/// Whether the whole configuration can be submitted.
pub fn is_ready_to_submit(exercises: &[ExerciseConfigItem], toggles: &TechniqueToggles) -> bool {
    find_incomplete(exercises, toggles).is_none()
}
