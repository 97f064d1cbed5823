// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use routine_planner::config::Config;
use routine_planner::db::{FirestoreDb, MemoryStore, WorkoutStore};
use routine_planner::models::{TrainingDay, TrainingDayExercise, WeekSlot};
use routine_planner::AppState;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create an app backed by a fresh in-memory store.
/// Returns the app state and a handle to the same store for seeding.
#[allow(dead_code)]
pub fn create_test_app() -> (AppState<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new();
    (AppState::new(Config::test_default(), store.clone()), store)
}

#[allow(dead_code)]
pub fn monday_morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 7, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn training_day(id: u64, profile_id: u64, exercise_ids: &[u64]) -> TrainingDay {
    TrainingDay {
        id,
        profile_id,
        name: format!("Day {}", id),
        exercises: exercise_ids
            .iter()
            .map(|&exercise_id| TrainingDayExercise {
                exercise_id,
                exercise_name: format!("Exercise {}", exercise_id),
                exercise_image: Some(format!("https://img.example.com/{}.png", exercise_id)),
            })
            .collect(),
    }
}

#[allow(dead_code)]
pub fn week_slot(
    id: u64,
    profile_id: u64,
    day_of_week: i64,
    training_day_id: Option<u64>,
) -> WeekSlot {
    WeekSlot {
        id,
        profile_id,
        day_of_week,
        is_rest_day: false,
        routine_id: Some(1),
        routine_name: Some("Upper/Lower".to_string()),
        training_day_id,
        exercises_config: None,
    }
}

/// Store slot 10 (Lunes) for profile 1 whose training day 20 has two exercises.
#[allow(dead_code)]
pub async fn seed_slot_with_training_day<S: WorkoutStore>(store: &S) -> WeekSlot {
    store
        .save_training_day(&training_day(20, 1, &[101, 102]))
        .await
        .unwrap();
    let slot = week_slot(10, 1, 2, Some(20));
    store.save_week_slot(&slot).await.unwrap();
    slot
}
