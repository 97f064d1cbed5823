// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running
//! (FIRESTORE_EMULATOR_HOST set); otherwise they are skipped.

use routine_planner::db::WorkoutStore;
use routine_planner::error::AppError;
use routine_planner::models::{PerformedSet, SessionError, SessionStatus};
use routine_planner::services::{ConfigurationService, SessionService, UpdateConfigurationRequest};
use serde_json::json;

mod common;

/// Generate a unique ID for test isolation.
fn unique_id() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64
}

#[tokio::test]
async fn test_week_slot_ownership() {
    require_emulator!();

    let (db, slot_id, profile_id) = test_db_with_slot().await;

    assert!(db.find_week_slot(slot_id, profile_id).await.unwrap().is_some());
    assert!(db
        .find_week_slot(slot_id, profile_id + 1)
        .await
        .unwrap()
        .is_none());
    assert_eq!(
        db.clear_week_slot_configuration(slot_id, profile_id + 1)
            .await
            .unwrap(),
        0
    );

    println!("✓ Ownership verified: slot_id={}", slot_id);
}

#[tokio::test]
async fn test_configuration_round_trip() {
    require_emulator!();

    let (db, slot_id, profile_id) = test_db_with_slot().await;
    let service = ConfigurationService::new(db.clone());

    let defaults = service.get_configuration(slot_id, profile_id).await.unwrap();
    assert_eq!(defaults.exercises.len(), 2);

    let persisted = service
        .update_configuration(
            slot_id,
            UpdateConfigurationRequest {
                profile_id: Some(profile_id),
                exercises: json!([
                    {"exercise_id": 1, "sets_config": [
                        {"reps": "8", "weight": "20", "rir": "1", "rp": []}
                    ]},
                    {"exercise_id": 2, "sets_config": []},
                    {"exercise_id": 3, "sets_config": []}
                ]),
                routine_name: None,
            },
        )
        .await
        .unwrap();

    let reloaded = service.get_configuration(slot_id, profile_id).await.unwrap();
    assert_eq!(reloaded.exercises, persisted);
    // Empty technique list survives storage distinct from an absent one
    assert_eq!(reloaded.exercises[0].sets_config[0].rp, Some(vec![]));
    assert_eq!(reloaded.exercises[0].sets_config[0].ds, None);

    assert_eq!(service.delete_configuration(slot_id, profile_id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_session_persists_across_reads() {
    require_emulator!();

    let (db, slot_id, profile_id) = test_db_with_slot().await;
    let sessions = SessionService::new(db.clone());
    let start = common::monday_morning();

    let session = sessions.start_session(profile_id, slot_id, start).await.unwrap();
    sessions.pause(session.id, profile_id, start).await.unwrap();

    let stored = db.find_session(session.id, profile_id).await.unwrap().unwrap();
    assert_eq!(stored.status, SessionStatus::Paused);
    assert_eq!(stored.start_time, start);
}

#[tokio::test]
async fn test_completed_session_stays_completed() {
    require_emulator!();

    let (db, slot_id, profile_id) = test_db_with_slot().await;
    let sessions = SessionService::new(db.clone());
    let start = chrono::Utc::now();

    let session = sessions.start_session(profile_id, slot_id, start).await.unwrap();
    sessions.complete(session.id, profile_id, start).await.unwrap();

    let set = PerformedSet {
        set_number: 1,
        reps: Some("8".to_string()),
        ..Default::default()
    };
    let err = sessions
        .record_set(session.id, profile_id, 0, set, start)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Session(SessionError::NotActive(_))));

    let stored = db.find_session(session.id, profile_id).await.unwrap().unwrap();
    assert_eq!(stored.status, SessionStatus::Completed);
    assert!(stored.exercises[0].performed_sets.is_empty());
    // Sub-second start time survives storage
    assert_eq!(stored.start_time, start);
}

async fn test_db_with_slot() -> (routine_planner::db::FirestoreDb, u64, u64) {
    let db = common::test_db().await;
    let profile_id = unique_id();
    let slot_id = unique_id();
    let training_day_id = unique_id();

    db.save_training_day(&common::training_day(training_day_id, profile_id, &[1, 2]))
        .await
        .unwrap();
    db.save_week_slot(&common::week_slot(slot_id, profile_id, 3, Some(training_day_id)))
        .await
        .unwrap();

    (db, slot_id, profile_id)
}
