// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use routine_planner::error::AppError;
use routine_planner::models::{SessionError, SessionStatus};

#[test]
fn test_error_kind_helpers() {
    assert!(AppError::NotFound("Week slot 1 not found".to_string()).is_not_found());
    assert!(!AppError::Database("offline".to_string()).is_not_found());
    assert!(AppError::Validation("profile_id is required".to_string()).is_validation());
    assert!(!AppError::NotFound("x".to_string()).is_validation());
}

#[test]
fn test_session_error_converts_and_displays() {
    let err: AppError = SessionError::InvalidTransition {
        from: SessionStatus::Completed,
        to: SessionStatus::Paused,
    }
    .into();

    assert_eq!(
        err.to_string(),
        "Session rejected: Cannot move session from completed to paused"
    );
}

#[test]
fn test_anyhow_becomes_internal() {
    let err: AppError = anyhow::anyhow!("clock exploded").into();
    assert!(matches!(err, AppError::Internal(_)));
}
