// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Week slots (per-profile weekday assignments and their configuration)
//! - Training days (exercise lists that seed default configurations)
//! - Training sessions (live and finished workouts)
//!
//! Documents are keyed by their numeric ID; ownership is checked after the
//! read so another profile's document is indistinguishable from a missing one.

use crate::db::{collections, WorkoutStore};
use crate::error::AppError;
use crate::models::{NewTrainingSession, SessionError, TrainingDay, TrainingSession, WeekSlot};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Fresh IDs tried before giving up on creating a session.
const SESSION_ID_ATTEMPTS: usize = 3;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // The emulator rejects real credentials; use an unauthenticated connection
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    async fn get_doc<T>(&self, collection: &str, id: u64) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collection)
            .obj()
            .one(&id.to_string())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn put_doc<T>(&self, collection: &str, id: u64, object: &T) -> Result<(), AppError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collection)
            .document_id(id.to_string())
            .object(object)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Create-only write of a session document.
    ///
    /// Returns `false` if a document with the same ID already exists.
    async fn insert_session(&self, session: &TrainingSession) -> Result<bool, AppError> {
        let created: firestore::FirestoreResult<TrainingSession> = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::TRAINING_SESSIONS)
            .document_id(session.id.to_string())
            .object(session)
            .execute()
            .await;

        match created {
            Ok(_) => Ok(true),
            Err(firestore::errors::FirestoreError::DataConflictError(_)) => Ok(false),
            Err(e) => Err(AppError::Database(e.to_string())),
        }
    }

    /// Session IDs come from the wall clock, like the rest of our generated IDs.
    fn new_session_id() -> Result<u64, AppError> {
        chrono::Utc::now()
            .timestamp_nanos_opt()
            .and_then(|nanos| u64::try_from(nanos).ok())
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Clock out of range for session ID")))
    }
}

impl WorkoutStore for FirestoreDb {
    // ─── Week Slot Operations ────────────────────────────────────

    async fn find_week_slot(
        &self,
        id: u64,
        profile_id: u64,
    ) -> Result<Option<WeekSlot>, AppError> {
        let slot: Option<WeekSlot> = self.get_doc(collections::WEEK_SLOTS, id).await?;
        Ok(slot.filter(|s| s.profile_id == profile_id))
    }

    async fn list_week_slots(&self, profile_id: u64) -> Result<Vec<WeekSlot>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::WEEK_SLOTS)
            .filter(|q| q.for_all([q.field("profile_id").eq(profile_id)]))
            .order_by([("day_of_week", firestore::FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn save_week_slot(&self, slot: &WeekSlot) -> Result<(), AppError> {
        self.put_doc(collections::WEEK_SLOTS, slot.id, slot).await
    }

    async fn clear_week_slot_configuration(
        &self,
        id: u64,
        profile_id: u64,
    ) -> Result<u64, AppError> {
        let Some(mut slot) = self.find_week_slot(id, profile_id).await? else {
            return Ok(0);
        };

        slot.routine_id = None;
        slot.training_day_id = None;
        slot.exercises_config = None;
        self.save_week_slot(&slot).await?;
        Ok(1)
    }

    // ─── Training Day Operations ─────────────────────────────────

    async fn find_training_day(
        &self,
        id: u64,
        profile_id: u64,
    ) -> Result<Option<TrainingDay>, AppError> {
        let day: Option<TrainingDay> = self.get_doc(collections::TRAINING_DAYS, id).await?;
        Ok(day.filter(|d| d.profile_id == profile_id))
    }

    async fn save_training_day(&self, day: &TrainingDay) -> Result<(), AppError> {
        self.put_doc(collections::TRAINING_DAYS, day.id, day).await
    }

    // ─── Training Session Operations ─────────────────────────────

    async fn create_session(
        &self,
        session: NewTrainingSession,
    ) -> Result<TrainingSession, AppError> {
        for _ in 0..SESSION_ID_ATTEMPTS {
            let candidate = session.clone().into_session(Self::new_session_id()?);
            if self.insert_session(&candidate).await? {
                return Ok(candidate);
            }
            tracing::warn!(session_id = candidate.id, "Session ID collision, retrying");
        }

        Err(AppError::Database(
            "Could not allocate a unique session ID".to_string(),
        ))
    }

    async fn find_session(
        &self,
        id: u64,
        profile_id: u64,
    ) -> Result<Option<TrainingSession>, AppError> {
        let session: Option<TrainingSession> =
            self.get_doc(collections::TRAINING_SESSIONS, id).await?;
        Ok(session.filter(|s| s.profile_id == profile_id))
    }

    /// Apply a session step inside a Firestore transaction.
    ///
    /// The session is read through the transaction, so a concurrent update
    /// of the same document makes the commit fail instead of being lost.
    async fn update_session<F>(
        &self,
        id: u64,
        profile_id: u64,
        step: F,
    ) -> Result<Option<TrainingSession>, AppError>
    where
        F: FnOnce(&mut TrainingSession) -> Result<(), SessionError> + Send,
    {
        let client = self.get_client()?;

        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        // 1. Read the session within the transaction
        let reader = client.clone_with_consistency_selector(
            firestore::FirestoreConsistencySelector::Transaction(
                transaction.transaction_id().clone(),
            ),
        );
        let current: Option<TrainingSession> = reader
            .fluent()
            .select()
            .by_id_in(collections::TRAINING_SESSIONS)
            .obj()
            .one(&id.to_string())
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to read session in transaction: {}", e))
            })?;

        // 2. Ownership check, then apply the step in memory
        let Some(mut session) = current.filter(|s| s.profile_id == profile_id) else {
            let _ = transaction.rollback().await;
            return Ok(None);
        };
        if let Err(e) = step(&mut session) {
            let _ = transaction.rollback().await;
            return Err(e.into());
        }

        // 3. Write back and commit
        client
            .fluent()
            .update()
            .in_col(collections::TRAINING_SESSIONS)
            .document_id(id.to_string())
            .object(&session)
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add session to transaction: {}", e))
            })?;

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

        Ok(Some(session))
    }
}
