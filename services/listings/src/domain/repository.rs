#![allow(async_fn_in_trait)]

use crate::domain::types::{AdminSession, Code, Submission};
use crate::error::ListingsServiceError;

/// Repository for single-use codes.
pub trait CodeRepository: Send + Sync {
    /// Insert a new code. Returns `false` when the token collides with an
    /// existing row (unique index), leaving the table unchanged.
    async fn insert(&self, code: &Code) -> Result<bool, ListingsServiceError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Code>, ListingsServiceError>;

    /// All codes, newest first (dashboard view).
    async fn list_newest_first(&self) -> Result<Vec<Code>, ListingsServiceError>;
}

/// Repository for listing submissions.
pub trait SubmissionRepository: Send + Sync {
    /// Insert the submission and consume its code in one transaction. The
    /// lock is conditional (`used = false` → `true`); when another
    /// submission already won, nothing is written and `false` is returned.
    async fn create_consuming_code(
        &self,
        submission: &Submission,
    ) -> Result<bool, ListingsServiceError>;

    /// Insert the submission without touching code state (demo codes).
    async fn create(&self, submission: &Submission) -> Result<(), ListingsServiceError>;

    /// All submissions, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Submission>, ListingsServiceError>;
}

/// Repository for dashboard login sessions.
pub trait AdminSessionRepository: Send + Sync {
    async fn create(&self, session: &AdminSession) -> Result<(), ListingsServiceError>;

    /// Find an unexpired session by token.
    async fn find_valid(&self, token: &str) -> Result<Option<AdminSession>, ListingsServiceError>;

    /// Delete a session. Returns `true` if deleted, `false` if not found.
    async fn delete(&self, token: &str) -> Result<bool, ListingsServiceError>;
}

/// Port for persisting uploaded images. The recorder only keeps the
/// reference string; the storage mechanism behind it is opaque.
pub trait AttachmentStore: Send + Sync {
    /// Store one image body under `filename`, returning its reference.
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, ListingsServiceError>;
}

/// Port for checking dashboard credentials.
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, candidate: &str) -> Result<bool, ListingsServiceError>;
}
