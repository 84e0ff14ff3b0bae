use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use doorcode_listings::domain::repository::{
    AdminSessionRepository, AttachmentStore, CodeRepository, CredentialVerifier,
    SubmissionRepository,
};
use doorcode_listings::domain::types::{AdminSession, Code, Submission};
use doorcode_listings::error::ListingsServiceError;
use doorcode_listings::usecase::submission::{AttachmentUpload, RecordSubmissionInput};

// ── MockCodeRepo ─────────────────────────────────────────────────────────────

pub struct MockCodeRepo {
    pub codes: Arc<Mutex<Vec<Code>>>,
    /// When set, every insert reports a unique-index collision.
    pub always_collide: bool,
}

impl MockCodeRepo {
    pub fn new(codes: Vec<Code>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
            always_collide: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn colliding() -> Self {
        Self {
            codes: Arc::new(Mutex::new(vec![])),
            always_collide: true,
        }
    }

    /// Repo over an existing code list, so code and submission mocks can
    /// observe each other's writes like two repositories on one database.
    pub fn sharing(codes: Arc<Mutex<Vec<Code>>>) -> Self {
        Self {
            codes,
            always_collide: false,
        }
    }

    /// Returns a shared handle to the internal code list for post-execution inspection.
    pub fn codes_handle(&self) -> Arc<Mutex<Vec<Code>>> {
        Arc::clone(&self.codes)
    }
}

impl CodeRepository for MockCodeRepo {
    async fn insert(&self, code: &Code) -> Result<bool, ListingsServiceError> {
        if self.always_collide {
            return Ok(false);
        }
        let mut codes = self.codes.lock().unwrap();
        if codes.iter().any(|c| c.code == code.code) {
            return Ok(false);
        }
        codes.push(code.clone());
        Ok(true)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Code>, ListingsServiceError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.code == code)
            .cloned())
    }

    async fn list_newest_first(&self) -> Result<Vec<Code>, ListingsServiceError> {
        let mut codes = self.codes.lock().unwrap().clone();
        codes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(codes)
    }
}

// ── MockSubmissionRepo ───────────────────────────────────────────────────────

pub struct MockSubmissionRepo {
    pub codes: Arc<Mutex<Vec<Code>>>,
    pub submissions: Arc<Mutex<Vec<Submission>>>,
}

impl MockSubmissionRepo {
    pub fn empty() -> Self {
        Self::sharing(Arc::new(Mutex::new(vec![])))
    }

    pub fn sharing(codes: Arc<Mutex<Vec<Code>>>) -> Self {
        Self {
            codes,
            submissions: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Returns a shared handle to the stored submissions for post-execution inspection.
    pub fn submissions_handle(&self) -> Arc<Mutex<Vec<Submission>>> {
        Arc::clone(&self.submissions)
    }
}

impl SubmissionRepository for MockSubmissionRepo {
    async fn create_consuming_code(
        &self,
        submission: &Submission,
    ) -> Result<bool, ListingsServiceError> {
        // One guard across both writes, standing in for the transaction.
        let mut codes = self.codes.lock().unwrap();
        let Some(code) = codes
            .iter_mut()
            .find(|c| c.code == submission.code && !c.used)
        else {
            return Ok(false);
        };
        code.used = true;
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(true)
    }

    async fn create(&self, submission: &Submission) -> Result<(), ListingsServiceError> {
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<Submission>, ListingsServiceError> {
        let mut submissions = self.submissions.lock().unwrap().clone();
        submissions.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(submissions)
    }
}

// ── MockAttachmentStore ──────────────────────────────────────────────────────

pub struct MockAttachmentStore {
    pub saved: Arc<Mutex<Vec<String>>>,
}

impl MockAttachmentStore {
    pub fn new() -> Self {
        Self {
            saved: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Returns a shared handle to the saved filenames for post-execution inspection.
    pub fn saved_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.saved)
    }
}

impl AttachmentStore for MockAttachmentStore {
    async fn save(&self, filename: &str, _bytes: &[u8]) -> Result<String, ListingsServiceError> {
        self.saved.lock().unwrap().push(filename.to_owned());
        Ok(format!("/media/{filename}"))
    }
}

// ── MockSessionRepo ──────────────────────────────────────────────────────────

pub struct MockSessionRepo {
    pub sessions: Arc<Mutex<Vec<AdminSession>>>,
}

impl MockSessionRepo {
    pub fn new(sessions: Vec<AdminSession>) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(sessions)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the session list for post-execution inspection.
    pub fn sessions_handle(&self) -> Arc<Mutex<Vec<AdminSession>>> {
        Arc::clone(&self.sessions)
    }
}

impl AdminSessionRepository for MockSessionRepo {
    async fn create(&self, session: &AdminSession) -> Result<(), ListingsServiceError> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn find_valid(&self, token: &str) -> Result<Option<AdminSession>, ListingsServiceError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.token == token && s.is_valid())
            .cloned())
    }

    async fn delete(&self, token: &str) -> Result<bool, ListingsServiceError> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| s.token != token);
        Ok(sessions.len() < before)
    }
}

// ── MockVerifier ─────────────────────────────────────────────────────────────

pub struct MockVerifier {
    pub password: String,
}

impl MockVerifier {
    pub fn new(password: &str) -> Self {
        Self {
            password: password.to_owned(),
        }
    }
}

impl CredentialVerifier for MockVerifier {
    async fn verify(&self, candidate: &str) -> Result<bool, ListingsServiceError> {
        Ok(candidate == self.password)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_code(code: &str) -> Code {
    Code {
        id: Uuid::new_v4(),
        code: code.to_owned(),
        used: false,
        is_demo: false,
        created_at: Utc::now(),
    }
}

pub fn demo_code(code: &str) -> Code {
    Code {
        is_demo: true,
        ..test_code(code)
    }
}

pub fn used_code(code: &str) -> Code {
    Code {
        used: true,
        ..test_code(code)
    }
}

pub fn test_input(code: &str) -> RecordSubmissionInput {
    RecordSubmissionInput {
        code: code.to_owned(),
        name: "Jane".to_owned(),
        phone: "555-1234".to_owned(),
        address: Some("12 Hill St".to_owned()),
        owner_name: None,
        price: Some("1200".to_owned()),
        size: Some(54),
        bedrooms: Some("2".to_owned()),
        baths: None,
        condition: None,
        attachments: vec![],
    }
}

pub fn image_upload(content_type: &str, len: usize) -> AttachmentUpload {
    AttachmentUpload {
        content_type: content_type.to_owned(),
        bytes: vec![0u8; len],
    }
}

pub fn test_session(token: &str, ttl_secs: i64) -> AdminSession {
    AdminSession {
        id: Uuid::new_v4(),
        token: token.to_owned(),
        expires_at: Utc::now() + chrono::Duration::seconds(ttl_secs),
        created_at: Utc::now(),
    }
}

pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password-for-unit-tests";
