use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::infra::credentials::StaticCredentialVerifier;
use crate::infra::db::{DbAdminSessionRepository, DbCodeRepository, DbSubmissionRepository};
use crate::infra::storage::DiskAttachmentStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub media_root: PathBuf,
    pub admin_password: String,
    pub public_base_url: String,
    pub cookie_domain: String,
}

impl AppState {
    pub fn code_repo(&self) -> DbCodeRepository {
        DbCodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn submission_repo(&self) -> DbSubmissionRepository {
        DbSubmissionRepository {
            db: self.db.clone(),
        }
    }

    pub fn admin_session_repo(&self) -> DbAdminSessionRepository {
        DbAdminSessionRepository {
            db: self.db.clone(),
        }
    }

    pub fn attachment_store(&self) -> DiskAttachmentStore {
        DiskAttachmentStore {
            root: self.media_root.clone(),
        }
    }

    pub fn credential_verifier(&self) -> StaticCredentialVerifier {
        StaticCredentialVerifier {
            password: self.admin_password.clone(),
        }
    }
}
