use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::repository::{AdminSessionRepository, CredentialVerifier};
use crate::domain::types::{
    ADMIN_SESSION_TTL_SECS, AdminSession, SESSION_TOKEN_LEN, generate_token,
};
use crate::error::ListingsServiceError;

// ── CreateAdminSession ───────────────────────────────────────────────────────

pub struct CreateAdminSessionUseCase<V, S>
where
    V: CredentialVerifier,
    S: AdminSessionRepository,
{
    pub credentials: V,
    pub sessions: S,
}

impl<V, S> CreateAdminSessionUseCase<V, S>
where
    V: CredentialVerifier,
    S: AdminSessionRepository,
{
    pub async fn execute(&self, password: &str) -> Result<AdminSession, ListingsServiceError> {
        if !self.credentials.verify(password).await? {
            return Err(ListingsServiceError::InvalidCredentials);
        }
        let now = Utc::now();
        let session = AdminSession {
            id: Uuid::new_v4(),
            token: generate_token(SESSION_TOKEN_LEN),
            expires_at: now + Duration::seconds(ADMIN_SESSION_TTL_SECS),
            created_at: now,
        };
        self.sessions.create(&session).await?;
        Ok(session)
    }
}

// ── CheckAdminSession ────────────────────────────────────────────────────────

pub struct CheckAdminSessionUseCase<S: AdminSessionRepository> {
    pub sessions: S,
}

impl<S: AdminSessionRepository> CheckAdminSessionUseCase<S> {
    pub async fn execute(&self, token: &str) -> Result<AdminSession, ListingsServiceError> {
        self.sessions
            .find_valid(token)
            .await?
            .ok_or(ListingsServiceError::InvalidSession)
    }
}

// ── RevokeAdminSession ───────────────────────────────────────────────────────

pub struct RevokeAdminSessionUseCase<S: AdminSessionRepository> {
    pub sessions: S,
}

impl<S: AdminSessionRepository> RevokeAdminSessionUseCase<S> {
    /// Logout is idempotent: revoking an unknown token is not an error.
    pub async fn execute(&self, token: &str) -> Result<(), ListingsServiceError> {
        self.sessions.delete(token).await?;
        Ok(())
    }
}
