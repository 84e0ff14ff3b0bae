use crate::domain::repository::CredentialVerifier;
use crate::error::ListingsServiceError;

/// Checks the dashboard password against a single value from configuration.
/// Swappable behind `CredentialVerifier` if real accounts ever land.
#[derive(Clone)]
pub struct StaticCredentialVerifier {
    pub password: String,
}

impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, candidate: &str) -> Result<bool, ListingsServiceError> {
        Ok(candidate == self.password)
    }
}
