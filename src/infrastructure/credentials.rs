//! Credential provider backed by startup configuration.

use async_trait::async_trait;

use crate::domain::gateways::CredentialProvider;
use crate::error::AppError;

/// Serves a fixed bearer token loaded once at startup (`ADMIN_TOKEN`).
pub struct StaticCredentials {
    token: String,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn bearer_token(&self) -> Result<String, AppError> {
        if self.token.is_empty() {
            return Err(AppError::config("no admin token configured"));
        }

        Ok(self.token.clone())
    }
}
