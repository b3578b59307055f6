//! Credential capability injected into the HTTP gateway.

use crate::error::AppError;
use async_trait::async_trait;

/// Supplies the bearer credential attached to each outbound request.
///
/// The token lookup is an explicit capability passed into the gateway at
/// construction, never a global read, so fetch code can be exercised against
/// a mock. Credential *lifecycle* (issuing, refreshing, expiry) stays out of
/// scope.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Returns the current bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when no credential is available.
    async fn bearer_token(&self) -> Result<String, AppError>;
}
