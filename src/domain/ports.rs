use crate::domain::model::{ApiRequest, ApiResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Sends one request to the API and returns the decoded body.
///
/// Implementations must turn non-success responses into
/// [`ZuriPayError::ProviderError`](crate::utils::error::ZuriPayError::ProviderError)
/// and hand back transport failures untouched.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}
