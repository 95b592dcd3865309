use crate::domain::model::{ApiRequest, ApiResponse};
use crate::domain::options::{CreateCallbackOptions, PageParams, UpdateCallbackOptions};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_str, RequestOptions};
use std::sync::Arc;

/// Webhook endpoint registrations.
#[derive(Clone)]
pub struct Callbacks {
    transport: Arc<dyn Transport>,
}

impl Callbacks {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn create_callback(&self, options: &CreateCallbackOptions) -> Result<ApiResponse> {
        options.validate()?;

        let request = ApiRequest::post(&["callback"]).with_body(options)?;
        self.transport.execute(request).await
    }

    pub async fn list_callbacks(&self, params: &PageParams) -> Result<ApiResponse> {
        params.validate()?;

        let request = ApiRequest::get(&["callback", "list"]).with_query(params)?;
        self.transport.execute(request).await
    }

    pub async fn get_callback(&self, callback_id: &str) -> Result<ApiResponse> {
        validate_required_str("callback_id", callback_id)?;

        let request = ApiRequest::get(&["callback", "fetch", callback_id]);
        self.transport.execute(request).await
    }

    pub async fn update_callback(
        &self,
        callback_id: &str,
        options: &UpdateCallbackOptions,
    ) -> Result<ApiResponse> {
        validate_required_str("callback_id", callback_id)?;
        options.validate()?;

        let request = ApiRequest::put(&["callback", "update", callback_id]).with_body(options)?;
        self.transport.execute(request).await
    }

    pub async fn delete_callback(&self, callback_id: &str) -> Result<ApiResponse> {
        validate_required_str("callback_id", callback_id)?;

        let request = ApiRequest::delete(&["callback", "delete", callback_id]);
        self.transport.execute(request).await
    }
}
