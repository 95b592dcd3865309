use crate::domain::model::{ApiRequest, ApiResponse};
use crate::domain::options::{InitiatePayoutOptions, ListPayoutsParams, UpdatePayoutOptions};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_str, RequestOptions};
use std::sync::Arc;

/// Payout requests to a customer's withdrawal method.
#[derive(Clone)]
pub struct Payouts {
    transport: Arc<dyn Transport>,
}

impl Payouts {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn initiate_payout(&self, options: &InitiatePayoutOptions) -> Result<ApiResponse> {
        options.validate()?;
        tracing::debug!(
            "Requesting payout of {} {} to {}",
            options.amount,
            options.currency,
            options.customer_id
        );

        let request = ApiRequest::post(&["payout", "request"]).with_body(options)?;
        self.transport.execute(request).await
    }

    pub async fn get_payout(&self, payout_request_id: &str) -> Result<ApiResponse> {
        validate_required_str("payout_request_id", payout_request_id)?;

        let request = ApiRequest::get(&["payout", "request", "fetch", payout_request_id]);
        self.transport.execute(request).await
    }

    pub async fn list_payouts(&self, params: &ListPayoutsParams) -> Result<ApiResponse> {
        params.validate()?;

        let request = ApiRequest::get(&["payout", "request", "list"]).with_query(params)?;
        self.transport.execute(request).await
    }

    /// The id travels in the query string, the new status in the body.
    pub async fn update_payout(&self, payout_request_id: &str, status: &str) -> Result<ApiResponse> {
        validate_required_str("payout_request_id", payout_request_id)?;
        let body = UpdatePayoutOptions {
            status: status.to_string(),
        };
        body.validate()?;

        let request = ApiRequest::put(&["payout", "request", "update"])
            .with_query_param("payout_request_id", payout_request_id)
            .with_body(&body)?;
        self.transport.execute(request).await
    }

    pub async fn delete_payout(&self, payout_request_id: &str) -> Result<ApiResponse> {
        validate_required_str("payout_request_id", payout_request_id)?;

        let request = ApiRequest::delete(&["payout", "request", "delete"])
            .with_query_param("payout_request_id", payout_request_id);
        self.transport.execute(request).await
    }
}
