use crate::domain::model::{ApiRequest, ApiResponse};
use crate::domain::options::{CreateCustomerOptions, PageParams, UpdateCustomerOptions};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_str, RequestOptions};
use std::sync::Arc;

#[derive(Clone)]
pub struct Customers {
    transport: Arc<dyn Transport>,
}

impl Customers {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// `POST /customer`. Needs at least one email or phone.
    pub async fn create_customer(&self, options: &CreateCustomerOptions) -> Result<ApiResponse> {
        options.validate()?;

        let request = ApiRequest::post(&["customer"]).with_body(options)?;
        self.transport.execute(request).await
    }

    /// `GET /customer/list`
    pub async fn list_customers(&self, params: &PageParams) -> Result<ApiResponse> {
        params.validate()?;

        let request = ApiRequest::get(&["customer", "list"]).with_query(params)?;
        self.transport.execute(request).await
    }

    /// `GET /customer/fetch/{id}`; accepts the customer id or the merchant's reference.
    pub async fn get_customer(&self, customer_id_or_reference: &str) -> Result<ApiResponse> {
        validate_required_str("customer_id_or_reference", customer_id_or_reference)?;

        let request = ApiRequest::get(&["customer", "fetch", customer_id_or_reference]);
        self.transport.execute(request).await
    }

    /// `PUT /customer/update/{id}`
    pub async fn update_customer(
        &self,
        customer_id_or_reference: &str,
        options: &UpdateCustomerOptions,
    ) -> Result<ApiResponse> {
        validate_required_str("customer_id_or_reference", customer_id_or_reference)?;
        options.validate()?;

        let request = ApiRequest::put(&["customer", "update", customer_id_or_reference]).with_body(options)?;
        self.transport.execute(request).await
    }
}
