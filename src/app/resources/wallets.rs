use crate::domain::model::{ApiRequest, ApiResponse};
use crate::domain::options::{CreateWalletOptions, DateRangeParams};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_str, RequestOptions};
use serde_json::json;
use std::sync::Arc;

#[derive(Clone)]
pub struct Wallets {
    transport: Arc<dyn Transport>,
}

impl Wallets {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn create_wallet(&self, options: &CreateWalletOptions) -> Result<ApiResponse> {
        options.validate()?;

        let request = ApiRequest::post(&["wallets"]).with_body(options)?;
        self.transport.execute(request).await
    }

    /// Takes no `skip`; the wallet listing only pages by `limit`.
    pub async fn list_wallets(&self, params: &DateRangeParams) -> Result<ApiResponse> {
        params.validate()?;

        let request = ApiRequest::get(&["wallets", "list"]).with_query(params)?;
        self.transport.execute(request).await
    }

    pub async fn get_wallet(&self, wallet_id: &str) -> Result<ApiResponse> {
        validate_required_str("wallet_id", wallet_id)?;

        let request = ApiRequest::get(&["wallets", "fetch"]).with_query_param("wallet_id", wallet_id);
        self.transport.execute(request).await
    }

    /// Balance across wallets, or for one currency. An empty currency is treated as absent.
    pub async fn get_wallet_balance(&self, currency: Option<&str>) -> Result<ApiResponse> {
        let mut request = ApiRequest::get(&["wallets", "balance"]);
        if let Some(currency) = currency.filter(|c| !c.is_empty()) {
            request = request.with_query_param("currency", currency);
        }
        self.transport.execute(request).await
    }

    pub async fn delete_wallet(&self, wallet_id: &str) -> Result<ApiResponse> {
        validate_required_str("wallet_id", wallet_id)?;

        let request = ApiRequest::delete(&["wallets", "delete"]).with_body(&json!({ "wallet_id": wallet_id }))?;
        self.transport.execute(request).await
    }
}
