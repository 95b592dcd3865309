use crate::domain::model::{ApiRequest, ApiResponse};
use crate::domain::options::{
    DateRangeParams, GetTransactionParams, InitiatePaymentOptions, VerifyPaymentParams,
};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::validation::RequestOptions;
use std::sync::Arc;

/// Payment initiation and lookup.
#[derive(Clone)]
pub struct Transactions {
    transport: Arc<dyn Transport>,
}

impl Transactions {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// `POST /transactions`
    pub async fn initiate_payment(&self, options: &InitiatePaymentOptions) -> Result<ApiResponse> {
        options.validate()?;
        tracing::debug!("Initiating payment of {} {}", options.amount, options.currency);

        let request = ApiRequest::post(&["transactions"]).with_body(options)?;
        self.transport.execute(request).await
    }

    /// `GET /transactions/verify`, looked up by reference, transaction id or checkout id.
    pub async fn verify_payment(&self, params: &VerifyPaymentParams) -> Result<ApiResponse> {
        params.validate()?;

        let request = ApiRequest::get(&["transactions", "verify"]).with_query(params)?;
        self.transport.execute(request).await
    }

    /// `GET /transactions/list`
    pub async fn list_transactions(&self, params: &DateRangeParams) -> Result<ApiResponse> {
        params.validate()?;

        let request = ApiRequest::get(&["transactions", "list"]).with_query(params)?;
        self.transport.execute(request).await
    }

    /// `GET /transactions/fetch`
    pub async fn get_transaction(&self, params: &GetTransactionParams) -> Result<ApiResponse> {
        params.validate()?;

        let request = ApiRequest::get(&["transactions", "fetch"]).with_query(params)?;
        self.transport.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::recording::RecordingTransport;
    use crate::domain::model::HttpMethod;
    use serde_json::json;

    fn transactions(transport: &RecordingTransport) -> Transactions {
        Transactions::new(Arc::new(transport.clone()))
    }

    #[tokio::test]
    async fn test_initiate_payment_returns_body_unchanged() {
        let reply = json!({
            "result": "success",
            "transaction_id": "tx_1",
            "transaction_reference": "ref_1",
            "message": "ok"
        });
        let transport = RecordingTransport::replying(reply.clone());

        let options = InitiatePaymentOptions::new(100.0, "a@b.com", "USD");
        let body = transactions(&transport).initiate_payment(&options).await.unwrap();

        assert_eq!(serde_json::Value::Object(body), reply);

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path(), "/transactions");
        assert_eq!(
            request.body,
            Some(json!({"amount": 100.0, "email": "a@b.com", "currency": "USD"}))
        );
    }

    #[tokio::test]
    async fn test_initiate_payment_missing_currency_sends_nothing() {
        let transport = RecordingTransport::replying(json!({}));

        let options = InitiatePaymentOptions::new(100.0, "a@b.com", "");
        let err = transactions(&transport).initiate_payment(&options).await.unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("currency"));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_verify_payment_forwards_lookup_key_as_query() {
        let transport = RecordingTransport::replying(json!({"result": "success"}));

        transactions(&transport)
            .verify_payment(&VerifyPaymentParams::by_transaction_id("tx_1"))
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.path(), "/transactions/verify");
        assert_eq!(request.query, vec![("transaction_id".to_string(), "tx_1".to_string())]);
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn test_verify_payment_without_lookup_key_fails() {
        let transport = RecordingTransport::replying(json!({}));

        let err = transactions(&transport)
            .verify_payment(&VerifyPaymentParams::default())
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_list_transactions_passes_filters() {
        let transport = RecordingTransport::replying(json!({"result": "success", "transactions": []}));

        let params = DateRangeParams {
            start_date: Some("2024-01-01".to_string()),
            end_date: None,
            limit: Some(25),
        };
        transactions(&transport).list_transactions(&params).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.path(), "/transactions/list");
        assert_eq!(request.query_value("start_date"), Some("2024-01-01"));
        assert_eq!(request.query_value("limit"), Some("25"));
        assert_eq!(request.query_value("end_date"), None);
    }

    #[tokio::test]
    async fn test_get_transaction_by_reference() {
        let transport = RecordingTransport::replying(json!({"result": "success"}));

        let params = GetTransactionParams {
            transaction_reference: Some("ref_1".to_string()),
            transaction_id: None,
        };
        transactions(&transport).get_transaction(&params).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.path(), "/transactions/fetch");
        assert_eq!(request.query_value("transaction_reference"), Some("ref_1"));
    }

    #[tokio::test]
    async fn test_provider_error_propagates_unchanged() {
        let transport = RecordingTransport::failing(400, "Invalid amount");

        let options = InitiatePaymentOptions::new(100.0, "a@b.com", "USD");
        let err = transactions(&transport).initiate_payment(&options).await.unwrap_err();

        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.result(), Some("error"));
        assert_eq!(transport.calls(), 1);
    }
}
