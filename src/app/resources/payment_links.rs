use crate::domain::model::{ApiRequest, ApiResponse};
use crate::domain::options::{CreatePaymentLinkOptions, DateRangeParams, UpdatePaymentLinkOptions};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_str, RequestOptions};
use serde_json::json;
use std::sync::Arc;

/// Hosted payment links.
#[derive(Clone)]
pub struct PaymentLinks {
    transport: Arc<dyn Transport>,
}

impl PaymentLinks {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn create_payment_link(&self, options: &CreatePaymentLinkOptions) -> Result<ApiResponse> {
        options.validate()?;

        let request = ApiRequest::post(&["links"]).with_body(options)?;
        self.transport.execute(request).await
    }

    pub async fn list_payment_links(&self, params: &DateRangeParams) -> Result<ApiResponse> {
        params.validate()?;

        let request = ApiRequest::get(&["links", "list"]).with_query(params)?;
        self.transport.execute(request).await
    }

    pub async fn get_payment_link(&self, payment_link_id: &str) -> Result<ApiResponse> {
        validate_required_str("payment_link_id", payment_link_id)?;

        let request = ApiRequest::get(&["links", "fetch"]).with_query_param("payment_link_id", payment_link_id);
        self.transport.execute(request).await
    }

    /// The link id is part of the body, not the path.
    pub async fn update_payment_link(&self, options: &UpdatePaymentLinkOptions) -> Result<ApiResponse> {
        options.validate()?;

        let request = ApiRequest::put(&["links", "update"]).with_body(options)?;
        self.transport.execute(request).await
    }

    pub async fn delete_payment_link(&self, payment_link_id: &str) -> Result<ApiResponse> {
        validate_required_str("payment_link_id", payment_link_id)?;

        let request = ApiRequest::delete(&["links", "delete"])
            .with_body(&json!({ "payment_link_id": payment_link_id }))?;
        self.transport.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::recording::RecordingTransport;
    use crate::domain::model::HttpMethod;

    fn links(transport: &RecordingTransport) -> PaymentLinks {
        PaymentLinks::new(Arc::new(transport.clone()))
    }

    #[tokio::test]
    async fn test_create_payment_link() {
        let transport = RecordingTransport::replying(json!({
            "result": "success",
            "payment_link_id": "pl_1",
            "hosted_payment_link": "https://pay.zuripay.app/pl_1"
        }));

        let options = CreatePaymentLinkOptions {
            amount: 500.0,
            currency: "KES".to_string(),
        };
        let body = links(&transport).create_payment_link(&options).await.unwrap();

        assert_eq!(body.get("hosted_payment_link"), Some(&json!("https://pay.zuripay.app/pl_1")));
        assert_eq!(transport.last_request().path(), "/links");
    }

    #[tokio::test]
    async fn test_create_payment_link_requires_currency() {
        let transport = RecordingTransport::replying(json!({}));

        let options = CreatePaymentLinkOptions {
            amount: 500.0,
            currency: String::new(),
        };
        let err = links(&transport).create_payment_link(&options).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_get_payment_link_uses_query() {
        let transport = RecordingTransport::replying(json!({"result": "success"}));

        links(&transport).get_payment_link("pl_1").await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.path(), "/links/fetch");
        assert_eq!(request.query_value("payment_link_id"), Some("pl_1"));
    }

    #[tokio::test]
    async fn test_update_payment_link_sends_id_in_body() {
        let transport = RecordingTransport::replying(json!({"result": "success"}));

        let options = UpdatePaymentLinkOptions {
            payment_link_id: "pl_1".to_string(),
            status: Some("inactive".to_string()),
            ..Default::default()
        };
        links(&transport).update_payment_link(&options).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path(), "/links/update");
        assert_eq!(request.body, Some(json!({"payment_link_id": "pl_1", "status": "inactive"})));
    }

    #[tokio::test]
    async fn test_delete_payment_link_sends_id_in_body() {
        let transport = RecordingTransport::replying(json!({"result": "success"}));

        links(&transport).delete_payment_link("pl_1").await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path(), "/links/delete");
        assert_eq!(request.body, Some(json!({"payment_link_id": "pl_1"})));
        assert!(request.query.is_empty());
    }

    #[tokio::test]
    async fn test_list_payment_links() {
        let transport = RecordingTransport::replying(json!({"result": "success", "payment_links": []}));

        let params = DateRangeParams {
            limit: Some(5),
            ..Default::default()
        };
        links(&transport).list_payment_links(&params).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.path(), "/links/list");
        assert_eq!(request.query_value("limit"), Some("5"));
    }
}
