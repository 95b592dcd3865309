use crate::config::ClientOptions;
use crate::domain::model::{ApiRequest, ApiResponse, HttpMethod};
use crate::domain::ports::Transport;
use crate::utils::error::{Result, ZuriPayError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("zuripay-rust/", env!("CARGO_PKG_VERSION"));
const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// The shared HTTP client: base URL, bearer token and extra headers are fixed at construction.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(api_key: &str, options: &ClientOptions) -> Result<Self> {
        validate_non_empty_string("api_key", api_key)?;
        options.validate()?;

        let base_url = Url::parse(options.base_url())
            .map_err(|e| ZuriPayError::config(format!("base_url: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ZuriPayError::config(format!(
                "base_url: '{}' cannot be used as a base URL",
                base_url
            )));
        }

        let mut builder = Client::builder()
            .default_headers(build_headers(api_key, &options.headers)?)
            .user_agent(USER_AGENT);
        if let Some(timeout) = options.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        tracing::debug!("Configured ZuriPay transport for {}", base_url);

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ZuriPayError::config("base_url cannot carry a path"))?;
            segments.pop_if_empty().extend(&request.segments);
        }
        Ok(url)
    }
}

fn build_headers(api_key: &str, extra: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(|_| ZuriPayError::config("api_key contains characters not allowed in a header"))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    for (name, value) in extra {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ZuriPayError::config(format!("invalid header name '{}': {}", name, e)))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| ZuriPayError::config(format!("invalid value for header '{}': {}", name, e)))?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Turns a non-success response into a [`ZuriPayError::ProviderError`].
///
/// `message` falls back from the top-level field to `error.message` to a generic
/// text; `result` falls back to `"error"`. Bodies that are not JSON are ignored.
pub fn normalize_error(status: StatusCode, body: &[u8]) -> ZuriPayError {
    let payload: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

    let message = non_empty(payload.get("message"))
        .or_else(|| non_empty(payload.pointer("/error/message")))
        .unwrap_or(UNKNOWN_ERROR_MESSAGE)
        .to_string();
    let result = non_empty(payload.get("result")).unwrap_or("error").to_string();

    tracing::warn!("❌ ZuriPay API returned {}: {} ({})", status, message, result);

    ZuriPayError::ProviderError {
        message,
        status_code: status.as_u16(),
        result,
    }
}

fn non_empty(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn decode_body(body: &[u8]) -> Result<ApiResponse> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ApiResponse::new());
    }
    Ok(serde_json::from_slice(body)?)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.endpoint(&request)?;
        tracing::debug!("📡 {} {}", request.method, url);

        let mut builder = self.client.request(to_reqwest_method(request.method), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("📡 {} {} -> {}", request.method, request.path(), status);

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(normalize_error(status, &body));
        }

        let body = response.bytes().await?;
        decode_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn transport(server: &MockServer) -> HttpTransport {
        let options = ClientOptions::default().with_base_url(server.base_url());
        HttpTransport::new("test_api_key", &options).unwrap()
    }

    #[tokio::test]
    async fn test_sends_bearer_token_and_decodes_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/wallets/list")
                .header("Authorization", "Bearer test_api_key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"result": "success", "wallets": []}));
        });

        let body = transport(&server)
            .execute(ApiRequest::get(&["wallets", "list"]))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(body.get("result"), Some(&json!("success")));
        assert_eq!(body.get("wallets"), Some(&json!([])));
    }

    #[tokio::test]
    async fn test_base_url_path_and_custom_headers() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v2/wallets")
                .header("X-Custom-Header", "test")
                .json_body(json!({"currency": "KES", "country": "KE"}));
            then.status(200).json_body(json!({"result": "success", "wallet_id": "w_1"}));
        });

        let options = ClientOptions::default()
            .with_base_url(server.url("/v2/"))
            .with_header("X-Custom-Header", "test");
        let transport = HttpTransport::new("key", &options).unwrap();

        let request = ApiRequest::post(&["wallets"])
            .with_body(&json!({"currency": "KES", "country": "KE"}))
            .unwrap();
        transport.execute(request).await.unwrap();

        api_mock.assert();
    }

    #[tokio::test]
    async fn test_custom_authorization_header_wins() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/callback/list").header("Authorization", "Token other");
            then.status(200).json_body(json!({"result": "success"}));
        });

        let options = ClientOptions::default()
            .with_base_url(server.base_url())
            .with_header("Authorization", "Token other");
        let transport = HttpTransport::new("key", &options).unwrap();
        transport.execute(ApiRequest::get(&["callback", "list"])).await.unwrap();

        api_mock.assert();
    }

    #[test]
    fn test_path_segments_are_escaped() {
        let options = ClientOptions::default().with_base_url("https://api.zuripay.app/v1/");
        let transport = HttpTransport::new("key", &options).unwrap();

        let url = transport
            .endpoint(&ApiRequest::get(&["customer", "fetch", "ref/1 a"]))
            .unwrap();

        assert_eq!(url.as_str(), "https://api.zuripay.app/v1/customer/fetch/ref%2F1%20a");
    }

    #[tokio::test]
    async fn test_query_parameters() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/payout/request/delete")
                .query_param("payout_request_id", "po_1");
            then.status(200).json_body(json!({"result": "success"}));
        });

        let request = ApiRequest::delete(&["payout", "request", "delete"])
            .with_query_param("payout_request_id", "po_1");
        transport(&server).execute(request).await.unwrap();

        api_mock.assert();
    }

    #[tokio::test]
    async fn test_provider_error_is_normalized() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/transactions");
            then.status(400)
                .json_body(json!({"message": "Invalid amount", "result": "error"}));
        });

        let err = transport(&server)
            .execute(ApiRequest::post(&["transactions"]))
            .await
            .unwrap_err();

        match err {
            ZuriPayError::ProviderError {
                message,
                status_code,
                result,
            } => {
                assert_eq!(message, "Invalid amount");
                assert_eq!(status_code, 400);
                assert_eq!(result, "error");
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_nested_error_message_fallback() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/wallets/balance");
            then.status(422).json_body(json!({
                "result": "failed",
                "error": {"type": "invalid_request", "message": "Unknown currency"}
            }));
        });

        let err = transport(&server)
            .execute(ApiRequest::get(&["wallets", "balance"]))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(422));
        assert_eq!(err.result(), Some("failed"));
        assert!(err.to_string().starts_with("Unknown currency"));
    }

    #[tokio::test]
    async fn test_non_json_error_body_uses_defaults() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/links/list");
            then.status(502).body("<html>Bad Gateway</html>");
        });

        let err = transport(&server)
            .execute(ApiRequest::get(&["links", "list"]))
            .await
            .unwrap_err();

        match err {
            ZuriPayError::ProviderError {
                message,
                status_code,
                result,
            } => {
                assert_eq!(message, UNKNOWN_ERROR_MESSAGE);
                assert_eq!(status_code, 502);
                assert_eq!(result, "error");
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_passed_through() {
        // nothing listens on port 1
        let options = ClientOptions::default().with_base_url("http://127.0.0.1:1");
        let transport = HttpTransport::new("key", &options).unwrap();

        let err = transport
            .execute(ApiRequest::get(&["wallets", "list"]))
            .await
            .unwrap_err();

        match err {
            ZuriPayError::HttpError(e) => assert!(e.is_connect() || e.is_request()),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_success_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/callback/delete/cb_1");
            then.status(204);
        });

        let body = transport(&server)
            .execute(ApiRequest::delete(&["callback", "delete", "cb_1"]))
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        assert!(HttpTransport::new("", &ClientOptions::default()).is_err());
        assert!(HttpTransport::new("key", &ClientOptions::default().with_base_url("mailto:x@y.z")).is_err());
        assert!(HttpTransport::new(
            "key",
            &ClientOptions::default().with_header("Bad Header", "v")
        )
        .is_err());
    }

    #[test]
    fn test_normalize_error_ignores_empty_message() {
        let err = normalize_error(
            StatusCode::BAD_REQUEST,
            br#"{"message": "", "error": {"message": "Nested"}}"#,
        );
        assert!(err.to_string().starts_with("Nested"));
        assert_eq!(err.result(), Some("error"));
    }
}
