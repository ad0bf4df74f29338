//! HTTP food-nutrition client
//!
//! Queries the nutrient endpoint by food name:
//! `GET {base_url}?query=<name>` returning `{ "item": ..., "per100": {...} }`.

use std::time::Duration;

use async_trait::async_trait;

use super::lookup::{FoodRecord, FoodSource, LookupError};

/// Header carrying the optional API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Nutrient endpoint client configuration
#[derive(Debug, Clone)]
pub struct NutrientClientConfig {
    /// Endpoint URL
    pub base_url: String,
    /// Sent as `x-api-key` when present
    pub api_key: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

/// [`FoodSource`] backed by the HTTP nutrient endpoint
#[derive(Debug, Clone)]
pub struct HttpFoodSource {
    config: NutrientClientConfig,
    http_client: reqwest::Client,
}

impl HttpFoodSource {
    /// Build the client. Fails only if the TLS backend cannot be initialized.
    pub fn new(config: NutrientClientConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

/// Decode a response body into a [`FoodRecord`]
pub fn decode_food_record(body: &str) -> Result<FoodRecord, LookupError> {
    serde_json::from_str(body)
        .map_err(|e| LookupError::Failed(format!("Invalid response body: {}", e)))
}

#[async_trait]
impl FoodSource for HttpFoodSource {
    async fn find(&self, query: &str) -> Result<FoodRecord, LookupError> {
        let mut request = self
            .http_client
            .get(&self.config.base_url)
            .query(&[("query", query)]);

        if let Some(key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(query, error = %e, "Nutrient endpoint unreachable");
            LookupError::from(e)
        })?;

        // Only a body without `per100` means not found; every error status is a failure
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(query, %status, "Nutrient endpoint returned an error");
            return Err(LookupError::Failed(format!("HTTP {}: {}", status, body)));
        }

        let body = response.text().await?;
        decode_food_record(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let body = r#"{
            "item": "Banana, raw",
            "per100": {"calories": 89, "protein": 1.1, "carbs": 22.8, "fat": 0.3, "fiber": 2.6}
        }"#;
        let record = decode_food_record(body).unwrap();
        assert_eq!(record.item.as_deref(), Some("Banana, raw"));
        let per100 = record.per100.unwrap();
        assert_eq!(per100.calories, 89.0);
        assert_eq!(per100.fiber, Some(2.6));
    }

    #[test]
    fn test_decode_record_without_per100() {
        let record = decode_food_record(r#"{"item": "Unknown food"}"#).unwrap();
        assert!(record.per100.is_none());

        let record = decode_food_record("{}").unwrap();
        assert!(record.item.is_none());
        assert!(record.per100.is_none());
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let body = r#"{"item": "Egg", "source": "demo", "per100": {"calories": 155, "protein": 13, "carbs": 1.1, "fat": 11, "sugar": 1.1}}"#;
        let record = decode_food_record(body).unwrap();
        assert_eq!(record.per100.unwrap().protein, 13.0);
    }

    #[test]
    fn test_decode_invalid_body_is_failure() {
        let err = decode_food_record("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, LookupError::Failed(_)));

        // Non-numeric nutrient values are a malformed response, not a miss
        let err = decode_food_record(r#"{"item": "x", "per100": {"calories": "lots"}}"#).unwrap_err();
        assert!(matches!(err, LookupError::Failed(_)));
    }

    // ------------------------------------------------------------------------
    // Against a local listener
    // ------------------------------------------------------------------------

    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
    }

    /// Accept one connection, answer with `response` after `delay`, and return the raw request
    async fn serve_once(response: String, delay: Duration) -> (SocketAddr, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            tokio::time::sleep(delay).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request).to_lowercase()
        });

        (addr, handle)
    }

    fn source_for(addr: SocketAddr, api_key: Option<&str>, timeout: Duration) -> HttpFoodSource {
        HttpFoodSource::new(NutrientClientConfig {
            base_url: format!("http://{}/api/nutrients", addr),
            api_key: api_key.map(str::to_string),
            timeout,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_decodes_success_and_sends_query() {
        let body = r#"{"item": "Banana, raw", "per100": {"calories": 89, "protein": 1.1, "carbs": 22.8, "fat": 0.3}}"#;
        let (addr, server) = serve_once(http_response("200 OK", body), Duration::ZERO).await;
        let source = source_for(addr, None, Duration::from_secs(5));

        let record = source.find("banana").await.unwrap();
        assert_eq!(record.item.as_deref(), Some("Banana, raw"));
        assert_eq!(record.per100.unwrap().calories, 89.0);

        let request = server.await.unwrap();
        assert!(request.starts_with("get /api/nutrients?query=banana "));
        assert!(!request.contains(API_KEY_HEADER));
    }

    #[tokio::test]
    async fn test_find_sends_api_key_when_configured() {
        let (addr, server) = serve_once(http_response("200 OK", "{}"), Duration::ZERO).await;
        let source = source_for(addr, Some("secret"), Duration::from_secs(5));

        source.find("oats").await.unwrap();

        let request = server.await.unwrap();
        assert!(request.contains("x-api-key: secret"));
    }

    #[tokio::test]
    async fn test_find_http_404_is_failure() {
        let (addr, _server) = serve_once(http_response("404 Not Found", "no route"), Duration::ZERO).await;
        let source = source_for(addr, None, Duration::from_secs(5));

        let err = source.find("banana").await.unwrap_err();
        assert!(matches!(err, LookupError::Failed(ref msg) if msg.contains("404")));
    }

    #[tokio::test]
    async fn test_find_server_error_is_failure() {
        let (addr, _server) = serve_once(http_response("503 Service Unavailable", ""), Duration::ZERO).await;
        let source = source_for(addr, None, Duration::from_secs(5));

        let err = source.find("banana").await.unwrap_err();
        assert!(matches!(err, LookupError::Failed(_)));
    }

    #[tokio::test]
    async fn test_find_without_per100_reaches_not_found() {
        use crate::nutrition::{lookup_nutrients, QuantityUnit};

        let (addr, _server) = serve_once(http_response("200 OK", r#"{"item": "Unknown"}"#), Duration::ZERO).await;
        let source = source_for(addr, None, Duration::from_secs(5));

        let err = lookup_nutrients(&source, "zzz", 100.0, QuantityUnit::Grams)
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::NotFound { ref query } if query == "zzz"));
    }

    #[tokio::test]
    async fn test_find_timeout_is_failure() {
        let (addr, server) = serve_once(http_response("200 OK", "{}"), Duration::from_secs(5)).await;
        let source = source_for(addr, None, Duration::from_millis(200));

        let err = source.find("banana").await.unwrap_err();
        assert!(matches!(err, LookupError::Failed(ref msg) if msg.contains("timed out")));
        server.abort();
    }
}
