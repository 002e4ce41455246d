use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::{endpoint::EndpointSpec, error::ReportError};

/// Network seam. Production uses [`HttpTransport`]; tests substitute a
/// canned implementation to avoid the wire.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, ReportError>;
}

/// reqwest-backed transport. No retries; any transport-level failure is
/// terminal for the fetch attempt.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, ReportError> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ReportError::transport(format!("failed to send request: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ReportError::transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(ReportError::transport(format!(
                "request failed with status {status}: {}",
                truncate_body(&body),
            )));
        }

        Ok(body)
    }
}

/// Fetch the payload for one endpoint spec and decode it as a JSON tree.
pub async fn fetch(transport: &dyn Transport, spec: &EndpointSpec) -> Result<Value, ReportError> {
    let body = transport.get(&spec.request_url()).await?;
    let payload = serde_json::from_str(&body)?;
    Ok(payload)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Feature;
    use std::sync::Mutex;

    struct CannedTransport {
        body: &'static str,
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn get(&self, url: &str) -> Result<String, ReportError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(self.body.to_string())
        }
    }

    #[tokio::test]
    async fn fetch_requests_the_spec_url_and_decodes_json() {
        let transport = CannedTransport {
            body: r#"{"sun_phase": {}}"#,
            urls: Mutex::new(Vec::new()),
        };
        let spec = EndpointSpec::new("KEY", "KJFK", vec![Feature::Astronomy]);

        let payload = fetch(&transport, &spec).await.unwrap();

        assert!(payload.get("sun_phase").is_some());
        let urls = transport.urls.lock().unwrap();
        assert_eq!(urls.as_slice(), [spec.request_url()]);
    }

    #[tokio::test]
    async fn fetch_surfaces_decode_errors() {
        let transport =
            CannedTransport { body: "<html>not json</html>", urls: Mutex::new(Vec::new()) };
        let spec = EndpointSpec::new("KEY", "KJFK", vec![Feature::Conditions]);

        let err = fetch(&transport, &spec).await.unwrap_err();
        assert!(matches!(err, ReportError::Decode { .. }));
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);
        assert!(truncated.len() < body.len());
        assert!(truncated.ends_with("..."));
    }
}
