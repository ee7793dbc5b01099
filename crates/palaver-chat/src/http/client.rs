//! HTTP backend struct, endpoint building, and error mapping.

use crate::ExchangeError;

/// Longest error body kept in `ExchangeError::Status`.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// `ChatBackend` over HTTP.
///
/// No request timeout is configured; a request runs until the transport
/// resolves or fails.
pub struct HttpBackend {
    pub(crate) base_url: String,
    pub(crate) http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ExchangeError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("palaver/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ExchangeError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(base_url, http))
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Turn a non-success response into `ExchangeError::Status`.
    pub(crate) async fn status_error(response: reqwest::Response) -> ExchangeError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let body = text.chars().take(MAX_ERROR_BODY_CHARS).collect::<String>();
        ExchangeError::Status { status, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let backend = HttpBackend::new("http://localhost:8000/").unwrap();
        assert_eq!(backend.endpoint("chat"), "http://localhost:8000/chat");
        assert_eq!(backend.endpoint("/clear_history"), "http://localhost:8000/clear_history");
    }

    #[test]
    fn base_url_keeps_path_prefix() {
        let backend = HttpBackend::new("https://example.com/api").unwrap();
        assert_eq!(backend.base_url(), "https://example.com/api");
        assert_eq!(backend.endpoint("chat"), "https://example.com/api/chat");
    }

    #[test]
    fn root_endpoint() {
        let backend = HttpBackend::new("http://localhost:8000").unwrap();
        assert_eq!(backend.endpoint(""), "http://localhost:8000/");
    }
}
