//! ChatBackend trait implementation for HttpBackend.

use async_trait::async_trait;
use palaver_common::SessionId;
use tracing::debug;

use crate::protocol::{ClearHistoryRequest, ClearHistoryResponse};
use crate::{ChatBackend, ExchangeError, ExchangeRequest, ExchangeResponse};

use super::client::HttpBackend;

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn exchange(&self, request: &ExchangeRequest) -> Result<ExchangeResponse, ExchangeError> {
        let url = self.endpoint("chat");
        debug!(%url, session = %request.session_id, "chat request");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ExchangeError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<ExchangeResponse>()
            .await
            .map_err(|e| ExchangeError::Decode(e.to_string()))
    }

    async fn clear_history(&self, session: &SessionId) -> Result<String, ExchangeError> {
        let url = self.endpoint("clear_history");
        debug!(%url, %session, "clear history request");

        let response = self
            .http
            .post(&url)
            .json(&ClearHistoryRequest { session_id: session })
            .send()
            .await
            .map_err(|e| ExchangeError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let body: ClearHistoryResponse = response
            .json()
            .await
            .map_err(|e| ExchangeError::Decode(e.to_string()))?;
        Ok(body.message)
    }

    async fn ping(&self) -> Result<(), ExchangeError> {
        let response = self
            .http
            .get(self.endpoint(""))
            .send()
            .await
            .map_err(|e| ExchangeError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }
        Ok(())
    }
}
