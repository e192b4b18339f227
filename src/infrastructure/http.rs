//! HTTP implementation of the world listing API
//!
//! Endpoints (relative to the configured base URL):
//! - `GET /worlds`      → JSON array of worlds
//! - `GET /worlds/{id}` → JSON world, 404 if unknown

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::domain::World;
use crate::infrastructure::traits::WorldApi;
use crate::infrastructure::{InfraError, InfraResult};

const WORLDS_PATH: &str = "worlds";

/// `WorldApi` backed by the host's REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpWorldApi {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpWorldApi {
    /// Create a client for the host at `base_url`.
    ///
    /// `timeout` bounds each request including reading the body.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, http })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> InfraResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| InfraError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, url: &Url, cancel: &CancellationToken) -> InfraResult<Response> {
        debug!(%url, "GET");
        let request = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send();
        let response = cancellable(cancel, request)
            .await?
            .map_err(|e| InfraError::transport(format!("GET {url}"), e))?;
        debug!(%url, status = %response.status(), "response");
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(
        response: Response,
        cancel: &CancellationToken,
    ) -> InfraResult<T> {
        let url = response.url().clone();
        cancellable(cancel, response.json::<T>())
            .await?
            .map_err(|e| InfraError::transport(format!("read response from {url}"), e))
    }

    async fn api_error(response: Response, cancel: &CancellationToken) -> InfraError {
        let status = response.status();
        let body = match cancellable(cancel, response.text()).await {
            Ok(text) => text.unwrap_or_default(),
            Err(cancelled) => return cancelled,
        };
        InfraError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        }
    }
}

#[async_trait]
impl WorldApi for HttpWorldApi {
    #[instrument(level = "debug", skip(self, cancel))]
    async fn list_worlds(&self, cancel: &CancellationToken) -> InfraResult<Vec<World>> {
        let url = self.endpoint(&[WORLDS_PATH])?;
        let response = self.send(&url, cancel).await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response, cancel).await);
        }
        Self::read_json(response, cancel).await
    }

    #[instrument(level = "debug", skip(self, cancel))]
    async fn get_world(&self, id: &str, cancel: &CancellationToken) -> InfraResult<World> {
        let url = self.endpoint(&[WORLDS_PATH, id])?;
        let response = self.send(&url, cancel).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(InfraError::NotFound(format!("No world with ID \"{id}\" found")));
        }
        if !response.status().is_success() {
            return Err(Self::api_error(response, cancel).await);
        }
        Self::read_json(response, cancel).await
    }
}

/// Race `fut` against the cancellation token; cancellation wins ties.
async fn cancellable<F: Future>(cancel: &CancellationToken, fut: F) -> InfraResult<F::Output> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(InfraError::Cancelled),
        out = fut => Ok(out),
    }
}

/// Extract a human-readable message from an error response body.
///
/// Prefers a `message`, `title` or `detail` string in a JSON body, then the raw
/// body text, then the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(body) {
        for key in ["message", "title", "detail"] {
            if let Some(serde_json::Value::String(text)) = fields.get(key) {
                if !text.trim().is_empty() {
                    return text.clone();
                }
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpWorldApi {
        HttpWorldApi::new(Url::parse(base).unwrap(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn given_base_without_path_when_building_endpoint_then_appends_segments() {
        let url = api("http://localhost:5000").endpoint(&[WORLDS_PATH, "w-1"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/worlds/w-1");
    }

    #[test]
    fn given_base_with_trailing_slash_path_when_building_endpoint_then_keeps_prefix() {
        let url = api("http://host:8080/api/").endpoint(&[WORLDS_PATH]).unwrap();
        assert_eq!(url.as_str(), "http://host:8080/api/worlds");
    }

    #[test]
    fn given_id_with_reserved_chars_when_building_endpoint_then_percent_encodes() {
        let url = api("http://localhost:5000").endpoint(&[WORLDS_PATH, "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/worlds/a%2Fb%20c");
    }

    #[tokio::test]
    async fn given_base_without_path_support_when_listing_then_invalid_base_url() {
        let api = api("mailto:ops@example.org");

        let err = api
            .list_worlds(&CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, InfraError::InvalidBaseUrl(ref url) if url == "mailto:ops@example.org"));
    }

    #[test]
    fn given_json_error_body_when_extracting_message_then_uses_message_field() {
        let msg = error_message(
            StatusCode::BAD_REQUEST,
            r#"{"title":"Bad","message":"world is stopping"}"#,
        );
        assert_eq!(msg, "world is stopping");
    }

    #[test]
    fn given_plain_body_when_extracting_message_then_uses_text() {
        let msg = error_message(StatusCode::INTERNAL_SERVER_ERROR, "  boom \n");
        assert_eq!(msg, "boom");
    }

    #[test]
    fn given_empty_body_when_extracting_message_then_uses_reason() {
        let msg = error_message(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(msg, "Service Unavailable");
    }

    #[tokio::test]
    async fn given_cancelled_token_when_racing_then_cancellation_wins() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = cancellable(&cancel, async { 42 }).await;
        assert!(matches!(result, Err(InfraError::Cancelled)));
    }
}
