//! HTTP plumbing shared by the admin and device clients.
//!
//! Owns the base URL and authentication headers computed at client
//! construction, executes requests, and maps responses into typed
//! results. The wire contract is uniform across all operations: status
//! 200 is the sole success indicator, and every other status carries a
//! JSON body with a single `error` field.

use crate::error::{QcsError, Result};
use reqwest::{header, Client as HttpClient};
use serde::Deserialize;
use tracing::debug;

const HEADER_ACCESS_TOKEN: &str = "X-Access-Token";
const HEADER_RUNTIME_CODE: &str = "X-Runtime-Code";

/// Compute the URL prefix shared by every operation of a client.
///
/// The scheme is `https` iff `tls` is set. Computed once per client and
/// never recomputed.
pub(crate) fn base_url(host: &str, port: u16, api_path: &str, tls: bool) -> String {
    let scheme = if tls { "https" } else { "http" };
    format!("{scheme}://{host}:{port}{api_path}")
}

/// Immutable connection state behind a client instance.
#[derive(Clone)]
pub(crate) struct Transport {
    http: HttpClient,
    base_url: String,
    access_token: String,
    /// `Some` for admin connections (the header is sent even when the
    /// code is empty), `None` for device connections (header omitted).
    runtime_code: Option<String>,
}

impl Transport {
    pub(crate) fn new(
        base_url: String,
        access_token: String,
        runtime_code: Option<String>,
    ) -> Self {
        let http = HttpClient::builder()
            .user_agent(format!("qcs-rust/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url,
            access_token,
            runtime_code,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue an authenticated GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "issuing GET request");

        let response = self
            .authenticated(self.http.get(&url))
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Issue an authenticated POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "issuing POST request");

        let response = self
            .authenticated(self.http.post(&url))
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    fn authenticated(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header(HEADER_ACCESS_TOKEN, &self.access_token);
        match &self.runtime_code {
            Some(code) => request.header(HEADER_RUNTIME_CODE, code),
            None => request,
        }
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        // 200 is the only success status; 4xx and 5xx are treated alike.
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, body_len = body.len(), "received response");

        if status == 200 {
            serde_json::from_slice(&body)
                .map_err(|source| QcsError::MalformedResponse { status, source })
        } else {
            let rejection: ErrorBody = serde_json::from_slice(&body)
                .map_err(|source| QcsError::MalformedResponse { status, source })?;
            Err(QcsError::ServerRejected {
                status,
                message: rejection.error,
            })
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}
