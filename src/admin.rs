//! Serial-number administration.
//!
//! This module provides the AdminClient for managing the serial-number
//! lifecycle: creating, generating, listing, and annotating serial
//! numbers.

use crate::error::Result;
use crate::transport::{base_url, Transport};
use crate::types::{CreateSnResponse, GenerateSnResponse, SnRecord, UpdateSnNoteResponse};
use serde::{Deserialize, Serialize};

const DEFAULT_REASON: &str = "none";

/// Connection configuration for [`AdminClient`].
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Hostname or IP address of the QCS server.
    pub host: String,
    /// TCP port of the QCS server.
    pub port: u16,
    /// Path prefix of the API, e.g. "/api/v1".
    pub api_path: String,
    /// Use HTTPS instead of HTTP.
    pub tls: bool,
    /// Administrator access token, sent as `X-Access-Token`.
    pub access_token: String,
    /// Runtime code, sent as `X-Runtime-Code`. When `None`, the header
    /// is still sent with an empty value.
    pub runtime_code: Option<String>,
}

/// Administrative client for the QCS serial-number API.
///
/// Holds only immutable connection state after construction, so one
/// instance can be shared freely across concurrent call sites.
///
/// # Example
///
/// ```rust,no_run
/// use qcs::{AdminClient, AdminConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let admin = AdminClient::new(AdminConfig {
///         host: "127.0.0.1".to_string(),
///         port: 33333,
///         api_path: "/api/v1".to_string(),
///         tls: false,
///         access_token: "0b09b6dc41f61813...".to_string(),
///         runtime_code: None,
///     });
///
///     let created = admin.create_sn("XXXX-XXXX-XXXX-XXXX-XXXX-XXXX", None).await?;
///     println!("{}: {}", created.msg, created.serial_number);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct AdminClient {
    transport: Transport,
}

impl AdminClient {
    /// Create a new admin client.
    ///
    /// The base URL is computed once from the configuration and reused
    /// for every operation.
    pub fn new(config: AdminConfig) -> Self {
        let transport = Transport::new(
            base_url(&config.host, config.port, &config.api_path, config.tls),
            config.access_token,
            Some(config.runtime_code.unwrap_or_default()),
        );
        Self { transport }
    }

    /// The URL prefix this client issues its requests against.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Register a serial number chosen by the administrator.
    ///
    /// # Arguments
    ///
    /// * `sn` - The serial number to register
    /// * `reason` - Reason for creating it; `"none"` when omitted
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use qcs::AdminClient;
    /// # async fn example(admin: AdminClient) -> qcs::Result<()> {
    /// let created = admin.create_sn("ABC-123", Some("For testing.")).await?;
    /// println!("{}", created.msg);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_sn(&self, sn: &str, reason: Option<&str>) -> Result<CreateSnResponse> {
        #[derive(Serialize)]
        struct Request<'a> {
            serial_number: &'a str,
            reason: &'a str,
        }

        self.transport
            .post(
                "/sn/create",
                &Request {
                    serial_number: sn,
                    reason: reason.unwrap_or(DEFAULT_REASON),
                },
            )
            .await
    }

    /// Have the server generate `count` serial numbers randomly.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of serial numbers to generate
    /// * `reason` - Reason for generating them; `"none"` when omitted
    pub async fn generate_sn(&self, count: u32, reason: Option<&str>) -> Result<GenerateSnResponse> {
        #[derive(Serialize)]
        struct Request<'a> {
            count: u32,
            reason: &'a str,
        }

        self.transport
            .post(
                "/sn/generate",
                &Request {
                    count,
                    reason: reason.unwrap_or(DEFAULT_REASON),
                },
            )
            .await
    }

    /// Fetch every serial-number record known to the service.
    pub async fn get_all_records(&self) -> Result<Vec<SnRecord>> {
        #[derive(Deserialize)]
        struct Response {
            data: Vec<SnRecord>,
        }

        let response: Response = self.transport.get("/sn/get-all").await?;
        Ok(response.data)
    }

    /// Fetch the serial numbers not yet claimed by any device.
    pub async fn get_available_sn(&self) -> Result<Vec<String>> {
        #[derive(Deserialize)]
        struct Response {
            data: Vec<String>,
        }

        let response: Response = self.transport.get("/sn/get-available").await?;
        Ok(response.data)
    }

    /// Update the note attached to a serial number.
    ///
    /// # Arguments
    ///
    /// * `sn` - The serial number to update
    /// * `note` - The new note
    pub async fn update_sn_note(&self, sn: &str, note: &str) -> Result<UpdateSnNoteResponse> {
        #[derive(Serialize)]
        struct Request<'a> {
            serial_number: &'a str,
            note: &'a str,
        }

        self.transport
            .post(
                "/sn/update",
                &Request {
                    serial_number: sn,
                    note,
                },
            )
            .await
    }
}
