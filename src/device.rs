//! Certificate and permit applications.
//!
//! This module provides the DeviceClient used by devices and services
//! to request a permanent certificate or a temporary permit.

use crate::error::Result;
use crate::transport::{base_url, Transport};
use crate::types::{ApplyCertResponse, ApplyTempPermitResponse};
use serde::Serialize;

/// Connection configuration for [`DeviceClient`].
///
/// Unlike [`AdminConfig`](crate::AdminConfig) there is no runtime code;
/// device requests authenticate with the access token alone.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Hostname or IP address of the QCS server.
    pub host: String,
    /// TCP port of the QCS server.
    pub port: u16,
    /// Path prefix of the API, e.g. "/api/v1".
    pub api_path: String,
    /// Use HTTPS instead of HTTP.
    pub tls: bool,
    /// Device access token, sent as `X-Access-Token`.
    pub access_token: String,
}

/// Device-side client for the QCS application API.
///
/// # Example
///
/// ```rust,no_run
/// use qcs::{DeviceClient, DeviceConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let device = DeviceClient::new(DeviceConfig {
///         host: "127.0.0.1".to_string(),
///         port: 33333,
///         api_path: "/api/v1".to_string(),
///         tls: false,
///         access_token: "QcsTestToken...".to_string(),
///     });
///
///     let cert = device
///         .apply_cert(
///             "XXXX-XXXX-XXXX-XXXX-XXXX-XXXX",
///             "ASUSTeK Computer Inc.",
///             "ROG STRIX Z790-A GAMING WIFI",
///             "AA:BB:CC:DD:EE:FF",
///         )
///         .await?;
///     println!("key: {}", cert.key);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct DeviceClient {
    transport: Transport,
}

impl DeviceClient {
    /// Create a new device client.
    ///
    /// The base URL is computed once from the configuration and reused
    /// for every operation.
    pub fn new(config: DeviceConfig) -> Self {
        let transport = Transport::new(
            base_url(&config.host, config.port, &config.api_path, config.tls),
            config.access_token,
            None,
        );
        Self { transport }
    }

    /// The URL prefix this client issues its requests against.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Apply for a certificate, claiming a serial number for this device.
    ///
    /// # Arguments
    ///
    /// * `sn` - Serial number obtained from purchasing the software
    /// * `board_producer` - Motherboard manufacturer
    /// * `board_name` - Motherboard model
    /// * `mac_address` - Physical ethernet MAC address
    pub async fn apply_cert(
        &self,
        sn: &str,
        board_producer: &str,
        board_name: &str,
        mac_address: &str,
    ) -> Result<ApplyCertResponse> {
        #[derive(Serialize)]
        struct Request<'a> {
            serial_number: &'a str,
            board_producer: &'a str,
            board_name: &'a str,
            mac_address: &'a str,
        }

        self.transport
            .post(
                "/apply/cert",
                &Request {
                    serial_number: sn,
                    board_producer,
                    board_name,
                    mac_address,
                },
            )
            .await
    }

    /// Apply for a temporary permit, a time-limited stand-in for a
    /// certificate keyed to the board identity alone.
    ///
    /// # Arguments
    ///
    /// * `board_producer` - Motherboard manufacturer
    /// * `board_name` - Motherboard model
    /// * `mac_address` - Physical ethernet MAC address
    pub async fn apply_temp_permit(
        &self,
        board_producer: &str,
        board_name: &str,
        mac_address: &str,
    ) -> Result<ApplyTempPermitResponse> {
        #[derive(Serialize)]
        struct Request<'a> {
            board_producer: &'a str,
            board_name: &'a str,
            mac_address: &'a str,
        }

        self.transport
            .post(
                "/apply/temp-permit",
                &Request {
                    board_producer,
                    board_name,
                    mac_address,
                },
            )
            .await
    }
}
