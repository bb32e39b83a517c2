//! # QCS Rust SDK
//!
//! Official Rust SDK for the QCS certificate issuance service.
//!
//! QCS associates serial numbers with device certificates. Administrators
//! manage the pool of serial numbers; devices claim one to obtain a signed
//! key, or request a temporary permit while waiting for one.
//!
//! The SDK is two thin, stateless clients over the QCS REST API:
//! [`AdminClient`] for serial-number administration and [`DeviceClient`]
//! for certificate and permit applications. Each operation is a single
//! HTTP round trip; there are no retries and no shared mutable state, so
//! a client can be cloned and used from concurrent tasks freely.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qcs::{AdminClient, AdminConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let admin = AdminClient::new(AdminConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 33333,
//!         api_path: "/api/v1".to_string(),
//!         tls: false,
//!         access_token: "0b09b6dc41f61813...".to_string(),
//!         runtime_code: None,
//!     });
//!
//!     // Register a serial number picked by the administrator.
//!     let created = admin.create_sn("XXXX-XXXX-XXXX-XXXX-XXXX-XXXX", None).await?;
//!     println!("{}", created.msg);
//!
//!     // Or let the server generate a batch.
//!     let generated = admin.generate_sn(2, Some("restock")).await?;
//!     for sn in &generated.serial_numbers {
//!         println!("generated {sn}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Device side
//!
//! ```rust,no_run
//! use qcs::{DeviceClient, DeviceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let device = DeviceClient::new(DeviceConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 33333,
//!         api_path: "/api/v1".to_string(),
//!         tls: false,
//!         access_token: "QcsTestToken...".to_string(),
//!     });
//!
//!     let permit = device
//!         .apply_temp_permit("Acme", "BoardX", "AA:BB:CC:DD:EE:FF")
//!         .await?;
//!     println!("{} ({}s left)", permit.status, permit.remaining_time);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, QcsError>`. A rejection by the server
//! keeps the wire-level `QCS::Error:` message and additionally carries
//! the HTTP status code:
//!
//! ```rust,no_run
//! use qcs::{AdminClient, QcsError};
//!
//! # async fn example(admin: AdminClient) {
//! match admin.create_sn("ABC-123", None).await {
//!     Ok(created) => println!("{}", created.msg),
//!     Err(QcsError::ServerRejected { status, message }) => {
//!         println!("server said no ({status}): {message}")
//!     }
//!     Err(e) => println!("transport failed: {e}"),
//! }
//! # }
//! ```

pub mod admin;
pub mod device;
pub mod error;
pub mod types;

mod transport;

// Re-export main types at the crate root
pub use admin::{AdminClient, AdminConfig};
pub use device::{DeviceClient, DeviceConfig};
pub use error::{QcsError, Result};

// Re-export types module for easy access
pub use types::{
    ApplyCertResponse, ApplyTempPermitResponse, CreateSnResponse, GenerateSnResponse, SnRecord,
    UpdateSnNoteResponse,
};
