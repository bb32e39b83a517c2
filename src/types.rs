//! Type definitions for the QCS SDK.
//!
//! This module contains the response types returned by both clients.
//! Request bodies are private to the operation that sends them.

use serde::{Deserialize, Serialize};

/// A serial-number record held by the service.
///
/// Returned by [`AdminClient::get_all_records`](crate::AdminClient::get_all_records).
/// The `key` field is empty until a device has claimed the serial number.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnRecord {
    /// The serial number.
    #[serde(rename = "sn")]
    pub serial_number: String,
    /// Hex-encoded key issued to the device that claimed this serial number.
    pub key: String,
    /// Free-form note attached by an administrator.
    pub note: String,
}

/// Response from creating a serial number.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateSnResponse {
    /// Confirmation message from the server.
    pub msg: String,
    /// The serial number that was registered.
    pub serial_number: String,
}

/// Response from generating serial numbers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateSnResponse {
    /// Confirmation message from the server.
    pub msg: String,
    /// The serial numbers the server generated.
    pub serial_numbers: Vec<String>,
}

/// Response from updating the note of a serial number.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateSnNoteResponse {
    /// Confirmation message from the server.
    pub msg: String,
    /// The note as stored by the server.
    pub note: String,
}

/// Response from a certificate application.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApplyCertResponse {
    /// Hex-encoded key issued for the device.
    pub key: String,
    /// Base64-encoded signature over the key.
    pub signature: String,
}

/// Response from a temporary-permit application.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApplyTempPermitResponse {
    /// Seconds until the permit expires.
    pub remaining_time: i64,
    /// Permit status as reported by the server, e.g. "activated".
    pub status: String,
}
