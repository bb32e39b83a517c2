//! Basic usage example for the QCS SDK.
//!
//! This example demonstrates:
//! - Creating an admin client and a device client
//! - Registering and generating serial numbers
//! - Listing records and available serial numbers
//! - Applying for a certificate and a temporary permit
//!
//! Run against a local QCS server with:
//! ```bash
//! QCS_ADMIN_TOKEN=... QCS_DEVICE_TOKEN=... cargo run --example basic
//! ```

use qcs::{AdminClient, AdminConfig, DeviceClient, DeviceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let admin_token = std::env::var("QCS_ADMIN_TOKEN")
        .expect("QCS_ADMIN_TOKEN environment variable required");
    let device_token = std::env::var("QCS_DEVICE_TOKEN")
        .expect("QCS_DEVICE_TOKEN environment variable required");

    let admin = AdminClient::new(AdminConfig {
        host: "127.0.0.1".to_string(),
        port: 33333,
        api_path: "/api/v1".to_string(),
        tls: false,
        access_token: admin_token,
        runtime_code: None,
    });

    let device = DeviceClient::new(DeviceConfig {
        host: "127.0.0.1".to_string(),
        port: 33333,
        api_path: "/api/v1".to_string(),
        tls: false,
        access_token: device_token,
    });

    // Register a serial number chosen by the administrator.
    println!("Creating a serial number...");
    let created = admin
        .create_sn("XXXX-XXXX-XXXX-XXXX-XXXX-XXXX", None)
        .await?;
    println!("  {} ({})", created.msg, created.serial_number);

    // Let the server generate a couple more.
    println!("\nGenerating serial numbers...");
    let generated = admin.generate_sn(2, Some("restock")).await?;
    for sn in &generated.serial_numbers {
        println!("  generated {sn}");
    }

    // Inspect the pool.
    println!("\nListing all records...");
    let records = admin.get_all_records().await?;
    for record in &records {
        println!(
            "  {} key={} note={:?}",
            record.serial_number,
            if record.key.is_empty() { "-" } else { &record.key },
            record.note
        );
    }

    println!("\nListing available serial numbers...");
    let available = admin.get_available_sn().await?;
    println!("  {} available", available.len());

    // Annotate the one we created.
    println!("\nUpdating a note...");
    let updated = admin
        .update_sn_note("XXXX-XXXX-XXXX-XXXX-XXXX-XXXX", "example run")
        .await?;
    println!("  {}", updated.msg);

    // Device side: claim a serial number for this board.
    println!("\nApplying for a certificate...");
    match device
        .apply_cert(
            "XXXX-XXXX-XXXX-XXXX-XXXX-XXXX",
            "ASUSTeK Computer Inc.",
            "ROG STRIX Z790-A GAMING WIFI",
            "AA:BB:CC:DD:EE:FF",
        )
        .await
    {
        Ok(cert) => {
            println!("  key:       {}", cert.key);
            println!("  signature: {}", cert.signature);
        }
        Err(e) => println!("  application rejected: {e}"),
    }

    // Or request a temporary permit while waiting for a serial number.
    println!("\nApplying for a temporary permit...");
    let permit = device
        .apply_temp_permit(
            "ASUSTeK Computer Inc.",
            "ROG STRIX Z790-A GAMING WIFI",
            "AA:BB:CC:DD:EE:FF",
        )
        .await?;
    println!("  {} ({} seconds remaining)", permit.status, permit.remaining_time);

    println!("\nDone!");
    Ok(())
}
