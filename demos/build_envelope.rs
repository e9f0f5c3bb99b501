//! Full request construction example: TOML credentials to SOAP envelope.
//!
//! This example shows the simplest way to produce a complete gateway request
//! with the connector library, ready to hand to an HTTP transport.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example build_envelope
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::str_to_string,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use portico_connector::{
    CardData, GatewayConfig, PaymentMethod, TransactionRequest, TransactionType,
    portico::build_request,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    println!("Portico Connector: Envelope Construction Example\n");

    // Step 1: Load gateway credentials
    // In production, load this from a secrets manager or environment config.
    println!("1. Loading gateway configuration from TOML...");
    let config = GatewayConfig::from_toml(
        r#"
        secret_api_key = "skapi_cert_example"
        site_id = "144398"
        license_id = "144398"
        device_id = "6409730"
        username = "portico-demo"
        password = "hunter2"
        developer_id = "002914"
        version_number = "4039"
        "#,
    )?;
    println!("   ✓ Configuration loaded");

    // Step 2: Describe the transaction
    println!("\n2. Describing a credit card sale...");
    let card = CardData {
        number: Some("4012002000060016".to_string()),
        exp_month: Some(12),
        exp_year: Some(2030),
        cvn: Some("123".to_string()),
    };
    let request = TransactionRequest::new(TransactionType::Sale)
        .with_payment_method(PaymentMethod::Credit(card))
        .with_amount(dec!(117.01));
    println!("   Type: {}", request.transaction_type);
    println!("   Amount: {}", dec!(117.01));

    // Step 3: Resolve and serialize in one call
    println!("\n3. Building the gateway request...");
    let envelope = build_request(&request, &config)?;
    println!("   ✓ Envelope ready ({} bytes)", envelope.len());

    println!("\n   Request body:");
    println!("   {}", envelope);

    println!("\n✓ Example complete");
    Ok(())
}
