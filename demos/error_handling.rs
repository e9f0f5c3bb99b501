//! Error handling example showing how to handle different error types.
//!
//! This example demonstrates proper error handling patterns for connector
//! operations, including unsupported combinations, unmapped transaction types,
//! configuration errors, and recovery strategies.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example error_handling
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::str_to_string,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use portico_connector::{
    ConnectorError, GatewayConfig, GiftCardData, PaymentMethod, TransactionRequest,
    TransactionType, portico::build_request,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Portico Connector: Error Handling Example\n");

    let config = GatewayConfig::from_toml(r#"secret_api_key = "skapi_cert_example""#)?;

    // Example 1: Authorization without a payment method
    println!("Example 1: Authorization without a payment method (should fail)");
    let request = TransactionRequest::new(TransactionType::Auth);

    match build_request(&request, &config) {
        Ok(_) => println!("   Unexpected success"),
        Err(ConnectorError::UnsupportedTransaction(msg)) => {
            println!("   ✓ Caught unsupported transaction: {}", msg);
            println!("   Recovery: Attach card data before resolving");
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 2: Tender the operation does not accept
    println!("\nExample 2: Sale through recurring billing (should fail)");
    let request = TransactionRequest::new(TransactionType::Sale)
        .with_payment_method(PaymentMethod::Recurring);

    match build_request(&request, &config) {
        Ok(_) => println!("   Unexpected success"),
        Err(ConnectorError::UnsupportedTransaction(msg)) => {
            println!("   ✓ Caught incompatible tender: {}", msg);
            println!("   Recovery: Use a credit, debit, cash, check, EBT, or gift tender");
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 3: Transaction type with no gateway mapping
    println!("\nExample 3: Fetch transaction (no gateway operation exists)");
    let request = TransactionRequest::new(TransactionType::Fetch);

    match build_request(&request, &config) {
        Ok(_) => println!("   Unexpected success"),
        Err(ConnectorError::UnknownTransaction(msg)) => {
            println!("   ✓ Caught unknown transaction: {}", msg);
            println!("   Recovery: This transaction type needs a different gateway");
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 4: Malformed credentials
    println!("\nExample 4: Rejecting a non-numeric site ID");
    match GatewayConfig::from_toml(r#"site_id = "not-a-number""#) {
        Ok(_) => println!("   Unexpected success"),
        Err(ConnectorError::ConfigError(msg)) => {
            println!("   ✓ Caught configuration error: {}", msg);
            println!("   Recovery: Copy the site ID digits from the gateway portal");
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 5: Comprehensive error matching
    println!("\nExample 5: Comprehensive error pattern matching");
    let request = TransactionRequest::new(TransactionType::Refund)
        .with_payment_method(PaymentMethod::Gift(GiftCardData::default()));
    handle_build_result(build_request(&request, &config));

    println!("\n✓ Error handling examples complete");
    Ok(())
}

/// Demonstrates comprehensive error handling with recovery guidance.
fn handle_build_result(result: Result<String, ConnectorError>) {
    match result {
        Ok(envelope) => {
            println!("   ✓ Request built successfully!");
            println!("   Envelope size: {} bytes", envelope.len());
        }

        // Unsupported combinations - fix the request and retry
        Err(ConnectorError::UnsupportedTransaction(msg)) => {
            eprintln!("   ✗ Unsupported transaction: {}", msg);
            eprintln!("   → Fix: Check the payment method against the operation");
            eprintln!("   → Retry: After correcting the request");
        }

        // Unknown transaction types - no retry will help
        Err(ConnectorError::UnknownTransaction(msg)) => {
            eprintln!("   ✗ Unknown transaction: {}", msg);
            eprintln!("   → Fix: Route this transaction to a gateway that supports it");
            eprintln!("   → Note: Retrying against this gateway cannot succeed");
        }

        // Configuration errors - fix credentials before any request
        Err(ConnectorError::ConfigError(msg)) => {
            eprintln!("   ✗ Invalid configuration: {}", msg);
            eprintln!("   → Fix: Verify credentials against the gateway portal");
            eprintln!("   → Fix: Site, license, and device IDs must be numeric");
        }
    }
}
