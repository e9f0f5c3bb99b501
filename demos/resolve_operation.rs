//! Operation resolution example showing how transaction descriptors map to
//! gateway operation names.
//!
//! Walks a representative slice of the decision table: modifiers refining
//! credit authorizations, tender types splitting the sale branch, and the
//! combinations the gateway rejects.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example resolve_operation
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::str_to_string,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use portico_connector::{
    CardData, GiftCardData, PaymentMethod, TransactionModifier, TransactionRequest,
    TransactionType, portico::resolve,
};

fn credit() -> PaymentMethod {
    PaymentMethod::Credit(CardData::default())
}

fn main() {
    println!("=== Gateway operation resolution ===\n");

    println!("-- Credit authorizations, refined by modifier --");
    let auth_requests = [
        ("plain", TransactionRequest::new(TransactionType::Auth).with_payment_method(credit())),
        (
            "incremental",
            TransactionRequest::new(TransactionType::Auth)
                .with_payment_method(credit())
                .with_modifier(TransactionModifier::Incremental),
        ),
        (
            "offline",
            TransactionRequest::new(TransactionType::Auth)
                .with_payment_method(credit())
                .with_modifier(TransactionModifier::Offline),
        ),
    ];
    for (label, request) in auth_requests {
        match resolve(&request) {
            Ok(operation) => println!("  auth / {label:<12} -> {operation}"),
            Err(e) => println!("  auth / {label:<12} -> error: {e}"),
        }
    }

    println!("\n-- Sales, split by tender --");
    let tenders = [
        ("credit", credit()),
        ("debit", PaymentMethod::Debit(CardData::default())),
        ("cash", PaymentMethod::Cash),
        ("check", PaymentMethod::Ach),
        ("ebt", PaymentMethod::Ebt(CardData::default())),
        ("gift", PaymentMethod::Gift(GiftCardData::default())),
    ];
    for (label, method) in tenders {
        let request = TransactionRequest::new(TransactionType::Sale).with_payment_method(method);
        match resolve(&request) {
            Ok(operation) => println!("  sale / {label:<12} -> {operation}"),
            Err(e) => println!("  sale / {label:<12} -> error: {e}"),
        }
    }

    println!("\n-- Combinations the gateway rejects --");
    let rejected = [
        ("auth without tender", TransactionRequest::new(TransactionType::Auth)),
        (
            "sale via recurring",
            TransactionRequest::new(TransactionType::Sale)
                .with_payment_method(PaymentMethod::Recurring),
        ),
        ("fetch", TransactionRequest::new(TransactionType::Fetch)),
    ];
    for (label, request) in rejected {
        match resolve(&request) {
            Ok(operation) => println!("  {label:<20} -> {operation}"),
            Err(e) => println!("  {label:<20} -> {e}"),
        }
    }
}
