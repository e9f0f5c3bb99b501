//! Portico Connector: Gateway Request Construction for Heartland Portico
//!
//! A Rust library that maps abstract payment transactions onto the Heartland
//! Portico POS gateway wire protocol: a deterministic resolver picks the one
//! gateway operation defined for a transaction, and a serializer renders the
//! operation into the gateway's fixed SOAP/XML envelope.
//!
//! # What is Portico Connector?
//!
//! Payment code wants to say "authorize this card for $10"; the gateway wants
//! `<CreditAuth>` inside a versioned, namespaced SOAP skeleton with the
//! merchant's credentials in a header block. This crate owns exactly that
//! translation and nothing around it:
//!
//! - **Operation Resolution**: a closed decision table from (transaction
//!   type, payment method, modifier) to one of 42 gateway operations, with
//!   every unmappable combination classified, never silently defaulted
//! - **Envelope Serialization**: a typed document tree rendered once into the
//!   gateway schema, with credentials omitted when absent, never defaulted
//! - **Pure Core**: resolution and serialization are synchronous,
//!   side-effect-free functions, safe to call concurrently without locking
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  Request Builder │  collects user input (caller's code)
//! └────────┬─────────┘
//!          │ TransactionRequest + GatewayConfig
//! ┌────────▼─────────────────────────────────────────┐
//! │        Portico Connector (this crate)            │
//! │  ┌───────────┐  ┌────────────────┐  ┌─────────┐  │
//! │  │  resolve  │──│ transaction_   │──│serialize│  │
//! │  │ (catalog) │  │ fields (tags)  │  │ (SOAP)  │  │
//! │  └───────────┘  └────────────────┘  └─────────┘  │
//! └────────┬─────────────────────────────────────────┘
//!          │ XML string
//! ┌────────▼─────────┐
//! │    Transport     │  HTTP POST to the gateway (caller's code)
//! └──────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## 1. Build a Gateway Request
//!
//! ```
//! use portico_connector::{
//!     CardData, GatewayConfig, PaymentMethod, TransactionRequest, TransactionType,
//!     portico::build_request,
//! };
//! use rust_decimal_macros::dec;
//!
//! # fn example() -> portico_connector::Result<()> {
//! // Load gateway credentials (in production, from your config store)
//! let config = GatewayConfig::from_toml(
//!     r#"
//!     secret_api_key = "skapi_cert_MTyMAQBiHVEAewvIzXVFcmUd2UcyBge_eCpaASUp0A"
//!     device_id = "90911395"
//!     "#,
//! )?;
//!
//! // Describe the transaction
//! let request = TransactionRequest::new(TransactionType::Sale)
//!     .with_payment_method(PaymentMethod::Credit(CardData {
//!         number: Some("4111111111111111".to_owned()),
//!         exp_month: Some(12),
//!         exp_year: Some(2026),
//!         cvn: Some("123".to_owned()),
//!     }))
//!     .with_amount(dec!(10.00));
//!
//! // Resolve and serialize in one pass
//! let xml = build_request(&request, &config)?;
//!
//! assert!(xml.contains("<CreditSale>"));
//! assert!(xml.contains("<Amt>10.00</Amt>"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## 2. Resolve an Operation Directly
//!
//! ```
//! use portico_connector::{
//!     CardData, Operation, PaymentMethod, TransactionModifier, TransactionRequest,
//!     TransactionType, portico::resolve,
//! };
//!
//! # fn example() -> portico_connector::Result<()> {
//! let request = TransactionRequest::new(TransactionType::Auth)
//!     .with_payment_method(PaymentMethod::Credit(CardData::default()))
//!     .with_modifier(TransactionModifier::Incremental);
//!
//! assert_eq!(resolve(&request)?, Operation::CreditIncrementalAuth);
//! assert_eq!(resolve(&request)?.as_str(), "CreditIncrementalAuth");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`transaction`]: the abstract request model (types, modifiers, payment
//!   methods)
//! - [`config`]: TOML-loadable gateway credentials
//! - [`portico`]: operation catalog, resolver, field mapping, and envelope
//!   serialization
//! - [`xml`]: the document tree behind the serializer
//! - [`error`]: error types
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ConnectorError>`](Result).
//! Resolution failures are terminal classifications:
//!
//! ```
//! use portico_connector::{
//!     ConnectorError, TransactionRequest, TransactionType, portico::resolve,
//! };
//!
//! let request = TransactionRequest::new(TransactionType::Sale);
//!
//! match resolve(&request) {
//!     Ok(operation) => println!("send {operation}"),
//!     Err(ConnectorError::UnsupportedTransaction(reason)) => {
//!         eprintln!("fix the request: {reason}");
//!     }
//!     Err(ConnectorError::UnknownTransaction(reason)) => {
//!         eprintln!("gateway cannot do this: {reason}");
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod portico;
pub mod transaction;
pub mod xml;

pub use config::GatewayConfig;
pub use error::{ConnectorError, Result};
pub use portico::Operation;
pub use transaction::{
    CardData, GiftCardData, PaymentMethod, PaymentMethodType, TransactionModifier,
    TransactionRequest, TransactionType,
};
