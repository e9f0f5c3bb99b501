//! Error types for the Portico connector.
//!
//! This module defines all error types that can occur while building gateway
//! requests. All errors implement the standard [`std::error::Error`] trait via
//! [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Resolution Errors** ([`ConnectorError::UnsupportedTransaction`],
//!   [`ConnectorError::UnknownTransaction`]): the request cannot be mapped to
//!   a gateway operation
//! - **Configuration Errors** ([`ConnectorError::ConfigError`]): credential
//!   configuration failed to parse or validate
//!
//! # Examples
//!
//! ```
//! use portico_connector::error::{ConnectorError, Result};
//!
//! fn require_amount(amount: Option<&str>) -> Result<&str> {
//!     amount.ok_or_else(|| {
//!         ConnectorError::UnsupportedTransaction("amount is required".to_owned())
//!     })
//! }
//! ```

use thiserror::Error;

/// Result type alias for connector operations.
///
/// This is a convenience type that uses [`ConnectorError`] as the error type.
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, ConnectorError>;

/// Errors that can occur while building a gateway request.
///
/// All variants include contextual information about what went wrong.
/// The error messages are designed to be user-facing and actionable.
///
/// # Error Recovery
///
/// Resolution errors are terminal classifications, never transient: retrying
/// the same request cannot succeed. Callers decide whether to surface them to
/// the end user or map them to a client-facing error code.
///
/// This type implements `#[must_use]` to ensure errors are not silently ignored.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The transaction has no defined gateway operation.
    ///
    /// This error occurs when the combination of transaction type,
    /// payment-method type, and modifier is outside the gateway catalog.
    /// The message distinguishes the two causes:
    /// - The transaction type requires a payment method and none was attached
    /// - The attached payment-method type is incompatible with the
    ///   transaction type or modifier
    ///
    /// # Recovery
    ///
    /// Fix the request: attach a payment method of a supported type, or pick
    /// a transaction type the gateway defines for this tender.
    ///
    /// # Examples
    ///
    /// ```
    /// use portico_connector::{TransactionRequest, TransactionType, portico::resolve};
    ///
    /// // Auth without a payment method cannot be resolved.
    /// let request = TransactionRequest::new(TransactionType::Auth);
    /// let err = resolve(&request).unwrap_err();
    /// assert!(err.to_string().contains("requires a payment method"));
    /// ```
    #[error("Unsupported transaction: {0}")]
    UnsupportedTransaction(String),

    /// The transaction type is outside the resolver catalog.
    ///
    /// This error occurs for declared transaction types the gateway has no
    /// operation for at all, regardless of payment method or modifier.
    ///
    /// # Recovery
    ///
    /// The gateway does not offer this transaction. Route the request to a
    /// different processor or drop the feature.
    #[error("Unknown transaction: {0}")]
    UnknownTransaction(String),

    /// Gateway credential configuration is invalid.
    ///
    /// This error occurs when TOML parsing fails or a credential value fails
    /// validation (for example, an empty `secret_api_key` or a non-numeric
    /// `site_id`).
    ///
    /// # Recovery
    ///
    /// Correct the configuration source and reload. Validation never runs
    /// during serialization, so an already-constructed request is unaffected.
    #[error("Invalid gateway configuration: {0}")]
    ConfigError(String),
}
