//! Portico gateway request construction.
//!
//! This module maps abstract transaction requests onto the Heartland Portico
//! POS gateway wire protocol. The pipeline has three pure stages:
//!
//! 1. [`resolve`]: pick the wire [`Operation`] for a request, or classify
//!    the failure
//! 2. [`transaction_fields`]: flatten the request payload into ordered
//!    `(tag, value)` pairs
//! 3. [`serialize`]: wrap operation, fields, and credentials in the fixed
//!    SOAP envelope
//!
//! [`build_request`] runs all three and is the seam transport code calls.

pub mod envelope;
pub mod fields;
pub mod operation;
pub mod resolver;

pub use envelope::{GATEWAY_NS, SOAP_ENVELOPE_NS, serialize};
pub use fields::transaction_fields;
pub use operation::Operation;
pub use resolver::resolve;

use tracing::{debug, instrument};

use crate::{config::GatewayConfig, error::Result, transaction::TransactionRequest};

/// Builds the complete gateway request for a transaction.
///
/// Resolves the wire operation, maps the transaction fields, and serializes
/// the envelope in one pass. The returned string is ready to POST to the
/// gateway endpoint; transport is the caller's concern.
///
/// # Errors
///
/// Returns [`ConnectorError::UnsupportedTransaction`] or
/// [`ConnectorError::UnknownTransaction`] when no gateway operation is
/// defined for the request. Serialization itself cannot fail.
///
/// [`ConnectorError::UnsupportedTransaction`]: crate::error::ConnectorError::UnsupportedTransaction
/// [`ConnectorError::UnknownTransaction`]: crate::error::ConnectorError::UnknownTransaction
///
/// # Examples
///
/// ```
/// use portico_connector::{
///     GatewayConfig, PaymentMethod, TransactionRequest, TransactionType,
///     portico::build_request,
/// };
/// use rust_decimal_macros::dec;
///
/// let config = GatewayConfig { device_id: Some("90911395".to_owned()), ..GatewayConfig::default() };
/// let request = TransactionRequest::new(TransactionType::Sale)
///     .with_payment_method(PaymentMethod::Cash)
///     .with_amount(dec!(10.00));
///
/// let xml = build_request(&request, &config)?;
/// assert!(xml.contains("<CashSale><Amt>10.00</Amt></CashSale>"));
/// # Ok::<(), portico_connector::ConnectorError>(())
/// ```
#[instrument(
    skip(request, config),
    fields(transaction_type = %request.transaction_type, modifier = ?request.modifier)
)]
pub fn build_request(request: &TransactionRequest, config: &GatewayConfig) -> Result<String> {
    let operation = resolve(request)?;
    debug!(operation = operation.as_str(), "resolved gateway operation");

    let fields = transaction_fields(request);
    Ok(serialize(operation, &fields, config))
}

#[cfg(test)]
mod tests;
