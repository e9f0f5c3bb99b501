//! Transaction field mapping.
//!
//! Maps a request's payment-method payload and amount onto the fixed element
//! tags the gateway accepts inside the transaction block. Absent values are
//! omitted, never defaulted, and the tag order is stable.

use crate::transaction::{PaymentMethod, TransactionRequest};

/// Returns the ordered `(tag, value)` field list for a request.
///
/// Card-based methods contribute `CardNbr`, `ExpMonth`, `ExpYear`, and
/// `CVV2`; gift cards contribute `CardNbr`; the amount contributes `Amt`.
/// Cash, ACH, reference, and recurring methods carry no serializable payload
/// of their own, as does an absent payment method.
///
/// # Examples
///
/// ```
/// use portico_connector::{
///     CardData, PaymentMethod, TransactionRequest, TransactionType,
///     portico::transaction_fields,
/// };
///
/// let request = TransactionRequest::new(TransactionType::Sale).with_payment_method(
///     PaymentMethod::Credit(CardData {
///         number: Some("4111111111111111".to_owned()),
///         exp_month: Some(12),
///         exp_year: Some(2026),
///         cvn: None,
///     }),
/// );
///
/// let fields = transaction_fields(&request);
/// assert_eq!(fields[0], ("CardNbr", "4111111111111111".to_owned()));
/// assert_eq!(fields.len(), 3);
/// ```
#[must_use]
pub fn transaction_fields(request: &TransactionRequest) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();

    match &request.payment_method {
        Some(
            PaymentMethod::Credit(card) | PaymentMethod::Debit(card) | PaymentMethod::Ebt(card),
        ) => {
            push_field(&mut fields, "CardNbr", card.number.clone());
            push_field(&mut fields, "ExpMonth", card.exp_month.map(|m| m.to_string()));
            push_field(&mut fields, "ExpYear", card.exp_year.map(|y| y.to_string()));
            push_field(&mut fields, "CVV2", card.cvn.clone());
        }
        Some(PaymentMethod::Gift(gift)) => {
            push_field(&mut fields, "CardNbr", gift.number.clone());
        }
        Some(
            PaymentMethod::Reference
            | PaymentMethod::Cash
            | PaymentMethod::Ach
            | PaymentMethod::Recurring,
        )
        | None => {}
    }

    push_field(&mut fields, "Amt", request.amount.map(|amount| amount.to_string()));

    fields
}

fn push_field(fields: &mut Vec<(&'static str, String)>, tag: &'static str, value: Option<String>) {
    if let Some(value) = value {
        fields.push((tag, value));
    }
}
