//! Transaction request model.
//!
//! This module defines the abstract request descriptor the connector
//! consumes: the transaction type, its processing modifier, the attached
//! payment method, and the amount. Descriptors are built fresh per request
//! and stay read-only through resolution and serialization.

use std::fmt;

use rust_decimal::Decimal;

/// High-level category of a payment transaction.
///
/// Drives which branch of operation resolution activates. This is the
/// caller-facing vocabulary; the gateway's wire-level operation names live in
/// [`Operation`](crate::portico::Operation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Decline a chip or fraud-flagged transaction.
    Decline,
    /// Verify an account without moving funds.
    Verify,
    /// Capture a prior authorization into the open batch.
    Capture,
    /// Authorize funds without capturing.
    Auth,
    /// Return funds to the payer.
    Refund,
    /// Reverse a prior transaction.
    Reversal,
    /// Authorize and capture in one step.
    Sale,
    /// Edit a transaction already in the batch.
    Edit,
    /// Void a transaction before settlement.
    Void,
    /// Load value onto a prepaid or gift account.
    AddValue,
    /// Query an account balance.
    Balance,
    /// Activate a stored-value account.
    Activate,
    /// Attach an alias to a stored-value account.
    Alias,
    /// Replace a stored-value card.
    Replace,
    /// Apply a reward to a stored-value account.
    Reward,
    /// Deactivate an account.
    Deactivate,
    /// Close the open settlement batch.
    BatchClose,
    /// Create a stored resource.
    Create,
    /// Delete a stored resource.
    Delete,
    /// Withdraw cash benefits.
    BenefitWithdrawal,
    /// Fetch a stored resource.
    Fetch,
}

impl TransactionType {
    /// Returns the canonical name of this transaction type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Decline => "Decline",
            Self::Verify => "Verify",
            Self::Capture => "Capture",
            Self::Auth => "Auth",
            Self::Refund => "Refund",
            Self::Reversal => "Reversal",
            Self::Sale => "Sale",
            Self::Edit => "Edit",
            Self::Void => "Void",
            Self::AddValue => "AddValue",
            Self::Balance => "Balance",
            Self::Activate => "Activate",
            Self::Alias => "Alias",
            Self::Replace => "Replace",
            Self::Reward => "Reward",
            Self::Deactivate => "Deactivate",
            Self::BatchClose => "BatchClose",
            Self::Create => "Create",
            Self::Delete => "Delete",
            Self::BenefitWithdrawal => "BenefitWithdrawal",
            Self::Fetch => "Fetch",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualifier refining how a transaction type is processed.
///
/// Defaults to [`None`](Self::None) when unspecified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TransactionModifier {
    /// No modifier.
    #[default]
    None,
    /// Incremental authorization on top of an existing one.
    Incremental,
    /// Additional authorization for the same account.
    Additional,
    /// Offline (voice or store-and-forward) approval.
    Offline,
    /// Level II commercial card data.
    LevelII,
    /// Override of a fraud decline.
    FraudDecline,
    /// Chip card decline.
    ChipDecline,
    /// Cash back on purchase.
    CashBack,
    /// Paper voucher clearing.
    Voucher,
}

/// Type of payment method attached to a request.
///
/// Every [`PaymentMethod`] instance carries exactly one of these; operation
/// resolution dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethodType {
    /// Reference to a prior transaction or stored token.
    Reference,
    /// Credit card.
    Credit,
    /// Debit card.
    Debit,
    /// Electronic benefits transfer card.
    Ebt,
    /// Cash tender.
    Cash,
    /// Bank draft (eCheck).
    Ach,
    /// Stored-value gift card.
    Gift,
    /// Recurring billing schedule.
    Recurring,
}

impl fmt::Display for PaymentMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reference => "Reference",
            Self::Credit => "Credit",
            Self::Debit => "Debit",
            Self::Ebt => "EBT",
            Self::Cash => "Cash",
            Self::Ach => "ACH",
            Self::Gift => "Gift",
            Self::Recurring => "Recurring",
        };
        f.write_str(name)
    }
}

/// Card data for card-based payment methods.
///
/// Every field is optional; absent fields are omitted from the wire request,
/// never defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardData {
    /// Primary account number.
    pub number: Option<String>,
    /// Expiry month (1-12).
    pub exp_month: Option<u8>,
    /// Four-digit expiry year.
    pub exp_year: Option<u16>,
    /// Card verification number (CVV2/CVC2/CID).
    pub cvn: Option<String>,
}

/// Stored-value gift card data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiftCardData {
    /// Gift card number.
    pub number: Option<String>,
}

/// A concrete payment method attached to a transaction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Reference to a prior transaction or stored token.
    Reference,
    /// Credit card.
    Credit(CardData),
    /// Debit card.
    Debit(CardData),
    /// Electronic benefits transfer card.
    Ebt(CardData),
    /// Cash tender.
    Cash,
    /// Bank draft (eCheck).
    Ach,
    /// Stored-value gift card.
    Gift(GiftCardData),
    /// Recurring billing schedule.
    Recurring,
}

impl PaymentMethod {
    /// Returns the payment-method type used by operation resolution.
    #[must_use]
    pub const fn method_type(&self) -> PaymentMethodType {
        match self {
            Self::Reference => PaymentMethodType::Reference,
            Self::Credit(_) => PaymentMethodType::Credit,
            Self::Debit(_) => PaymentMethodType::Debit,
            Self::Ebt(_) => PaymentMethodType::Ebt,
            Self::Cash => PaymentMethodType::Cash,
            Self::Ach => PaymentMethodType::Ach,
            Self::Gift(_) => PaymentMethodType::Gift,
            Self::Recurring => PaymentMethodType::Recurring,
        }
    }
}

/// Abstract gateway request descriptor.
///
/// Collected by the caller, resolved to a wire operation, and serialized into
/// the gateway envelope. A payment method is required for any transaction
/// type whose resolution inspects the payment-method type; its absence is
/// detected during resolution, never defaulted over.
///
/// # Examples
///
/// ```
/// use portico_connector::{
///     CardData, PaymentMethod, TransactionModifier, TransactionRequest, TransactionType,
/// };
///
/// let request = TransactionRequest::new(TransactionType::Auth)
///     .with_payment_method(PaymentMethod::Credit(CardData {
///         number: Some("4111111111111111".to_owned()),
///         exp_month: Some(12),
///         exp_year: Some(2026),
///         cvn: None,
///     }))
///     .with_modifier(TransactionModifier::Incremental);
///
/// assert_eq!(request.transaction_type, TransactionType::Auth);
/// ```
#[derive(Debug, Clone)]
pub struct TransactionRequest {
    /// High-level transaction category.
    pub transaction_type: TransactionType,
    /// Processing qualifier.
    pub modifier: TransactionModifier,
    /// Payment method, where the transaction type requires one.
    pub payment_method: Option<PaymentMethod>,
    /// Transaction amount.
    pub amount: Option<Decimal>,
}

impl TransactionRequest {
    /// Creates a descriptor with no payment method, default modifier, and no
    /// amount.
    #[must_use]
    pub fn new(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type,
            modifier: TransactionModifier::default(),
            payment_method: None,
            amount: None,
        }
    }

    /// Attaches a payment method.
    #[must_use]
    pub fn with_payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = Some(payment_method);
        self
    }

    /// Sets the processing modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: TransactionModifier) -> Self {
        self.modifier = modifier;
        self
    }

    /// Sets the transaction amount.
    #[must_use]
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_method_type_for_every_variant() {
        let cases = [
            (PaymentMethod::Reference, PaymentMethodType::Reference),
            (PaymentMethod::Credit(CardData::default()), PaymentMethodType::Credit),
            (PaymentMethod::Debit(CardData::default()), PaymentMethodType::Debit),
            (PaymentMethod::Ebt(CardData::default()), PaymentMethodType::Ebt),
            (PaymentMethod::Cash, PaymentMethodType::Cash),
            (PaymentMethod::Ach, PaymentMethodType::Ach),
            (PaymentMethod::Gift(GiftCardData::default()), PaymentMethodType::Gift),
            (PaymentMethod::Recurring, PaymentMethodType::Recurring),
        ];

        for (method, expected) in cases {
            assert_eq!(method.method_type(), expected);
        }
    }

    #[test]
    fn test_modifier_defaults_to_none() {
        assert_eq!(TransactionModifier::default(), TransactionModifier::None);
        let request = TransactionRequest::new(TransactionType::Sale);
        assert_eq!(request.modifier, TransactionModifier::None);
    }

    #[test]
    fn test_new_request_carries_no_payment_data() {
        let request = TransactionRequest::new(TransactionType::Verify);
        assert!(request.payment_method.is_none());
        assert!(request.amount.is_none());
    }

    #[test]
    fn test_builder_methods_set_fields() {
        let request = TransactionRequest::new(TransactionType::Sale)
            .with_payment_method(PaymentMethod::Cash)
            .with_modifier(TransactionModifier::Offline)
            .with_amount(dec!(12.50));

        assert_eq!(request.payment_method, Some(PaymentMethod::Cash));
        assert_eq!(request.modifier, TransactionModifier::Offline);
        assert_eq!(request.amount, Some(dec!(12.50)));
    }

    #[test]
    fn test_display_uses_wire_casing_for_acronyms() {
        assert_eq!(PaymentMethodType::Ebt.to_string(), "EBT");
        assert_eq!(PaymentMethodType::Ach.to_string(), "ACH");
        assert_eq!(TransactionType::BatchClose.to_string(), "BatchClose");
        assert_eq!(TransactionType::BenefitWithdrawal.to_string(), "BenefitWithdrawal");
    }
}
