//! Operation resolution for transaction requests.
//!
//! [`resolve`] is a pure decision procedure from a request descriptor to
//! exactly one gateway [`Operation`], or a classified failure. Dispatch runs
//! on the transaction type first, then on presence of a payment method, then
//! on the payment-method type, then on the modifier. Transaction types and
//! payment-method types are always matched exhaustively by name; wildcard
//! arms appear only where a modifier has a defined default.

use crate::{
    error::{ConnectorError, Result},
    portico::Operation,
    transaction::{
        PaymentMethod, PaymentMethodType, TransactionModifier, TransactionRequest, TransactionType,
    },
};

/// Resolves the gateway operation for a request descriptor.
///
/// Pure and side-effect free: the descriptor is read, never mutated, and the
/// same input always yields the same output.
///
/// # Errors
///
/// Returns [`ConnectorError::UnsupportedTransaction`] when the transaction
/// type requires a payment method and none is attached, or when the attached
/// payment-method type has no defined operation for the transaction type and
/// modifier. Returns [`ConnectorError::UnknownTransaction`] for transaction
/// types outside the gateway catalog.
///
/// # Examples
///
/// ```
/// use portico_connector::{
///     CardData, Operation, PaymentMethod, TransactionRequest, TransactionType,
///     portico::resolve,
/// };
///
/// let request = TransactionRequest::new(TransactionType::Sale)
///     .with_payment_method(PaymentMethod::Credit(CardData::default()));
///
/// assert_eq!(resolve(&request)?, Operation::CreditSale);
/// # Ok::<(), portico_connector::ConnectorError>(())
/// ```
pub fn resolve(request: &TransactionRequest) -> Result<Operation> {
    let method_type = request.payment_method.as_ref().map(PaymentMethod::method_type);
    let modifier = request.modifier;

    match request.transaction_type {
        TransactionType::BatchClose => Ok(Operation::BatchClose),
        TransactionType::Decline => resolve_decline(modifier, method_type),
        TransactionType::Verify => Ok(Operation::CreditAccountVerify),
        TransactionType::Capture => Ok(Operation::CreditAddToBatch),
        TransactionType::Auth => resolve_auth(modifier, method_type),
        TransactionType::Sale => resolve_sale(modifier, method_type),
        TransactionType::Refund => resolve_refund(method_type),
        TransactionType::Reversal => resolve_reversal(method_type),
        TransactionType::Edit => Ok(resolve_edit(modifier)),
        TransactionType::Void => resolve_void(method_type),
        TransactionType::AddValue => resolve_add_value(method_type),
        TransactionType::Balance => resolve_balance(method_type),
        TransactionType::Activate => Ok(Operation::GiftCardActivate),
        TransactionType::Alias => Ok(Operation::GiftCardAlias),
        TransactionType::Replace => Ok(Operation::GiftCardReplace),
        TransactionType::Reward => Ok(Operation::GiftCardReward),
        TransactionType::Deactivate
        | TransactionType::Create
        | TransactionType::Delete
        | TransactionType::BenefitWithdrawal
        | TransactionType::Fetch => Err(ConnectorError::UnknownTransaction(format!(
            "no gateway operation is defined for {}",
            request.transaction_type
        ))),
    }
}

/// Gift declines deactivate the card regardless of modifier; everything else
/// needs an explicit decline modifier.
fn resolve_decline(
    modifier: TransactionModifier,
    method_type: Option<PaymentMethodType>,
) -> Result<Operation> {
    if method_type == Some(PaymentMethodType::Gift) {
        return Ok(Operation::GiftCardDeactivate);
    }

    match modifier {
        TransactionModifier::ChipDecline => Ok(Operation::ChipCardDecline),
        TransactionModifier::FraudDecline => Ok(Operation::OverrideFraudDecline),
        _ => Err(ConnectorError::UnsupportedTransaction(
            "Decline requires a Gift payment method or a decline modifier".to_owned(),
        )),
    }
}

fn resolve_auth(
    modifier: TransactionModifier,
    method_type: Option<PaymentMethodType>,
) -> Result<Operation> {
    let Some(method_type) = method_type else {
        return Err(missing_payment_method(TransactionType::Auth));
    };

    match method_type {
        PaymentMethodType::Credit => Ok(match modifier {
            TransactionModifier::Additional => Operation::CreditAdditionalAuth,
            TransactionModifier::Incremental => Operation::CreditIncrementalAuth,
            TransactionModifier::Offline => Operation::CreditOfflineAuth,
            _ => Operation::CreditAuth,
        }),
        PaymentMethodType::Recurring => Ok(Operation::RecurringBillingAuth),
        PaymentMethodType::Reference
        | PaymentMethodType::Debit
        | PaymentMethodType::Ebt
        | PaymentMethodType::Cash
        | PaymentMethodType::Ach
        | PaymentMethodType::Gift => Err(incompatible(TransactionType::Auth, method_type)),
    }
}

fn resolve_sale(
    modifier: TransactionModifier,
    method_type: Option<PaymentMethodType>,
) -> Result<Operation> {
    let Some(method_type) = method_type else {
        return Err(missing_payment_method(TransactionType::Sale));
    };

    match method_type {
        PaymentMethodType::Credit => Ok(match modifier {
            TransactionModifier::Offline => Operation::CreditOfflineSale,
            _ => Operation::CreditSale,
        }),
        PaymentMethodType::Debit => Ok(Operation::DebitSale),
        PaymentMethodType::Cash => Ok(Operation::CashSale),
        PaymentMethodType::Ach => Ok(Operation::CheckSale),
        PaymentMethodType::Ebt => Ok(match modifier {
            TransactionModifier::CashBack => Operation::EbtCashBackPurchase,
            TransactionModifier::Voucher => Operation::EbtVoucherPurchase,
            _ => Operation::EbtFsPurchase,
        }),
        PaymentMethodType::Gift => Ok(Operation::GiftCardSale),
        PaymentMethodType::Reference | PaymentMethodType::Recurring => {
            Err(incompatible(TransactionType::Sale, method_type))
        }
    }
}

fn resolve_refund(method_type: Option<PaymentMethodType>) -> Result<Operation> {
    let Some(method_type) = method_type else {
        return Err(missing_payment_method(TransactionType::Refund));
    };

    match method_type {
        PaymentMethodType::Credit => Ok(Operation::CreditReturn),
        PaymentMethodType::Debit => Ok(Operation::DebitReturn),
        PaymentMethodType::Cash => Ok(Operation::CashReturn),
        PaymentMethodType::Ebt => Ok(Operation::EbtFsReturn),
        PaymentMethodType::Reference
        | PaymentMethodType::Ach
        | PaymentMethodType::Gift
        | PaymentMethodType::Recurring => Err(incompatible(TransactionType::Refund, method_type)),
    }
}

fn resolve_reversal(method_type: Option<PaymentMethodType>) -> Result<Operation> {
    let Some(method_type) = method_type else {
        return Err(missing_payment_method(TransactionType::Reversal));
    };

    match method_type {
        PaymentMethodType::Credit => Ok(Operation::CreditReversal),
        PaymentMethodType::Debit => Ok(Operation::DebitReversal),
        PaymentMethodType::Gift => Ok(Operation::GiftCardReversal),
        PaymentMethodType::Reference
        | PaymentMethodType::Ebt
        | PaymentMethodType::Cash
        | PaymentMethodType::Ach
        | PaymentMethodType::Recurring => {
            Err(incompatible(TransactionType::Reversal, method_type))
        }
    }
}

/// Edits dispatch on the modifier alone; the payment method is not
/// inspected.
fn resolve_edit(modifier: TransactionModifier) -> Operation {
    match modifier {
        TransactionModifier::LevelII => Operation::CreditCpcEdit,
        _ => Operation::CreditTxnEdit,
    }
}

fn resolve_void(method_type: Option<PaymentMethodType>) -> Result<Operation> {
    let Some(method_type) = method_type else {
        return Err(missing_payment_method(TransactionType::Void));
    };

    match method_type {
        PaymentMethodType::Credit => Ok(Operation::CreditVoid),
        PaymentMethodType::Ach => Ok(Operation::CheckVoid),
        PaymentMethodType::Gift => Ok(Operation::GiftCardVoid),
        PaymentMethodType::Reference
        | PaymentMethodType::Debit
        | PaymentMethodType::Ebt
        | PaymentMethodType::Cash
        | PaymentMethodType::Recurring => Err(incompatible(TransactionType::Void, method_type)),
    }
}

fn resolve_add_value(method_type: Option<PaymentMethodType>) -> Result<Operation> {
    let Some(method_type) = method_type else {
        return Err(missing_payment_method(TransactionType::AddValue));
    };

    match method_type {
        PaymentMethodType::Credit => Ok(Operation::PrePaidAddValue),
        PaymentMethodType::Debit => Ok(Operation::DebitAddValue),
        PaymentMethodType::Gift => Ok(Operation::GiftCardAddValue),
        PaymentMethodType::Reference
        | PaymentMethodType::Ebt
        | PaymentMethodType::Cash
        | PaymentMethodType::Ach
        | PaymentMethodType::Recurring => {
            Err(incompatible(TransactionType::AddValue, method_type))
        }
    }
}

fn resolve_balance(method_type: Option<PaymentMethodType>) -> Result<Operation> {
    let Some(method_type) = method_type else {
        return Err(missing_payment_method(TransactionType::Balance));
    };

    match method_type {
        PaymentMethodType::Credit => Ok(Operation::PrePaidBalanceInquiry),
        PaymentMethodType::Ebt => Ok(Operation::EbtBalanceInquiry),
        PaymentMethodType::Gift => Ok(Operation::GiftCardBalance),
        PaymentMethodType::Reference
        | PaymentMethodType::Debit
        | PaymentMethodType::Cash
        | PaymentMethodType::Ach
        | PaymentMethodType::Recurring => {
            Err(incompatible(TransactionType::Balance, method_type))
        }
    }
}

fn missing_payment_method(transaction_type: TransactionType) -> ConnectorError {
    ConnectorError::UnsupportedTransaction(format!("{transaction_type} requires a payment method"))
}

fn incompatible(
    transaction_type: TransactionType,
    method_type: PaymentMethodType,
) -> ConnectorError {
    ConnectorError::UnsupportedTransaction(format!(
        "{transaction_type} is not supported for {method_type} payment methods"
    ))
}
