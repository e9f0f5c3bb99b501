//! Gateway operation catalog.

use std::fmt;

/// Wire-level gateway operation.
///
/// Each variant names one element the gateway accepts inside the
/// `Transaction` block of a request. The catalog is closed: the serializer
/// takes an `Operation` rather than a free-form string, so an identifier
/// outside this list cannot reach the wire.
///
/// [`as_str`](Self::as_str) returns the exact wire spelling, which does not
/// always follow Rust casing (`EBTFSPurchase`, `CreditCPCEdit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Close the open settlement batch.
    BatchClose,
    /// Deactivate a gift card.
    GiftCardDeactivate,
    /// Record a chip card decline.
    ChipCardDecline,
    /// Override a fraud decline.
    OverrideFraudDecline,
    /// Verify a credit account without moving funds.
    CreditAccountVerify,
    /// Add a prior credit authorization to the batch.
    CreditAddToBatch,
    /// Additional credit authorization.
    CreditAdditionalAuth,
    /// Incremental credit authorization.
    CreditIncrementalAuth,
    /// Offline credit authorization.
    CreditOfflineAuth,
    /// Credit authorization.
    CreditAuth,
    /// Recurring billing authorization.
    RecurringBillingAuth,
    /// Offline credit sale.
    CreditOfflineSale,
    /// Credit sale.
    CreditSale,
    /// Debit sale.
    DebitSale,
    /// Cash sale.
    CashSale,
    /// Check (ACH) sale.
    CheckSale,
    /// EBT purchase with cash back.
    EbtCashBackPurchase,
    /// EBT voucher purchase.
    EbtVoucherPurchase,
    /// EBT food stamp purchase.
    EbtFsPurchase,
    /// Gift card sale.
    GiftCardSale,
    /// Credit return.
    CreditReturn,
    /// Debit return.
    DebitReturn,
    /// Cash return.
    CashReturn,
    /// EBT food stamp return.
    EbtFsReturn,
    /// Credit reversal.
    CreditReversal,
    /// Debit reversal.
    DebitReversal,
    /// Gift card reversal.
    GiftCardReversal,
    /// Level II commercial card edit.
    CreditCpcEdit,
    /// Credit transaction edit.
    CreditTxnEdit,
    /// Credit void.
    CreditVoid,
    /// Check (ACH) void.
    CheckVoid,
    /// Gift card void.
    GiftCardVoid,
    /// Prepaid account value load.
    PrePaidAddValue,
    /// Debit account value load.
    DebitAddValue,
    /// Gift card value load.
    GiftCardAddValue,
    /// Prepaid balance inquiry.
    PrePaidBalanceInquiry,
    /// EBT balance inquiry.
    EbtBalanceInquiry,
    /// Gift card balance inquiry.
    GiftCardBalance,
    /// Gift card activation.
    GiftCardActivate,
    /// Gift card alias management.
    GiftCardAlias,
    /// Gift card replacement.
    GiftCardReplace,
    /// Gift card reward.
    GiftCardReward,
}

impl Operation {
    /// Returns the wire name for this operation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BatchClose => "BatchClose",
            Self::GiftCardDeactivate => "GiftCardDeactivate",
            Self::ChipCardDecline => "ChipCardDecline",
            Self::OverrideFraudDecline => "OverrideFraudDecline",
            Self::CreditAccountVerify => "CreditAccountVerify",
            Self::CreditAddToBatch => "CreditAddToBatch",
            Self::CreditAdditionalAuth => "CreditAdditionalAuth",
            Self::CreditIncrementalAuth => "CreditIncrementalAuth",
            Self::CreditOfflineAuth => "CreditOfflineAuth",
            Self::CreditAuth => "CreditAuth",
            Self::RecurringBillingAuth => "RecurringBillingAuth",
            Self::CreditOfflineSale => "CreditOfflineSale",
            Self::CreditSale => "CreditSale",
            Self::DebitSale => "DebitSale",
            Self::CashSale => "CashSale",
            Self::CheckSale => "CheckSale",
            Self::EbtCashBackPurchase => "EBTCashBackPurchase",
            Self::EbtVoucherPurchase => "EBTVoucherPurchase",
            Self::EbtFsPurchase => "EBTFSPurchase",
            Self::GiftCardSale => "GiftCardSale",
            Self::CreditReturn => "CreditReturn",
            Self::DebitReturn => "DebitReturn",
            Self::CashReturn => "CashReturn",
            Self::EbtFsReturn => "EBTFSReturn",
            Self::CreditReversal => "CreditReversal",
            Self::DebitReversal => "DebitReversal",
            Self::GiftCardReversal => "GiftCardReversal",
            Self::CreditCpcEdit => "CreditCPCEdit",
            Self::CreditTxnEdit => "CreditTxnEdit",
            Self::CreditVoid => "CreditVoid",
            Self::CheckVoid => "CheckVoid",
            Self::GiftCardVoid => "GiftCardVoid",
            Self::PrePaidAddValue => "PrePaidAddValue",
            Self::DebitAddValue => "DebitAddValue",
            Self::GiftCardAddValue => "GiftCardAddValue",
            Self::PrePaidBalanceInquiry => "PrePaidBalanceInquiry",
            Self::EbtBalanceInquiry => "EBTBalanceInquiry",
            Self::GiftCardBalance => "GiftCardBalance",
            Self::GiftCardActivate => "GiftCardActivate",
            Self::GiftCardAlias => "GiftCardAlias",
            Self::GiftCardReplace => "GiftCardReplace",
            Self::GiftCardReward => "GiftCardReward",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const CATALOG: [Operation; 42] = [
        Operation::BatchClose,
        Operation::GiftCardDeactivate,
        Operation::ChipCardDecline,
        Operation::OverrideFraudDecline,
        Operation::CreditAccountVerify,
        Operation::CreditAddToBatch,
        Operation::CreditAdditionalAuth,
        Operation::CreditIncrementalAuth,
        Operation::CreditOfflineAuth,
        Operation::CreditAuth,
        Operation::RecurringBillingAuth,
        Operation::CreditOfflineSale,
        Operation::CreditSale,
        Operation::DebitSale,
        Operation::CashSale,
        Operation::CheckSale,
        Operation::EbtCashBackPurchase,
        Operation::EbtVoucherPurchase,
        Operation::EbtFsPurchase,
        Operation::GiftCardSale,
        Operation::CreditReturn,
        Operation::DebitReturn,
        Operation::CashReturn,
        Operation::EbtFsReturn,
        Operation::CreditReversal,
        Operation::DebitReversal,
        Operation::GiftCardReversal,
        Operation::CreditCpcEdit,
        Operation::CreditTxnEdit,
        Operation::CreditVoid,
        Operation::CheckVoid,
        Operation::GiftCardVoid,
        Operation::PrePaidAddValue,
        Operation::DebitAddValue,
        Operation::GiftCardAddValue,
        Operation::PrePaidBalanceInquiry,
        Operation::EbtBalanceInquiry,
        Operation::GiftCardBalance,
        Operation::GiftCardActivate,
        Operation::GiftCardAlias,
        Operation::GiftCardReplace,
        Operation::GiftCardReward,
    ];

    #[test]
    fn test_wire_names_are_unique() {
        let names: HashSet<&str> = CATALOG.iter().map(Operation::as_str).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_wire_names_use_gateway_casing() {
        assert_eq!(Operation::EbtFsPurchase.as_str(), "EBTFSPurchase");
        assert_eq!(Operation::EbtFsReturn.as_str(), "EBTFSReturn");
        assert_eq!(Operation::EbtCashBackPurchase.as_str(), "EBTCashBackPurchase");
        assert_eq!(Operation::EbtVoucherPurchase.as_str(), "EBTVoucherPurchase");
        assert_eq!(Operation::EbtBalanceInquiry.as_str(), "EBTBalanceInquiry");
        assert_eq!(Operation::CreditCpcEdit.as_str(), "CreditCPCEdit");
    }

    #[test]
    fn test_display_matches_wire_name() {
        for operation in CATALOG {
            assert_eq!(operation.to_string(), operation.as_str());
        }
    }

    #[test]
    fn test_wire_names_are_valid_element_names() {
        for operation in CATALOG {
            let name = operation.as_str();
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
