//! Pipeline tests for gateway request construction.


use rust_decimal_macros::dec;

use crate::{
    config::GatewayConfig,
    error::ConnectorError,
    portico::build_request,
    transaction::{CardData, PaymentMethod, TransactionRequest, TransactionType},
};

#[test]
fn test_build_request_resolves_and_serializes() {
    let config = GatewayConfig {
        secret_api_key: Some("skapi_cert_example".to_owned()),
        ..GatewayConfig::default()
    };
    let request = TransactionRequest::new(TransactionType::Sale)
        .with_payment_method(PaymentMethod::Credit(CardData {
            number: Some("4111111111111111".to_owned()),
            exp_month: Some(12),
            exp_year: Some(2026),
            cvn: Some("123".to_owned()),
        }))
        .with_amount(dec!(10.00));

    let xml = build_request(&request, &config).unwrap();

    assert!(xml.starts_with("<soap:Envelope"));
    assert!(xml.contains("<SecretAPIKey>skapi_cert_example</SecretAPIKey>"));
    assert!(xml.contains("<CreditSale>"));
    assert!(xml.contains("<CardNbr>4111111111111111</CardNbr>"));
    assert!(xml.contains("<Amt>10.00</Amt>"));
}

#[test]
fn test_build_request_propagates_unsupported() {
    let request = TransactionRequest::new(TransactionType::Auth);
    let err = build_request(&request, &GatewayConfig::default()).unwrap_err();
    assert!(matches!(err, ConnectorError::UnsupportedTransaction(_)));
}

#[test]
fn test_build_request_propagates_unknown() {
    let request = TransactionRequest::new(TransactionType::Fetch);
    let err = build_request(&request, &GatewayConfig::default()).unwrap_err();
    assert!(matches!(err, ConnectorError::UnknownTransaction(_)));
}

#[test]
fn test_build_request_with_empty_config_omits_all_credentials() {
    let request = TransactionRequest::new(TransactionType::BatchClose);
    let xml = build_request(&request, &GatewayConfig::default()).unwrap();

    assert!(xml.contains("<Header/>"));
    let credential_tags = [
        "SecretAPIKey", "SiteId", "LicenseId", "DeviceId", "UserName", "Password", "DeveloperID",
        "VersionNbr",
    ];
    for tag in credential_tags {
        assert!(!xml.contains(tag), "unexpected {tag} element in {xml}");
    }
}
