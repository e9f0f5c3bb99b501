//! Integration tests for gateway request construction.
//!
//! Tests the end-to-end pipeline from TOML credentials and a transaction
//! descriptor to the serialized envelope.

use portico_connector::{
    CardData, ConnectorError, GatewayConfig, GiftCardData, Operation, PaymentMethod,
    TransactionModifier, TransactionRequest, TransactionType,
    portico::{build_request, resolve, serialize, transaction_fields},
};
use rust_decimal_macros::dec;

#[test]
fn test_full_gateway_request_flow() {
    let toml = r#"
        secret_api_key = "skapi_cert_MTyMAQBiHVEAewvIzXVFcmUd2UcyBge_eCpaASUp0A"
        site_id = "144524"
        license_id = "144523"
        device_id = "90911395"
        username = "integration-user"
        password = "integration-pass"
        developer_id = "002914"
        version_number = "4321"
    "#;

    let config = GatewayConfig::from_toml(toml).expect("should parse valid TOML");

    let request = TransactionRequest::new(TransactionType::Sale)
        .with_payment_method(PaymentMethod::Credit(CardData {
            number: Some("4111111111111111".to_owned()),
            exp_month: Some(12),
            exp_year: Some(2026),
            cvn: Some("123".to_owned()),
        }))
        .with_amount(dec!(117.01));

    let xml = build_request(&request, &config).expect("credit sale must resolve");

    // Fixed skeleton with both namespace declarations on the root.
    assert!(xml.starts_with(
        "<soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\" \
         xmlns=\"http://Hps.Exchange.PosGateway\">"
    ));
    assert!(xml.contains("<soap:Body><PosRequest><Ver1.0><Header>"));
    assert!(xml.ends_with("</Ver1.0></PosRequest></soap:Body></soap:Envelope>"));

    // Header carries every configured credential, in schema order.
    assert!(xml.contains(
        "<Header><SecretAPIKey>skapi_cert_MTyMAQBiHVEAewvIzXVFcmUd2UcyBge_eCpaASUp0A\
         </SecretAPIKey><SiteId>144524</SiteId><LicenseId>144523</LicenseId>\
         <DeviceId>90911395</DeviceId><UserName>integration-user</UserName>\
         <Password>integration-pass</Password><DeveloperID>002914</DeveloperID>\
         <VersionNbr>4321</VersionNbr></Header>"
    ));

    // Transaction block is keyed by the resolved operation.
    assert!(xml.contains(
        "<Transaction><CreditSale><CardNbr>4111111111111111</CardNbr>\
         <ExpMonth>12</ExpMonth><ExpYear>2026</ExpYear><CVV2>123</CVV2>\
         <Amt>117.01</Amt></CreditSale></Transaction>"
    ));
}

#[test]
fn test_credit_auth_scenario() {
    let request = TransactionRequest::new(TransactionType::Auth)
        .with_payment_method(PaymentMethod::Credit(CardData::default()));

    let operation = resolve(&request).unwrap();
    assert_eq!(operation, Operation::CreditAuth);
    assert_eq!(operation.as_str(), "CreditAuth");
}

#[test]
fn test_ebt_cash_back_scenario() {
    let request = TransactionRequest::new(TransactionType::Sale)
        .with_payment_method(PaymentMethod::Ebt(CardData::default()))
        .with_modifier(TransactionModifier::CashBack);

    assert_eq!(resolve(&request).unwrap(), Operation::EbtCashBackPurchase);
}

#[test]
fn test_auth_without_payment_method_scenario() {
    let request = TransactionRequest::new(TransactionType::Auth);

    let err = resolve(&request).unwrap_err();
    let ConnectorError::UnsupportedTransaction(reason) = err else {
        panic!("expected UnsupportedTransaction");
    };
    assert!(reason.contains("requires a payment method"));
}

#[test]
fn test_batch_close_with_site_only_config_scenario() {
    let config = GatewayConfig::from_toml(r#"site_id = "123""#).unwrap();

    let xml = serialize(Operation::BatchClose, &[], &config);

    assert!(xml.contains("<Header><SiteId>123</SiteId></Header>"));
    assert!(xml.contains("<Transaction><BatchClose/></Transaction>"));
}

#[test]
fn test_sparse_config_omission_law() {
    let config = GatewayConfig::from_toml(
        r#"
        secret_api_key = "skapi_cert_example"
        device_id = "90911395"
        "#,
    )
    .unwrap();

    let request = TransactionRequest::new(TransactionType::Verify);
    let xml = build_request(&request, &config).unwrap();

    // Present keys appear exactly once.
    assert_eq!(xml.matches("<SecretAPIKey>").count(), 1);
    assert_eq!(xml.matches("<DeviceId>").count(), 1);

    // Absent keys never appear, defaulted or otherwise.
    for tag in ["SiteId", "LicenseId", "UserName", "Password", "DeveloperID", "VersionNbr"] {
        assert!(!xml.contains(&format!("<{tag}>")), "unexpected {tag} element");
    }
}

#[test]
fn test_gift_card_pipeline() {
    let config = GatewayConfig::from_toml(r#"secret_api_key = "skapi_cert_example""#).unwrap();

    let request = TransactionRequest::new(TransactionType::AddValue)
        .with_payment_method(PaymentMethod::Gift(GiftCardData {
            number: Some("5022440000000000007".to_owned()),
        }))
        .with_amount(dec!(25.00));

    let xml = build_request(&request, &config).unwrap();
    assert!(xml.contains(
        "<Transaction><GiftCardAddValue><CardNbr>5022440000000000007</CardNbr>\
         <Amt>25.00</Amt></GiftCardAddValue></Transaction>"
    ));
}

#[test]
fn test_check_sale_from_ach_method() {
    let request = TransactionRequest::new(TransactionType::Sale)
        .with_payment_method(PaymentMethod::Ach)
        .with_amount(dec!(11.00));

    let xml = build_request(&request, &GatewayConfig::default()).unwrap();
    assert!(xml.contains("<Transaction><CheckSale><Amt>11.00</Amt></CheckSale></Transaction>"));
}

#[test]
fn test_credential_escaping_end_to_end() {
    let config = GatewayConfig {
        password: Some("secret&<value>".to_owned()),
        ..GatewayConfig::default()
    };

    let request = TransactionRequest::new(TransactionType::BatchClose);
    let xml = build_request(&request, &config).unwrap();

    assert!(xml.contains("<Password>secret&amp;&lt;value&gt;</Password>"));
    assert!(!xml.contains("secret&<value>"));
}

#[test]
fn test_unknown_transaction_end_to_end() {
    let request = TransactionRequest::new(TransactionType::BenefitWithdrawal)
        .with_payment_method(PaymentMethod::Ebt(CardData::default()));

    let err = build_request(&request, &GatewayConfig::default()).unwrap_err();
    assert!(matches!(err, ConnectorError::UnknownTransaction(_)));
    assert!(err.to_string().contains("BenefitWithdrawal"));
}

#[test]
fn test_field_list_feeds_serializer_unchanged() {
    let request = TransactionRequest::new(TransactionType::Refund)
        .with_payment_method(PaymentMethod::Debit(CardData {
            number: Some("4024007197878776".to_owned()),
            exp_month: Some(6),
            exp_year: Some(2027),
            cvn: None,
        }))
        .with_amount(dec!(50.00));

    let operation = resolve(&request).unwrap();
    assert_eq!(operation, Operation::DebitReturn);

    let fields = transaction_fields(&request);
    let xml = serialize(operation, &fields, &GatewayConfig::default());
    let via_pipeline = build_request(&request, &GatewayConfig::default()).unwrap();
    assert_eq!(xml, via_pipeline);
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let err = GatewayConfig::from_toml("site_id = ").unwrap_err();
    assert!(matches!(err, ConnectorError::ConfigError(_)));
}
