//! Envelope serialization.
//!
//! Composes a resolved operation, its transaction fields, and the credential
//! configuration into the gateway's fixed SOAP skeleton and renders it to a
//! single-line XML string.

use crate::{config::GatewayConfig, portico::Operation, xml::Element};

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Gateway message namespace.
pub const GATEWAY_NS: &str = "http://Hps.Exchange.PosGateway";

/// Schema version wrapper element.
const VERSION_TAG: &str = "Ver1.0";

/// Serializes a gateway request envelope.
///
/// The skeleton is fixed:
///
/// ```text
/// <soap:Envelope xmlns:soap=".../soap/envelope/" xmlns="http://Hps.Exchange.PosGateway">
///   <soap:Body>
///     <PosRequest>
///       <Ver1.0>
///         <Header>..one element per present credential, in schema order..</Header>
///         <Transaction><{operation}>..field elements..</{operation}></Transaction>
///       </Ver1.0>
///     </PosRequest>
///   </soap:Body>
/// </soap:Envelope>
/// ```
///
/// Credentials absent from `config` are omitted from the header; a key never
/// appears with a defaulted value. Serialization cannot fail: only resolved
/// [`Operation`] values and an already-structured field list reach it.
///
/// # Examples
///
/// ```
/// use portico_connector::{GatewayConfig, Operation, portico::serialize};
///
/// let config = GatewayConfig { site_id: Some("123".to_owned()), ..GatewayConfig::default() };
/// let xml = serialize(Operation::BatchClose, &[], &config);
///
/// assert!(xml.contains("<Header><SiteId>123</SiteId></Header>"));
/// assert!(xml.contains("<Transaction><BatchClose/></Transaction>"));
/// ```
#[must_use]
pub fn serialize(
    operation: Operation,
    fields: &[(&'static str, String)],
    config: &GatewayConfig,
) -> String {
    let mut header = Element::new("Header");
    for (tag, value) in config.header_pairs() {
        header = header.child(Element::new(tag).text(value));
    }

    let mut transaction_body = Element::new(operation.as_str());
    for (tag, value) in fields {
        transaction_body = transaction_body.child(Element::new(tag).text(value));
    }

    Element::new("soap:Envelope")
        .attribute("xmlns:soap", SOAP_ENVELOPE_NS)
        .attribute("xmlns", GATEWAY_NS)
        .child(
            Element::new("soap:Body").child(
                Element::new("PosRequest").child(
                    Element::new(VERSION_TAG)
                        .child(header)
                        .child(Element::new("Transaction").child(transaction_body)),
                ),
            ),
        )
        .render()
}
