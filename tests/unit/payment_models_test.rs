// Request models and their JSON wire format

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use proptest::prelude::*;
use serde_json::json;
use tpay::payments::CreatePaymentRequest;
use tpay::Currency;

#[test]
fn test_create_payment_request_wire_format() {
    let wire = serde_json::to_value(TestDataFactory::create_payment_request()).unwrap();

    assert_eq!(
        wire,
        json!({
            "amount": {
                "currency": "GEL",
                "total": 110.5,
                "subtotal": 100.0,
                "tax": 5.5,
                "shipping": 5.0
            },
            "returnurl": "https://shop.example.ge/checkout/return",
            "extra": "order-7781",
            "expirationMinutes": 15,
            "methods": [5, 7, 8],
            "callbackUrl": "https://shop.example.ge/webhook",
            "preAuth": false,
            "language": "KA",
            "merchantPaymentId": "7781",
            "skipInfoMessage": false,
            "saveCard": false
        })
    );
}

#[test]
fn test_installment_products_and_card_expiry_are_sent_when_present() {
    let wire = serde_json::to_value(TestDataFactory::installment_payment_request()).unwrap();

    assert_eq!(
        wire["installmentProducts"],
        json!([
            {"name": "Laptop", "price": 2499.99, "quantity": 1},
            {"name": "Mouse", "price": 45.5, "quantity": 2}
        ])
    );
    assert_eq!(wire["saveCard"], true);
    assert_eq!(wire["saveCardToDate"], "1230");
}

#[test]
fn test_create_payment_request_accepts_gateway_field_names() {
    let wire = serde_json::to_string(&TestDataFactory::installment_payment_request()).unwrap();
    let parsed: CreatePaymentRequest = serde_json::from_str(&wire).unwrap();
    assert_eq!(parsed.return_url, "https://shop.example.ge/checkout/return");
    assert_eq!(parsed.installment_products.unwrap().len(), 2);
}

#[test]
fn test_recurring_request_types_share_wire_shape() {
    let execute = serde_json::to_value(TestDataFactory::execute_recurring_request()).unwrap();
    assert_eq!(
        execute,
        json!({
            "preAuth": false,
            "recId": "rec-5521",
            "merchantPaymentId": "sub-2024-09",
            "money": {"amount": 15.75, "currency": "GEL"}
        })
    );

    let cancel = serde_json::to_value(TestDataFactory::cancel_request()).unwrap();
    assert_eq!(
        cancel,
        json!({
            "preAuth": true,
            "recId": "rec-5521",
            "merchantPaymentId": "sub-2024-09",
            "extra": "customer request",
            "money": {"amount": 9.99, "currency": "USD"}
        })
    );
}

#[test]
fn test_create_payment_request_rejects_unknown_currency() {
    let mut wire = serde_json::to_value(TestDataFactory::create_payment_request()).unwrap();
    wire["amount"]["currency"] = json!("GBP");
    assert!(serde_json::from_value::<CreatePaymentRequest>(wire).is_err());
}

proptest! {
    #[test]
    fn currency_only_accepts_supported_codes(code in "[A-Za-z]{0,4}") {
        let supported = Currency::ALL
            .iter()
            .any(|c| c.code() == code.to_uppercase());

        prop_assert_eq!(code.parse::<Currency>().is_ok(), supported);

        // Wire format is exact: only the uppercase code deserializes
        let wire = serde_json::to_string(&code).unwrap();
        let exact = Currency::ALL.iter().any(|c| c.code() == code);
        prop_assert_eq!(serde_json::from_str::<Currency>(&wire).is_ok(), exact);
    }
}
