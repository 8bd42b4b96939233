//! Integration tests for the PayFast checkout flow.
//!
//! These tests drive the public facade the way a shop does:
//! 1. An order becomes a signed payment form
//! 2. A PayFast ITN for that order is validated
//! 3. Signing properties hold for arbitrary field values

use std::sync::Arc;

use proptest::prelude::*;
use secrecy::SecretString;
use serde_json::json;

use payfast_gateway::adapters::StaticPayfastConfig;
use payfast_gateway::application::{OrderPaymentRequest, PayfastFacade};
use payfast_gateway::domain::payfast::constants::*;
use payfast_gateway::domain::payfast::{
    FieldSet, FieldValue, Md5Signer, PayfastError, Signer, REQUEST_HASH_KEYS,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

const PASSPHRASE_VALUE: &str = "jt7NOE43FZPn";

fn sandbox_facade() -> PayfastFacade {
    PayfastFacade::new(Arc::new(StaticPayfastConfig::sandbox()))
}

fn salted_facade() -> PayfastFacade {
    PayfastFacade::new(Arc::new(
        StaticPayfastConfig::sandbox().with_passphrase(PASSPHRASE_VALUE),
    ))
}

fn order() -> OrderPaymentRequest {
    OrderPaymentRequest::new("1001", 25050)
        .with_return_url("https://shop.example/checkout/thank-you")
        .with_notify_url("https://shop.example/payfast/notify")
        .with_cancel_url("https://shop.example/payfast/cancel")
}

/// ITN for order 1001 as decoded from the posted form body.
fn itn_pairs(signature: &str) -> Vec<(&'static str, String)> {
    vec![
        (M_PAYMENT_ID, "1001".to_string()),
        (PF_PAYMENT_ID, "1089250".to_string()),
        (PAYMENT_STATUS, "COMPLETE".to_string()),
        (ITEM_NAME, "Payfast order: 1001".to_string()),
        (AMOUNT_GROSS, "250.00".to_string()),
        (AMOUNT_FEE, "-5.75".to_string()),
        (AMOUNT_NET, "244.25".to_string()),
        (NAME_FIRST, "Test".to_string()),
        (NAME_LAST, "User".to_string()),
        (EMAIL_ADDRESS, "test@example.com".to_string()),
        (MERCHANT_ID, "10000100".to_string()),
        (SIGNATURE, signature.to_string()),
    ]
}

const ITN_SIGNATURE: &str = "599d37bf89942c2e2381fc9d18c1e535";
const SALTED_ITN_SIGNATURE: &str = "88b20239889f4a7f95efec7f18fa2253";

// =============================================================================
// Payment Form Tests
// =============================================================================

#[test]
fn order_becomes_signed_payment_form() {
    let fields = sandbox_facade()
        .build_payment_form_fields(order().into_fields())
        .unwrap();

    let json = serde_json::to_value(&fields).unwrap();
    assert_eq!(
        json,
        json!([
            { "type": "hidden", "name": "m_payment_id", "value": "1001" },
            { "type": "hidden", "name": "amount", "value": "250.50" },
            { "type": "hidden", "name": "item_name", "value": "Payfast order: 1001" },
            { "type": "hidden", "name": "return_url", "value": "https://shop.example/checkout/thank-you" },
            { "type": "hidden", "name": "notify_url", "value": "https://shop.example/payfast/notify" },
            { "type": "hidden", "name": "cancel_url", "value": "https://shop.example/payfast/cancel" },
            { "type": "hidden", "name": "merchant_id", "value": "10000100" },
            { "type": "hidden", "name": "merchant_key", "value": "46f0cd694581a" },
            { "type": "hidden", "name": "signature", "value": "b3f21457b73d29c0cc4d922ddc0ca312" },
        ])
    );
}

#[test]
fn passphrase_salts_payment_form_signature() {
    let fields = salted_facade()
        .build_payment_form_fields(order().into_fields())
        .unwrap();

    let signature = fields.last().unwrap();
    assert_eq!(signature.name, SIGNATURE);
    assert_eq!(signature.value, "17c07bbcb8dc1c8992034ac2cebbb62d");
}

#[test]
fn order_amount_is_posted_with_two_decimal_places() {
    let fields = sandbox_facade()
        .build_payment_form_fields(OrderPaymentRequest::new("55", 10000).into_fields())
        .unwrap();

    let amount = fields.iter().find(|field| field.name == AMOUNT).unwrap();
    let signature = fields.last().unwrap();
    assert_eq!(amount.value, "100.00");
    assert_eq!(signature.value, "5dc96b2728f0520961729bee6b2d3746");
}

#[test]
fn payment_form_requires_amount() {
    let mut fields = order().into_fields();
    fields.remove(AMOUNT);

    assert_eq!(
        sandbox_facade().build_payment_form_fields(fields),
        Err(PayfastError::missing_field(AMOUNT))
    );
}

#[test]
fn confirmation_address_is_not_accepted_on_payment_form() {
    let fields = order()
        .into_fields()
        .with(CONFIRMATION_ADDRESS, "orders@shop.example");

    let err = sandbox_facade().build_payment_form_fields(fields).unwrap_err();
    assert_eq!(err.code(), "UNEXPECTED_FIELD");
    assert_eq!(err.field(), Some(CONFIRMATION_ADDRESS));
}

// =============================================================================
// Notification Tests
// =============================================================================

#[test]
fn genuine_itn_is_accepted() {
    let fields = FieldSet::from_form_pairs(itn_pairs(ITN_SIGNATURE));

    let result = sandbox_facade()
        .handle_notification_request(Some("www.payfast.co.za"), fields)
        .unwrap();

    assert!(result.accepted());
    assert_eq!(result.status(), "COMPLETE");
    assert_eq!(
        result.fields().get(M_PAYMENT_ID),
        Some(&FieldValue::from("1001"))
    );
    assert!(!result.fields().contains_key(SIGNATURE));
}

#[test]
fn salted_itn_is_accepted_with_passphrase() {
    let fields = FieldSet::from_form_pairs(itn_pairs(SALTED_ITN_SIGNATURE));

    let result = salted_facade()
        .handle_notification_request(Some("w1w.payfast.co.za"), fields)
        .unwrap();

    assert!(result.accepted());
}

#[test]
fn salted_itn_is_tampered_without_passphrase() {
    let fields = FieldSet::from_form_pairs(itn_pairs(SALTED_ITN_SIGNATURE));

    assert_eq!(
        sandbox_facade().handle_notification_request(Some("www.payfast.co.za"), fields),
        Err(PayfastError::TamperedTransaction)
    );
}

#[test]
fn modified_amount_is_tampered() {
    let mut fields = FieldSet::from_form_pairs(itn_pairs(ITN_SIGNATURE));
    fields.insert(AMOUNT_GROSS, "2.50");

    assert_eq!(
        sandbox_facade().handle_notification_request(Some("www.payfast.co.za"), fields),
        Err(PayfastError::TamperedTransaction)
    );
}

#[test]
fn itn_from_unknown_host_is_untrusted() {
    let fields = FieldSet::from_form_pairs(itn_pairs(ITN_SIGNATURE));

    let err = sandbox_facade()
        .handle_notification_request(Some("payfast.attacker.example"), fields)
        .unwrap_err();

    assert_eq!(
        err,
        PayfastError::untrusted_origin(Some("payfast.attacker.example"))
    );
    assert!(err.is_security_violation());
}

#[test]
fn itn_without_origin_is_untrusted() {
    let fields = FieldSet::from_form_pairs(itn_pairs(ITN_SIGNATURE));

    assert_eq!(
        sandbox_facade().handle_notification_request(None, fields),
        Err(PayfastError::untrusted_origin(None))
    );
}

#[test]
fn schema_is_checked_before_signature() {
    let mut fields = FieldSet::from_form_pairs(itn_pairs("not-a-signature"));
    fields.insert("custom_str1", "extra");

    assert_eq!(
        sandbox_facade().handle_notification_request(Some("www.payfast.co.za"), fields),
        Err(PayfastError::unexpected_field("custom_str1"))
    );
}

#[test]
fn cancelled_itn_is_a_rejected_result() {
    let signer = Md5Signer::new();
    let mut fields = FieldSet::from_form_pairs(itn_pairs(""));
    fields.remove(SIGNATURE);
    fields.insert(PAYMENT_STATUS, PAYMENT_RESULT_CANCELLED);
    let signature = signer.generate_hash(&payfast_gateway::domain::payfast::signature_string(
        &fields,
        &payfast_gateway::domain::payfast::RESPONSE_HASH_KEYS,
    ));
    fields.insert(SIGNATURE, signature);

    let result = sandbox_facade()
        .handle_notification_request(Some("sandbox.payfast.co.za"), fields)
        .unwrap();

    assert!(!result.accepted());
    assert_eq!(result.status(), PAYMENT_RESULT_CANCELLED);
}

// =============================================================================
// Signing Properties
// =============================================================================

fn request_value() -> impl Strategy<Value = String> {
    "[ -~]{1,24}"
}

proptest! {
    #[test]
    fn signing_is_deterministic(name in request_value(), amount in 1u32..1_000_000) {
        let fields = FieldSet::new()
            .with(ITEM_NAME, name)
            .with(AMOUNT, FieldValue::Integer(i64::from(amount)));
        let signer = Md5Signer::new();

        prop_assert_eq!(signer.sign(&fields), signer.sign(&fields.clone()));
    }

    #[test]
    fn signature_is_lowercase_hex(name in request_value()) {
        let signature = Md5Signer::new().sign(&FieldSet::new().with(ITEM_NAME, name));

        prop_assert_eq!(signature.len(), 32);
        prop_assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn changing_a_signed_field_changes_signature(a in request_value(), b in request_value()) {
        prop_assume!(a != b);
        let signer = Md5Signer::new();

        prop_assert_ne!(
            signer.sign(&FieldSet::new().with(ITEM_NAME, a)),
            signer.sign(&FieldSet::new().with(ITEM_NAME, b))
        );
    }

    #[test]
    fn passphrase_changes_signature(name in request_value(), passphrase in "[a-zA-Z0-9]{1,16}") {
        let fields = FieldSet::new().with(ITEM_NAME, name);
        let salted = Md5Signer::with_passphrase(Some(SecretString::new(passphrase)));

        prop_assert_ne!(Md5Signer::new().sign(&fields), salted.sign(&fields));
    }

    #[test]
    fn unsigned_fields_do_not_affect_signature(name in request_value(), extra in request_value()) {
        let fields = FieldSet::new().with(ITEM_NAME, name);
        let with_extra = fields.clone().with("custom_str1", extra);
        let signer = Md5Signer::new();

        prop_assert_eq!(signer.sign(&fields), signer.sign(&with_extra));
    }

    #[test]
    fn only_request_keys_are_signed(key in "[a-z_]{1,20}", value in request_value()) {
        prop_assume!(!REQUEST_HASH_KEYS.contains(&key.as_str()));
        let signer = Md5Signer::new();

        prop_assert_eq!(
            signer.sign(&FieldSet::new().with(key, value)),
            signer.generate_hash("")
        );
    }
}
