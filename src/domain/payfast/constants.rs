//! PayFast protocol constants.
//!
//! Field names, gateway hosts, endpoint URLs and payment results as published
//! in the PayFast checkout and ITN documentation.

// Merchant details
pub const MERCHANT_ID: &str = "merchant_id";
pub const MERCHANT_KEY: &str = "merchant_key";
pub const RETURN_URL: &str = "return_url";
pub const CANCEL_URL: &str = "cancel_url";
pub const NOTIFY_URL: &str = "notify_url";

// Buyer details
pub const NAME_FIRST: &str = "name_first";
pub const NAME_LAST: &str = "name_last";
pub const EMAIL_ADDRESS: &str = "email_address";
pub const CELL_NUMBER: &str = "cell_number";

// Transaction details
pub const M_PAYMENT_ID: &str = "m_payment_id";
pub const AMOUNT: &str = "amount";
pub const ITEM_NAME: &str = "item_name";
pub const ITEM_DESCRIPTION: &str = "item_description";

// Transaction options
pub const EMAIL_CONFIRMATION: &str = "email_confirmation";
pub const CONFIRMATION_ADDRESS: &str = "confirmation_address";

// Security
pub const SIGNATURE: &str = "signature";
pub const PASSPHRASE: &str = "passphrase";

// Notification (ITN) fields
pub const PF_PAYMENT_ID: &str = "pf_payment_id";
pub const PAYMENT_STATUS: &str = "payment_status";
pub const AMOUNT_GROSS: &str = "amount_gross";
pub const AMOUNT_FEE: &str = "amount_fee";
pub const AMOUNT_NET: &str = "amount_net";

// Gateway settings
pub const SIGNER: &str = "signer";
pub const ACTION_URL: &str = "action_url";

/// Hosts allowed to send ITN callbacks (ITN security step two).
///
/// Only changeable in code: widening this list weakens the trust boundary.
pub const VALID_PAYFAST_HOSTS: [&str; 4] = [
    "www.payfast.co.za",
    "sandbox.payfast.co.za",
    "w1w.payfast.co.za",
    "w2w.payfast.co.za",
];

// Sandbox defaults
pub const MERCHANT_ID_DEV: i64 = 10000100;
pub const MERCHANT_KEY_DEV: &str = "46f0cd694581a";
pub const ACTION_URL_DEV: &str = "https://sandbox.payfast.co.za/eng/process";

// Live defaults
pub const ACTION_URL_LIVE: &str = "https://payfast.co.za/eng/process";

// Payment results
pub const PAYMENT_RESULT_COMPLETE: &str = "COMPLETE";
pub const PAYMENT_RESULT_CANCELLED: &str = "CANCELLED";

/// Returns true if `host` is one of the PayFast ITN hosts.
pub fn is_valid_payfast_host(host: &str) -> bool {
    VALID_PAYFAST_HOSTS.contains(&host)
}
