//! OrderPaymentRequest - payment form fields for a shop order.

use serde::Deserialize;

use crate::domain::payfast::constants::{
    AMOUNT, CANCEL_URL, ITEM_NAME, M_PAYMENT_ID, NOTIFY_URL, RETURN_URL,
};
use crate::domain::payfast::FieldSet;

/// What a checkout needs to know about an order to send it to PayFast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderPaymentRequest {
    /// Merchant order number, echoed back as `m_payment_id`.
    pub order_number: String,
    /// Order total in cents.
    pub amount_cents: i64,
    /// Where PayFast sends the buyer after paying.
    pub return_url: Option<String>,
    /// ITN callback endpoint.
    pub notify_url: Option<String>,
    /// Where PayFast sends the buyer after cancelling.
    pub cancel_url: Option<String>,
}

impl OrderPaymentRequest {
    pub fn new(order_number: impl Into<String>, amount_cents: i64) -> Self {
        Self {
            order_number: order_number.into(),
            amount_cents,
            return_url: None,
            notify_url: None,
            cancel_url: None,
        }
    }

    pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = Some(url.into());
        self
    }

    pub fn with_notify_url(mut self, url: impl Into<String>) -> Self {
        self.notify_url = Some(url.into());
        self
    }

    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    pub fn item_name(&self) -> String {
        format!("Payfast order: {}", self.order_number)
    }

    /// Order total as posted to the gateway, with two decimal places.
    pub fn amount(&self) -> String {
        format_cents(self.amount_cents)
    }

    /// Request fields ready for `PayfastFacade::build_payment_form_fields`.
    pub fn into_fields(self) -> FieldSet {
        let mut fields = FieldSet::new()
            .with(M_PAYMENT_ID, self.order_number.as_str())
            .with(AMOUNT, self.amount())
            .with(ITEM_NAME, self.item_name());

        for (name, url) in [
            (RETURN_URL, self.return_url),
            (NOTIFY_URL, self.notify_url),
            (CANCEL_URL, self.cancel_url),
        ] {
            if let Some(url) = url {
                fields.insert(name, url);
            }
        }
        fields
    }
}

fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payfast::FieldValue;

    #[test]
    fn order_fields_name_the_order() {
        let fields = OrderPaymentRequest::new("1001", 25050).into_fields();

        assert_eq!(fields.get(M_PAYMENT_ID), Some(&FieldValue::from("1001")));
        assert_eq!(fields.get(AMOUNT), Some(&FieldValue::from("250.50")));
        assert_eq!(
            fields.get(ITEM_NAME),
            Some(&FieldValue::from("Payfast order: 1001"))
        );
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn urls_are_included_when_set() {
        let fields = OrderPaymentRequest::new("1001", 1000)
            .with_return_url("https://shop.example/return")
            .with_notify_url("https://shop.example/payfast/notify")
            .with_cancel_url("https://shop.example/payfast/cancel")
            .into_fields();

        let keys: Vec<&str> = fields.keys().collect();
        assert_eq!(
            keys,
            vec![M_PAYMENT_ID, AMOUNT, ITEM_NAME, RETURN_URL, NOTIFY_URL, CANCEL_URL]
        );
    }

    #[test]
    fn amount_keeps_two_decimal_places() {
        assert_eq!(OrderPaymentRequest::new("55", 10000).amount(), "100.00");
        assert_eq!(OrderPaymentRequest::new("55", 5997).amount(), "59.97");
        assert_eq!(OrderPaymentRequest::new("55", 30).amount(), "0.30");
        assert_eq!(OrderPaymentRequest::new("55", 5).amount(), "0.05");
        assert_eq!(OrderPaymentRequest::new("55", 0).amount(), "0.00");
        assert_eq!(OrderPaymentRequest::new("55", -150).amount(), "-1.50");
    }
}
