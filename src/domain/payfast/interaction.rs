//! Field schemas and the outbound payment form request.

use serde::Serialize;

use super::constants::*;
use super::errors::PayfastError;
use super::fields::FieldSet;
use super::signer::Signer;

/// Required and optional fields of one kind of gateway interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

/// Fields accepted when building a payment request form.
pub const PAYMENT_FORM_SCHEMA: FieldSchema = FieldSchema {
    required: &[MERCHANT_KEY, MERCHANT_ID, AMOUNT, ITEM_NAME],
    optional: &[
        RETURN_URL,
        NOTIFY_URL,
        CANCEL_URL,
        NAME_FIRST,
        NAME_LAST,
        EMAIL_ADDRESS,
        CELL_NUMBER,
        M_PAYMENT_ID,
        ITEM_DESCRIPTION,
        EMAIL_CONFIRMATION,
    ],
};

/// Fields accepted in an ITN notification.
pub const PAYMENT_NOTIFICATION_SCHEMA: FieldSchema = FieldSchema {
    required: &[
        PF_PAYMENT_ID,
        PAYMENT_STATUS,
        ITEM_NAME,
        AMOUNT_GROSS,
        AMOUNT_FEE,
        AMOUNT_NET,
        MERCHANT_ID,
    ],
    optional: &[
        M_PAYMENT_ID,
        ITEM_DESCRIPTION,
        NAME_FIRST,
        NAME_LAST,
        EMAIL_ADDRESS,
        SIGNATURE,
    ],
};

impl FieldSchema {
    pub fn allows(&self, field: &str) -> bool {
        self.required.contains(&field) || self.optional.contains(&field)
    }

    /// Checks that every required field is present and nothing else was sent.
    ///
    /// Required fields are checked first, in schema order, then the supplied
    /// fields in their insertion order.
    pub fn check_fields(&self, fields: &FieldSet) -> Result<(), PayfastError> {
        if let Some(missing) = self.required.iter().find(|name| !fields.contains_key(name)) {
            return Err(PayfastError::missing_field(*missing));
        }

        if let Some(unexpected) = fields.keys().find(|name| !self.allows(name)) {
            return Err(PayfastError::unexpected_field(unexpected));
        }

        Ok(())
    }
}

/// Hidden input of the payment form posted to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    #[serde(rename = "type")]
    pub input_type: &'static str,
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            input_type: "hidden",
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Validated and signed payment request.
#[derive(Debug, Clone)]
pub struct PaymentFormRequest {
    fields: FieldSet,
}

impl PaymentFormRequest {
    /// Validates `fields` against the payment form schema and signs them.
    ///
    /// The signature is appended as the last field.
    pub fn new(signer: &dyn Signer, mut fields: FieldSet) -> Result<Self, PayfastError> {
        PAYMENT_FORM_SCHEMA.check_fields(&fields)?;

        let signature = signer.sign(&fields);
        fields.insert(SIGNATURE, signature);

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn signature(&self) -> Option<&str> {
        self.fields.get(SIGNATURE).and_then(|value| value.as_text())
    }

    /// Hidden form fields, in insertion order.
    pub fn build_form_fields(&self) -> Vec<FormField> {
        self.fields
            .iter()
            .map(|(name, value)| FormField::hidden(name, value.render()))
            .collect()
    }
}
