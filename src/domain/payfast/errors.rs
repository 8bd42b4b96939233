//! PayFast gateway error types.
//!
//! Every error here is fail-fast and non-retryable: it signals either a
//! misconfiguration or a security violation, never a transient condition.
//!
//! # Error Codes
//!
//! | Error | Code |
//! |-------|------|
//! | Configuration | CONFIGURATION_ERROR |
//! | MissingField | MISSING_FIELD |
//! | UnexpectedField | UNEXPECTED_FIELD |
//! | TamperedTransaction | TAMPERED_TRANSACTION |
//! | UntrustedOrigin | UNTRUSTED_ORIGIN |

use thiserror::Error;

/// Errors raised while building payment requests or validating notifications.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayfastError {
    /// One or more mandatory gateway parameters were not supplied.
    #[error(
        "You need to specify the following parameters to initialize the Payfast gateway: {}. Please check your configuration.",
        .missing.join(", ")
    )]
    Configuration { missing: Vec<&'static str> },

    /// A required field is absent.
    #[error("The required field {0} is missing")]
    MissingField(String),

    /// A field outside the declared schema was supplied.
    #[error("Unexpected field {0}")]
    UnexpectedField(String),

    /// Recomputed signature does not match the supplied one.
    #[error("The transaction may have been tampered with. This could indicate fraud.")]
    TamperedTransaction,

    /// Notification did not come from a PayFast host.
    #[error(
        "The transaction request originates from a server other than payfast: {}",
        .origin.as_deref().unwrap_or("unknown")
    )]
    UntrustedOrigin { origin: Option<String> },
}

impl PayfastError {
    pub fn configuration(missing: Vec<&'static str>) -> Self {
        PayfastError::Configuration { missing }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        PayfastError::MissingField(field.into())
    }

    pub fn unexpected_field(field: impl Into<String>) -> Self {
        PayfastError::UnexpectedField(field.into())
    }

    pub fn untrusted_origin(origin: Option<&str>) -> Self {
        PayfastError::UntrustedOrigin {
            origin: origin.map(str::to_string),
        }
    }

    /// Stable machine-readable code, used in structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            PayfastError::Configuration { .. } => "CONFIGURATION_ERROR",
            PayfastError::MissingField(_) => "MISSING_FIELD",
            PayfastError::UnexpectedField(_) => "UNEXPECTED_FIELD",
            PayfastError::TamperedTransaction => "TAMPERED_TRANSACTION",
            PayfastError::UntrustedOrigin { .. } => "UNTRUSTED_ORIGIN",
        }
    }

    /// The field this error is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            PayfastError::MissingField(field) | PayfastError::UnexpectedField(field) => Some(field),
            _ => None,
        }
    }

    /// Returns true if the error indicates tampering or a spoofed sender.
    pub fn is_security_violation(&self) -> bool {
        matches!(
            self,
            PayfastError::TamperedTransaction | PayfastError::UntrustedOrigin { .. }
        )
    }

    /// None of these conditions go away by trying again.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
