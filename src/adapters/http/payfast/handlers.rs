//! HTTP handlers for PayFast callbacks.

use std::net::SocketAddr;

use axum::extract::rejection::FormRejection;
use axum::extract::{ConnectInfo, Form, State};
use axum::http::{HeaderMap, StatusCode};

use crate::application::PayfastFacade;
use crate::domain::payfast::FieldSet;

use super::origin::resolve_origin_ip;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state of the PayFast endpoints.
#[derive(Clone, Debug)]
pub struct PayfastAppState {
    pub facade: PayfastFacade,
}

impl PayfastAppState {
    pub fn new(facade: PayfastFacade) -> Self {
        Self { facade }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /payfast/notify - Receive an ITN
///
/// PayFast retries a notification until it gets a 200, so every outcome,
/// including rejected and malformed notifications, is answered with 200 and
/// only logged.
pub async fn handle_payfast_notification(
    State(state): State<PayfastAppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> StatusCode {
    let Form(pairs) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable Payfast notification body");
            return StatusCode::OK;
        }
    };

    let peer_addr = connect_info.map(|ConnectInfo(addr)| addr);
    let origin = resolve_origin_ip(&headers, &state.facade.ip_address_header(), peer_addr);
    let fields = FieldSet::from_form_pairs(pairs);

    match state
        .facade
        .handle_notification_request(origin.as_deref(), fields)
    {
        Ok(result) => {
            tracing::info!(
                accepted = result.accepted(),
                status = %result.status(),
                "Payfast notification processed"
            );
        }
        Err(err) => {
            tracing::warn!(
                code = %err.code(),
                origin = ?origin,
                error = %err,
                "Payfast notification rejected"
            );
        }
    }

    StatusCode::OK
}

/// GET|POST /payfast/cancel - Buyer returned after cancelling
pub async fn handle_payment_cancel() -> StatusCode {
    tracing::info!("Payfast payment cancelled by buyer");
    StatusCode::OK
}
