//! Axum router configuration for PayFast endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{handle_payfast_notification, handle_payment_cancel, PayfastAppState};

/// Create the PayFast callback routes.
///
/// # Routes
/// - `POST /notify` - ITN endpoint, always answers 200
/// - `GET|POST /cancel` - Buyer cancellation landing
pub fn payfast_routes() -> Router<PayfastAppState> {
    Router::new()
        .route("/notify", post(handle_payfast_notification))
        .route("/cancel", get(handle_payment_cancel).post(handle_payment_cancel))
}

/// Create the complete PayFast router mounted at `/payfast`.
///
/// Serve it with `into_make_service_with_connect_info::<SocketAddr>()` so the
/// peer address is available for `REMOTE_ADDR` origin resolution.
pub fn payfast_router(state: PayfastAppState) -> Router {
    Router::new()
        .nest("/payfast", payfast_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
