//! PayFast Gateway - ITN endpoint server
//!
//! Loads the `PAYFAST__*` configuration and serves the PayFast callback
//! routes.

use std::net::SocketAddr;
use std::sync::Arc;

use payfast_gateway::adapters::{payfast_router, PayfastAppState, WebIntegrationConfig};
use payfast_gateway::application::PayfastFacade;
use payfast_gateway::config::PayfastConfig;
use payfast_gateway::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PayfastConfig::load_validated()?;
    init_tracing(&config.server);

    let addr = config.server.socket_addr()?;
    let source = WebIntegrationConfig::new(config)?;
    let facade = PayfastFacade::new(Arc::new(source));
    tracing::info!(action_url = %facade.form_action(), "Payfast gateway configured");

    let app = payfast_router(PayfastAppState::new(facade));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening for Payfast notifications");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
