//! Builds the HTTP port bundle from server configuration.

use std::io;
use std::sync::Arc;

use crate::domain::OrderService;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::DieselOrderRepository;

use super::ServerConfig;

/// Wrap the configured Diesel repository in the domain service.
///
/// Without a pool there is nothing to serve.
pub(super) fn build_http_state(config: &ServerConfig) -> io::Result<HttpState> {
    let pool = config
        .db_pool()
        .ok_or_else(|| io::Error::other("server has no order store configured"))?;
    let repository = Arc::new(DieselOrderRepository::new(pool.clone()));
    Ok(HttpState::from_service(Arc::new(OrderService::new(repository))))
}
