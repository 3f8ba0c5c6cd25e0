use std::sync::Arc;

use portfolio_db::PortfolioStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Store access for every handler. PostgreSQL in production.
    pub store: Arc<dyn PortfolioStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
