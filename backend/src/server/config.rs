//! HTTP server configuration object.

use std::net::SocketAddr;

use todo_backend::outbound::persistence::DbPool;

/// Everything needed to start the HTTP listener.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration from the listener address and the
    /// process-wide connection pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}
