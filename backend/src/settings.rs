//! Process configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TODO_*` environment variables, or a
//! configuration file, in OrthoConfig's usual precedence. The connection
//! string additionally falls back to the conventional `DATABASE_URL` variable.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

/// Conventional variable consulted when `TODO_DATABASE_URL` is unset.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Errors raised while resolving settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Neither `TODO_DATABASE_URL` nor `DATABASE_URL` provided a value.
    #[error("database connection string is not configured; set TODO_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,
    /// The bind address does not parse as `host:port`.
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Configuration values for the todo service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TODO")]
pub struct TodoSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Socket address for the HTTP listener.
    #[ortho_config(default = "0.0.0.0:8080".to_owned())]
    pub bind_addr: String,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection before failing the request.
    pub pool_connection_timeout_secs: Option<u64>,
}

impl TodoSettings {
    /// Resolve the connection string, consulting `DATABASE_URL` as a fallback.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingDatabaseUrl`] when neither source holds
    /// a non-blank value.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        resolve_database_url(
            self.database_url.as_deref(),
            std::env::var(DATABASE_URL_ENV).ok().as_deref(),
        )
    }

    /// Parse the listener address (`0.0.0.0:8080` unless configured).
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] for unparsable values.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: self.bind_addr.clone(),
                message: err.to_string(),
            })
    }

    /// Build the pool configuration from the resolved settings.
    ///
    /// # Errors
    ///
    /// Propagates [`TodoSettings::database_url`] failures.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let mut config = PoolConfig::new(self.database_url()?);
        if let Some(max_size) = self.pool_max_size {
            config = config.with_max_size(max_size);
        }
        if let Some(secs) = self.pool_connection_timeout_secs {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

/// Pick the first non-blank connection string.
fn resolve_database_url(
    configured: Option<&str>,
    fallback: Option<&str>,
) -> Result<String, SettingsError> {
    configured
        .into_iter()
        .chain(fallback)
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_owned)
        .ok_or(SettingsError::MissingDatabaseUrl)
}
