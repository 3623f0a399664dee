//! Service configuration loaded via OrthoConfig.
//!
//! Values layer as CLI flags over `ORDERS_*` environment variables over a
//! configuration file. The five database keys are required; loading fails
//! when any of them is absent.

use std::fmt;
use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::persistence::DEFAULT_POOL_MAX_SIZE;

/// Address the HTTP server binds when none is configured.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Errors raised while turning loaded settings into usable values.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The database coordinates cannot form a connection URL.
    #[error("invalid database {part}: {reason}")]
    InvalidDatabaseUrl { part: &'static str, reason: String },
    /// The listen address is not a `host:port` socket address.
    #[error("invalid listen address {value:?}: {source}")]
    InvalidListenAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// The pool size must be at least one.
    #[error("pool_max_size must be at least 1")]
    EmptyPool,
}

/// Connection and listener settings for the orders service.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ORDERS")]
pub struct AppSettings {
    /// Database name.
    pub dbname: String,
    /// Database role.
    pub user: String,
    /// Database password.
    pub password: String,
    /// Database host name or address.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// HTTP bind address, `host:port`.
    pub listen_addr: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("listen_addr", &self.listen_addr)
            .field("pool_max_size", &self.pool_max_size)
            .finish()
    }
}

fn url_error(part: &'static str, reason: impl fmt::Display) -> SettingsError {
    SettingsError::InvalidDatabaseUrl {
        part,
        reason: reason.to_string(),
    }
}

impl AppSettings {
    /// Build a `postgres://` URL with every component percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidDatabaseUrl`] when the host is not a
    /// valid URL host.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        let mut url = Url::parse("postgres://localhost").map_err(|err| url_error("url", err))?;
        url.set_host(Some(&self.host))
            .map_err(|err| url_error("host", err))?;
        url.set_port(Some(self.port))
            .map_err(|()| url_error("port", self.port))?;
        url.set_username(&self.user)
            .map_err(|()| url_error("user", "cannot be encoded"))?;
        url.set_password(Some(&self.password))
            .map_err(|()| url_error("password", "cannot be encoded"))?;
        url.path_segments_mut()
            .map_err(|()| url_error("dbname", "cannot be encoded"))?
            .push(&self.dbname);
        Ok(url.into())
    }

    /// Parse the configured bind address, falling back to
    /// [`DEFAULT_LISTEN_ADDR`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidListenAddr`] for malformed input.
    pub fn listen_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.listen_addr.as_deref().unwrap_or(DEFAULT_LISTEN_ADDR);
        raw.parse()
            .map_err(|source| SettingsError::InvalidListenAddr {
                value: raw.to_owned(),
                source,
            })
    }

    /// Configured pool size, falling back to [`DEFAULT_POOL_MAX_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::EmptyPool`] when configured as zero.
    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size {
            Some(0) => Err(SettingsError::EmptyPool),
            Some(size) => Ok(size),
            None => Ok(DEFAULT_POOL_MAX_SIZE),
        }
    }
}
