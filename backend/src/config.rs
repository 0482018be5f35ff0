//! Application settings loaded via OrthoConfig.
//!
//! Values layer from defaults, an optional configuration file, `BOOKSTORE_*`
//! environment variables and command-line flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Process-level settings for the bookstore server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKSTORE")]
pub struct AppSettings {
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<IpAddr>,
    /// TCP port to listen on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// PostgreSQL connection URL. Without one, books are kept in memory.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    #[ortho_config(default = 10)]
    pub db_pool_size: u32,
}

impl AppSettings {
    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }

    /// Configured database URL, ignoring blank values.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Maximum number of pooled database connections.
    #[must_use]
    pub const fn db_pool_size(&self) -> u32 {
        self.db_pool_size
    }
}
