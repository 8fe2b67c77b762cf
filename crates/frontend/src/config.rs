//! Server configuration.
//!
//! Settings can be loaded from environment variables or constructed
//! programmatically. The rendering core reads none of them.

use core::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::env;

use anyhow::{Context as _, Result};

/// Default bind host.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;

/// Where the HTTP server listens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// IP address to bind
    pub host: String,
    /// TCP port; `0` asks the OS for a free port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST.to_string(), DEFAULT_PORT)
    }
}

impl ServerConfig {
    /// Construct a `ServerConfig` with explicit values.
    #[inline]
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `FRONTEND_HOST`: Address to bind (default: `127.0.0.1`)
    /// - `FRONTEND_PORT`: Port to bind (default: 3000; unparsable values fall
    ///   back to the default)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("FRONTEND_HOST")
            .map(|val| val.trim().to_owned())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("FRONTEND_PORT")
            .and_then(|val| val.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }

    /// Resolve the bind address.
    ///
    /// # Errors
    /// Returns an error if the host is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("invalid bind host {:?}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
