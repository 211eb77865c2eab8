//! Listener configuration.

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    /// Defaults, with the port overridden by `PORT` when it is set.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    fn from_port_var(port: Option<&str>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(port) = port {
            let port: u16 = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT value {port:?}"))?;
            config.addr.set_port(port);
        }
        Ok(config)
    }
}
