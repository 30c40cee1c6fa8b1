use std::net::{Ipv4Addr, SocketAddr};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration. The listen port is the only setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Reads `PORT` from the environment
    pub fn from_env() -> Self {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    fn from_port_var(value: Option<&str>) -> Self {
        let port = match value.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, default = DEFAULT_PORT, "Invalid PORT, using default");
                DEFAULT_PORT
            }),
        };

        Self { port }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
