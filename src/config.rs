use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,item_registry=debug";

/// Where the service listens and what it logs.
///
/// There is no external configuration surface beyond `RUST_LOG`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listens_on_port_8080_on_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.port(), 8080);
        assert!(config.addr.ip().is_unspecified());
    }

    #[test]
    fn default_filter_enables_crate_debug_logs() {
        assert!(ServerConfig::default()
            .log_filter
            .contains("item_registry=debug"));
    }
}
