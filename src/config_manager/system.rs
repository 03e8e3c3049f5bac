use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// System configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(rename = "conf_version")]
    #[serde(default = "default_conf_version")]
    pub conf_version: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(rename = "engine_service_url")]
    #[serde(default = "default_engine_service_url")]
    pub engine_service_url: String,
}

fn default_conf_version() -> String {
    "v1.0.0".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    12393
}

fn default_engine_service_url() -> String {
    "http://localhost:8000".to_string()
}

impl SystemConfig {
    /// Socket address to bind; an unparsable host binds all interfaces
    pub fn bind_addr(&self) -> SocketAddr {
        let ip = self
            .host
            .parse::<IpAddr>()
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        SocketAddr::new(ip, self.port)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            conf_version: default_conf_version(),
            host: default_host(),
            port: default_port(),
            engine_service_url: default_engine_service_url(),
        }
    }
}
