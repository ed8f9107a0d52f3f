// Types for the configuration settings

use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_RPC_PORT: u16 = 50051;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RpcSettings {
    pub enabled: bool,
    pub listen_address: String,
    pub port: u16,
}

impl Default for RpcSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            listen_address: "127.0.0.1".to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientSettings {
    /// Port appended to every address the client dials
    pub port: u16,
    pub connect_timeout_secs: u64,
}

impl ClientSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_RPC_PORT,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}
