use super::types::{ClientSettings, RpcSettings};
use super::MEMBER_CONFIG;
use crate::error::RpcError;
use serde::Deserialize;

// Member rpc configuration settings struct
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Server side settings
    pub rpc: RpcSettings,
    /// Settings used when dialing a remote endpoint
    pub client: ClientSettings,
}

/// Initialize the global MEMBER_CONFIG struct.
/// Fails if settings were already set or read.
pub fn init_global_settings(s: Settings) -> Result<(), RpcError> {
    MEMBER_CONFIG
        .set(s)
        .map_err(|_| RpcError::Config("global settings already initialized".to_string()))
}

impl Settings {
    /// Parse settings from the contents of a TOML file
    pub fn from_toml(contents: &str) -> Result<Self, RpcError> {
        Ok(toml::from_str(contents)?)
    }

    fn global() -> &'static Settings {
        MEMBER_CONFIG.get_or_init(Settings::default)
    }

    /// Retrieves the rpc server configuration from the global MEMBER_CONFIG struct.
    pub fn get_rpc() -> &'static RpcSettings {
        &Self::global().rpc
    }

    /// Retrieves the client configuration from the global MEMBER_CONFIG struct.
    pub fn get_client() -> &'static ClientSettings {
        &Self::global().client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_settings_parsing() {
        let contents = r#"
            [rpc]
            enabled = false
            listen_address = "0.0.0.0"
            port = 7000

            [client]
            port = 7001
            connect_timeout_secs = 3
        "#;
        let settings = Settings::from_toml(contents).unwrap();
        assert!(!settings.rpc.enabled);
        assert_eq!(settings.rpc.listen_address, "0.0.0.0");
        assert_eq!(settings.rpc.port, 7000);
        assert_eq!(settings.client.port, 7001);
        assert_eq!(settings.client.connect_timeout_secs, 3);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());

        let settings = Settings::from_toml("[client]\nport = 9000\n").unwrap();
        assert_eq!(settings.client.port, 9000);
        assert_eq!(settings.rpc, RpcSettings::default());
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let result = Settings::from_toml("[client]\nport = \"high\"\n");
        assert!(matches!(result, Err(RpcError::Config(_))));
    }

    #[test]
    fn test_template_parses() {
        let settings = Settings::from_toml(include_str!("../../settings.tpl.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
