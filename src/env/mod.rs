use {
    crate::error::{SelectError, SelectResult},
    serde::{de::DeserializeOwned, Deserialize},
    url::Url,
};

mod keys;
mod runtime;

pub use {keys::*, runtime::*};

/// Explicit configuration for wallet selection. The web app reads these
/// signals ambiently; here they are threaded through as one struct so tests
/// and embedders stay in control of them.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    pub runtime: RuntimeConfig,
    pub keys: KeysConfig,
}

impl Config {
    pub fn from_env() -> SelectResult<Config> {
        let config = Self {
            runtime: from_env("WALLET_SELECT_")?,
            keys: from_env("WALLET_SELECT_")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// The bridge URL comes from deploy configuration and is easy to mistype.
    pub fn validate(&self) -> SelectResult<()> {
        Url::parse(&self.keys.wc_bridge).map_err(|e| {
            SelectError::InvalidConfiguration(format!("invalid WalletConnect bridge URL: {e}"))
        })?;
        Ok(())
    }
}

fn from_env<T: DeserializeOwned>(prefix: &str) -> Result<T, envy::Error> {
    envy::prefixed(prefix).from_env()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(!config.runtime.desktop);
        assert!(!config.runtime.automation);
        assert!(config.runtime.disabled_wallets.is_empty());
        assert_eq!(config.keys.wc_bridge, DEFAULT_WC_BRIDGE);
    }

    #[test]
    fn test_validate_rejects_malformed_bridge() {
        let config = Config {
            keys: KeysConfig {
                wc_bridge: "not a url".into(),
                ..KeysConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SelectError::InvalidConfiguration(_))
        ));
    }
}
