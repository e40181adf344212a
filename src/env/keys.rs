use serde::Deserialize;

pub const DEFAULT_WC_BRIDGE: &str = "https://safe-walletconnect.safe.global/";

/// API keys and service endpoints for individual wallet connectors.
#[derive(Clone, Debug, Deserialize)]
pub struct KeysConfig {
    /// Appended to `ApiKeyPath` RPC URIs.
    #[serde(default)]
    pub rpc_api_key: Option<String>,

    #[serde(default)]
    pub fortmatic_key: Option<String>,

    #[serde(default)]
    pub portis_id: Option<String>,

    /// WalletConnect bridge server.
    #[serde(default = "default_wc_bridge")]
    pub wc_bridge: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            rpc_api_key: None,
            fortmatic_key: None,
            portis_id: None,
            wc_bridge: default_wc_bridge(),
        }
    }
}

fn default_wc_bridge() -> String {
    DEFAULT_WC_BRIDGE.to_string()
}
