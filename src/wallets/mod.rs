use {
    crate::wallets::network::CustomNetwork,
    serde::{Serialize, Serializer},
    std::collections::HashMap,
    strum_macros::{Display, EnumIter, EnumString},
};

pub mod catalog;
pub mod e2e;
pub mod filter;
pub mod network;
pub mod pairing;

pub use {
    catalog::wallet_catalog,
    filter::{is_supported_wallet, supported_wallets},
};

/// Wallet connectors known to the onboarding library. String values are the
/// library's module names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, EnumIter, Display)]
pub enum WalletName {
    #[strum(to_string = "metamask")]
    MetaMask,
    #[strum(to_string = "tally")]
    TallyHo,
    #[strum(to_string = "walletConnect")]
    WalletConnect,
    #[strum(to_string = "trezor")]
    Trezor,
    #[strum(to_string = "ledger")]
    Ledger,
    #[strum(to_string = "keystone")]
    Keystone,
    #[strum(to_string = "trust")]
    Trust,
    #[strum(to_string = "lattice")]
    Lattice,
    #[strum(to_string = "fortmatic")]
    Fortmatic,
    #[strum(to_string = "portis")]
    Portis,
    #[strum(to_string = "authereum")]
    Authereum,
    #[strum(to_string = "torus")]
    Torus,
    #[strum(to_string = "coinbase")]
    Coinbase,
    #[strum(to_string = "walletLink")]
    WalletLink,
    #[strum(to_string = "opera")]
    Opera,
    #[strum(to_string = "operaTouch")]
    OperaTouch,
}

impl Serialize for WalletName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Initialization options for a built-in wallet connector. Optional
/// parameters are omitted from the serialized form so the onboarding library
/// falls back to its own defaults.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletInit {
    pub wallet_name: WalletName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
    /// Chain id to RPC endpoint map, WalletConnect only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_network: Option<CustomNetwork>,
}

impl WalletInit {
    /// Bare options for `wallet_name` with every optional parameter unset.
    pub fn new(wallet_name: WalletName) -> Self {
        Self {
            wallet_name,
            preferred: None,
            rpc_url: None,
            rpc: None,
            bridge: None,
            api_key: None,
            app_name: None,
            app_url: None,
            email: None,
            custom_network: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Sdk,
    Injected,
}

/// A custom wallet module descriptor, used for connectors the onboarding
/// library has no built-in support for (pairing, e2e wallet).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletModule {
    pub name: String,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    pub preferred: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_src: Option<String>,
}

/// Catalog entry. `desktop` records desktop-app support and is stripped
/// before the entry reaches the onboarding library.
#[derive(Clone, Debug, PartialEq)]
pub struct Wallet {
    pub init: WalletInit,
    pub desktop: bool,
}

/// Single element of the list handed to the onboarding library.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WalletSelectEntry {
    Init(WalletInit),
    Module(WalletModule),
}

impl WalletSelectEntry {
    /// Module name used for display and for the disabled-wallet filter.
    pub fn name(&self) -> String {
        match self {
            Self::Init(init) => init.wallet_name.to_string(),
            Self::Module(module) => module.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::str::FromStr};

    #[test]
    fn test_wallet_name_matches_module_names() {
        assert_eq!(WalletName::MetaMask.to_string(), "metamask");
        assert_eq!(WalletName::TallyHo.to_string(), "tally");
        assert_eq!(WalletName::WalletConnect.to_string(), "walletConnect");
        assert_eq!(WalletName::OperaTouch.to_string(), "operaTouch");
        assert_eq!(
            WalletName::from_str("walletConnect").unwrap(),
            WalletName::WalletConnect
        );
    }

    #[test]
    fn test_wallet_init_omits_unset_parameters() {
        let init = WalletInit {
            preferred: Some(true),
            ..WalletInit::new(WalletName::MetaMask)
        };
        assert_eq!(
            serde_json::to_value(&init).unwrap(),
            serde_json::json!({ "walletName": "metamask", "preferred": true })
        );
    }

    #[test]
    fn test_wallet_module_serializes_type_field() {
        let module = WalletModule {
            name: "Safe Mobile".into(),
            module_type: ModuleType::Sdk,
            preferred: true,
            rpc_url: None,
            bridge: None,
            icon_src: None,
        };
        assert_eq!(
            serde_json::to_value(&module).unwrap(),
            serde_json::json!({ "name": "Safe Mobile", "type": "sdk", "preferred": true })
        );
    }
}
