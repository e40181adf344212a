use crate::{
    chains::{rpc_service_url, ChainId, ChainRegistry},
    env::{Config, RuntimeConfig},
    error::SelectResult,
    wallets::{filter::is_supported_wallet, ModuleType, WalletModule},
};

/// Display name of the mobile pairing connector. Not part of the onboarding
/// library's wallet enumeration, so it is matched by name in the
/// disabled-wallet filter like any other wallet.
pub const PAIRING_MODULE_NAME: &str = "Safe Mobile";

/// Pairing is a QR-code flow aimed at the mobile app. The desktop app has its
/// own deep-link pairing, so the module is only offered in the browser.
pub fn is_pairing_supported(runtime: &RuntimeConfig) -> bool {
    !runtime.desktop && is_supported_wallet(PAIRING_MODULE_NAME, &runtime.disabled_wallets)
}

/// Descriptor for the QR-code/deep-link pairing connector. Prepended ahead of
/// all other wallets when pairing is supported.
pub fn pairing_module(
    registry: &ChainRegistry,
    config: &Config,
    chain_id: ChainId,
) -> SelectResult<WalletModule> {
    let chain = registry.get(chain_id)?;

    Ok(WalletModule {
        name: PAIRING_MODULE_NAME.into(),
        module_type: ModuleType::Sdk,
        preferred: true,
        rpc_url: Some(rpc_service_url(
            &chain.rpc_uri,
            config.keys.rpc_api_key.as_deref(),
        )),
        bridge: Some(config.keys.wc_bridge.clone()),
        icon_src: None,
    })
}
