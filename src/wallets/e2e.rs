use crate::{
    chains::{rpc_service_url, ChainId, ChainRegistry},
    env::Config,
    error::SelectResult,
    wallets::{ModuleType, WalletModule},
};

pub const E2E_WALLET_NAME: &str = "E2E Wallet";

/// The chain end-to-end tests run against. Kept tied to the legacy test
/// chain; injection is gated on it in the selection pipeline.
pub const E2E_CHAIN_ID: ChainId = ChainId::Rinkeby;

/// Descriptor for the test-automation wallet. The automation driver derives
/// the actual signer from the configured mnemonic; this module only points it
/// at the chain's RPC endpoint.
pub fn e2e_wallet_module(
    registry: &ChainRegistry,
    config: &Config,
    chain_id: ChainId,
) -> SelectResult<WalletModule> {
    let chain = registry.get(chain_id)?;

    Ok(WalletModule {
        name: E2E_WALLET_NAME.into(),
        module_type: ModuleType::Sdk,
        preferred: true,
        rpc_url: Some(rpc_service_url(
            &chain.rpc_uri,
            config.keys.rpc_api_key.as_deref(),
        )),
        bridge: None,
        icon_src: None,
    })
}
