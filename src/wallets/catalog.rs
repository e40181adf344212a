use {
    crate::{
        chains::{rpc_service_url, ChainId, ChainRegistry},
        env::Config,
        error::SelectResult,
        wallets::{network::CustomNetwork, Wallet, WalletInit, WalletName},
    },
    std::collections::HashMap,
};

/// The full ordered wallet catalog for `chain_id`. Order defines downstream
/// display preference and is fixed; filtering must not reorder it.
///
/// Built fresh on every call so different chain ids never interfere.
pub fn wallet_catalog(
    registry: &ChainRegistry,
    config: &Config,
    chain_id: ChainId,
) -> SelectResult<Vec<Wallet>> {
    // The RPC endpoint must match the chain the onboarding library was
    // initialized with.
    let chain = registry.get(chain_id)?;
    let rpc_api_key = config.keys.rpc_api_key.as_deref();
    let rpc_url = rpc_service_url(&chain.rpc_uri, rpc_api_key);

    // Hardware wallets need a network descriptor to handle non-default chains.
    let custom_network = CustomNetwork::for_chain(chain_id);

    // WalletConnect takes an endpoint per known chain, keyed by network id.
    let walletconnect_rpc: HashMap<String, String> = registry
        .chains()
        .into_iter()
        .map(|(id, info)| {
            (
                id.network_id().to_string(),
                rpc_service_url(&info.rpc_uri, rpc_api_key),
            )
        })
        .collect();

    Ok(vec![
        Wallet {
            init: WalletInit {
                preferred: Some(true),
                ..WalletInit::new(WalletName::MetaMask)
            },
            desktop: false,
        },
        Wallet {
            init: WalletInit {
                preferred: Some(false),
                ..WalletInit::new(WalletName::TallyHo)
            },
            desktop: false,
        },
        Wallet {
            init: WalletInit {
                rpc: Some(walletconnect_rpc),
                bridge: Some(config.keys.wc_bridge.clone()),
                preferred: Some(true),
                ..WalletInit::new(WalletName::WalletConnect)
            },
            desktop: true,
        },
        Wallet {
            init: WalletInit {
                app_url: Some("gnosis-safe.io".into()),
                preferred: Some(true),
                email: Some("support@safe.global".into()),
                rpc_url: Some(rpc_url.clone()),
                custom_network: Some(custom_network.clone()),
                ..WalletInit::new(WalletName::Trezor)
            },
            desktop: true,
        },
        Wallet {
            init: WalletInit {
                preferred: Some(true),
                rpc_url: Some(rpc_url.clone()),
                custom_network: Some(custom_network.clone()),
                ..WalletInit::new(WalletName::Ledger)
            },
            desktop: true,
        },
        Wallet {
            init: WalletInit {
                rpc_url: Some(rpc_url.clone()),
                app_name: Some("Safe".into()),
                custom_network: Some(custom_network),
                ..WalletInit::new(WalletName::Keystone)
            },
            desktop: false,
        },
        Wallet {
            init: WalletInit {
                preferred: Some(true),
                ..WalletInit::new(WalletName::Trust)
            },
            desktop: false,
        },
        Wallet {
            init: WalletInit {
                rpc_url: Some(rpc_url.clone()),
                app_name: Some("Safe".into()),
                ..WalletInit::new(WalletName::Lattice)
            },
            desktop: false,
        },
        Wallet {
            init: WalletInit {
                api_key: config.keys.fortmatic_key.clone(),
                ..WalletInit::new(WalletName::Fortmatic)
            },
            desktop: true,
        },
        Wallet {
            init: WalletInit {
                api_key: config.keys.portis_id.clone(),
                ..WalletInit::new(WalletName::Portis)
            },
            desktop: true,
        },
        Wallet {
            init: WalletInit::new(WalletName::Authereum),
            desktop: false,
        },
        Wallet {
            init: WalletInit::new(WalletName::Torus),
            desktop: true,
        },
        Wallet {
            init: WalletInit::new(WalletName::Coinbase),
            desktop: false,
        },
        Wallet {
            init: WalletInit {
                rpc_url: Some(rpc_url),
                ..WalletInit::new(WalletName::WalletLink)
            },
            desktop: false,
        },
        Wallet {
            init: WalletInit::new(WalletName::Opera),
            desktop: false,
        },
        Wallet {
            init: WalletInit::new(WalletName::OperaTouch),
            desktop: false,
        },
    ])
}
