use wallet_select::{
    supported_wallets, ChainId, ChainRegistry, Config, RuntimeConfig, WalletSelectEntry,
};

fn names(entries: &[WalletSelectEntry]) -> Vec<String> {
    entries.iter().map(WalletSelectEntry::name).collect()
}

#[test]
fn browser_selection_with_disabled_wallet() {
    let registry = ChainRegistry::default();
    let config = Config {
        runtime: RuntimeConfig {
            disabled_wallets: vec!["Fortmatic".into()],
            ..Default::default()
        },
        ..Default::default()
    };

    let wallets = supported_wallets(&registry, &config, ChainId::Mainnet).unwrap();
    let names = names(&wallets);

    assert!(names.iter().all(|name| name != "fortmatic"));
    assert_eq!(
        names,
        vec![
            "Safe Mobile",
            "metamask",
            "tally",
            "walletConnect",
            "trezor",
            "ledger",
            "keystone",
            "trust",
            "lattice",
            "portis",
            "authereum",
            "torus",
            "coinbase",
            "walletLink",
            "opera",
            "operaTouch",
        ]
    );
}

#[test]
fn automation_run_gets_the_e2e_wallet_last() {
    let registry = ChainRegistry::default();
    let config = Config {
        runtime: RuntimeConfig {
            automation: true,
            test_mnemonic: Some(
                "test test test test test test test test test test test junk".into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    };

    let wallets = supported_wallets(&registry, &config, ChainId::Rinkeby).unwrap();
    assert_eq!(wallets.last().unwrap().name(), "E2E Wallet");
    assert_eq!(wallets[0].name(), "Safe Mobile");
}

#[test]
fn selection_serializes_to_the_onboarding_schema() {
    let registry = ChainRegistry::default();
    let wallets = supported_wallets(&registry, &Config::default(), ChainId::Mainnet).unwrap();

    let json = serde_json::to_value(&wallets).unwrap();
    let entries = json.as_array().unwrap();

    // Pairing module first
    assert_eq!(entries[0]["name"], "Safe Mobile");
    assert_eq!(entries[0]["type"], "sdk");

    // Built-in connectors carry the library's module names and omit unset
    // optional parameters
    assert_eq!(entries[1]["walletName"], "metamask");
    assert_eq!(entries[1]["preferred"], true);
    assert!(entries[1].get("rpcUrl").is_none());

    let trezor = entries
        .iter()
        .find(|entry| entry["walletName"] == "trezor")
        .unwrap();
    assert_eq!(trezor["customNetwork"]["networkId"], 1);
    assert_eq!(trezor["customNetwork"]["genesis"], serde_json::json!({}));
    assert_eq!(trezor["customNetwork"]["hardforks"][0]["name"], "berlin");
}

#[test]
fn selection_is_repeatable_across_chains() {
    let registry = ChainRegistry::default();
    let config = Config::default();

    let first = supported_wallets(&registry, &config, ChainId::Mainnet).unwrap();
    let _other = supported_wallets(&registry, &config, ChainId::Polygon).unwrap();
    let second = supported_wallets(&registry, &config, ChainId::Mainnet).unwrap();

    assert_eq!(first, second);
}
