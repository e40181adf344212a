use {
    crate::{
        chains::{ChainId, ChainRegistry},
        env::Config,
        error::SelectResult,
        wallets::{
            catalog::wallet_catalog,
            e2e::{e2e_wallet_module, E2E_CHAIN_ID},
            pairing::{is_pairing_supported, pairing_module},
            WalletSelectEntry,
        },
    },
    once_cell::sync::Lazy,
    regex::Regex,
    tracing::debug,
};

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s").expect("Failed to initialize regexp for whitespace folding"));

/// Config wallet names and module names differ in case and spacing, so both
/// sides are folded before comparison.
fn fold_wallet_name(name: &str) -> String {
    WHITESPACE_REGEX.replace_all(name, "").to_lowercase()
}

/// Whether `name` is absent from the disabled-wallet list. Unknown names
/// default to supported.
pub fn is_supported_wallet(name: &str, disabled_wallets: &[String]) -> bool {
    let folded = fold_wallet_name(name);
    !disabled_wallets
        .iter()
        .any(|disabled| fold_wallet_name(disabled) == folded)
}

/// The ordered wallet list for `chain_id`, ready to hand to the onboarding
/// library.
///
/// The catalog is filtered by the disabled-wallet list and, when running as
/// the desktop app, by desktop support. Catalog order is preserved. The
/// pairing module is prepended when pairing is supported and the e2e wallet
/// is appended on the test chain under automation with a mnemonic configured.
#[tracing::instrument(skip(registry, config), level = "debug")]
pub fn supported_wallets(
    registry: &ChainRegistry,
    config: &Config,
    chain_id: ChainId,
) -> SelectResult<Vec<WalletSelectEntry>> {
    let runtime = &config.runtime;

    let mut supported: Vec<WalletSelectEntry> = wallet_catalog(registry, config, chain_id)?
        .into_iter()
        .filter(|wallet| {
            let name = wallet.init.wallet_name.to_string();
            if !is_supported_wallet(&name, &runtime.disabled_wallets) {
                debug!(wallet = %name, "wallet disabled by configuration");
                return false;
            }
            // Desktop vs. web app wallet support
            if runtime.desktop {
                wallet.desktop
            } else {
                true
            }
        })
        .map(|wallet| WalletSelectEntry::Init(wallet.init))
        .collect();

    if chain_id == E2E_CHAIN_ID && runtime.automation && runtime.has_test_mnemonic() {
        supported.push(WalletSelectEntry::Module(e2e_wallet_module(
            registry, config, chain_id,
        )?));
    }

    if is_pairing_supported(runtime) {
        let mut wallets = Vec::with_capacity(supported.len() + 1);
        wallets.push(WalletSelectEntry::Module(pairing_module(
            registry, config, chain_id,
        )?));
        wallets.extend(supported);
        return Ok(wallets);
    }

    Ok(supported)
}
