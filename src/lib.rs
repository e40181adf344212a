//! Wallet connector catalog for the onboarding flow.
//!
//! Builds the ordered list of wallet configurations handed to the external
//! onboarding library for a given chain: per-chain RPC resolution, the fixed
//! wallet catalog, disabled-wallet and desktop filtering, and conditional
//! pairing / e2e wallet module injection.

pub mod chains;
pub mod env;
pub mod error;
pub mod wallets;

pub use {
    chains::{rpc_service_url, ChainId, ChainInfo, ChainRegistry, RpcAuthentication, RpcUri},
    env::{Config, KeysConfig, RuntimeConfig},
    error::{SelectError, SelectResult},
    wallets::{
        is_supported_wallet,
        supported_wallets,
        ModuleType,
        Wallet,
        WalletInit,
        WalletModule,
        WalletName,
        WalletSelectEntry,
    },
};
