use {
    crate::error::{SelectError, SelectResult},
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
    strum_macros::{Display, EnumIter, EnumString},
};

/// Chains the wallet catalog can be built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
#[repr(u64)]
pub enum ChainId {
    #[strum(to_string = "mainnet", serialize = "ethereum")]
    Mainnet = 1,
    Rinkeby = 4,
    Goerli = 5,
    Optimism = 10,
    #[strum(to_string = "bsc", serialize = "binance-smart-chain")]
    BinanceSmartChain = 56,
    #[strum(
        to_string = "xdai",
        serialize = "gnosis",
        serialize = "gnosis-chain",
        serialize = "gnosischain"
    )]
    GnosisChain = 100,
    Polygon = 137,
    #[strum(to_string = "ewc", serialize = "energy-web-chain")]
    EnergyWebChain = 246,
    Arbitrum = 42161,
    Volta = 73799,
    Aurora = 1313161554,
}

impl ChainId {
    /// Numeric network id as the onboarding library expects it.
    pub fn network_id(&self) -> u64 {
        *self as u64
    }
}

/// How the RPC endpoint authenticates callers. Wire values match the chain
/// configuration service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcAuthentication {
    /// The API key is appended to the URI path.
    ApiKeyPath,
    NoAuthentication,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcUri {
    pub authentication: RpcAuthentication,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub chain_name: String,
    pub short_name: String,
    pub rpc_uri: RpcUri,
}

/// Resolve the RPC endpoint for a chain. `ApiKeyPath` URIs end in a path
/// separator and get the configured key appended verbatim.
pub fn rpc_service_url(rpc_uri: &RpcUri, rpc_api_key: Option<&str>) -> String {
    match (rpc_uri.authentication, rpc_api_key) {
        (RpcAuthentication::ApiKeyPath, Some(key)) if !key.is_empty() => {
            format!("{}{}", rpc_uri.value, key)
        }
        _ => rpc_uri.value.clone(),
    }
}

/// Chain id to chain metadata map, seeded with the supported chain set by
/// default. Lookups of unknown chains are an upstream precondition violation
/// and surface as `ChainNotFound`.
#[derive(Clone, Debug)]
pub struct ChainRegistry {
    chains: HashMap<ChainId, ChainInfo>,
}

impl ChainRegistry {
    pub fn new(chains: HashMap<ChainId, ChainInfo>) -> Self {
        Self { chains }
    }

    pub fn get(&self, chain_id: ChainId) -> SelectResult<&ChainInfo> {
        self.chains.get(&chain_id).ok_or(SelectError::ChainNotFound)
    }

    pub fn contains(&self, chain_id: ChainId) -> bool {
        self.chains.contains_key(&chain_id)
    }

    /// Registered chains in ascending network id order.
    pub fn chains(&self) -> Vec<(ChainId, &ChainInfo)> {
        let mut chains: Vec<(ChainId, &ChainInfo)> =
            self.chains.iter().map(|(id, info)| (*id, info)).collect();
        chains.sort_by_key(|(id, _)| id.network_id());
        chains
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::new(default_chains())
    }
}

fn default_chains() -> HashMap<ChainId, ChainInfo> {
    HashMap::from([
        // Ethereum
        (
            ChainId::Mainnet,
            ChainInfo {
                chain_name: "Ethereum".into(),
                short_name: "eth".into(),
                rpc_uri: RpcUri {
                    authentication: RpcAuthentication::ApiKeyPath,
                    value: "https://mainnet.infura.io/v3/".into(),
                },
            },
        ),
        (
            ChainId::Rinkeby,
            ChainInfo {
                chain_name: "Rinkeby".into(),
                short_name: "rin".into(),
                rpc_uri: RpcUri {
                    authentication: RpcAuthentication::ApiKeyPath,
                    value: "https://rinkeby.infura.io/v3/".into(),
                },
            },
        ),
        (
            ChainId::Goerli,
            ChainInfo {
                chain_name: "Goerli".into(),
                short_name: "gor".into(),
                rpc_uri: RpcUri {
                    authentication: RpcAuthentication::ApiKeyPath,
                    value: "https://goerli.infura.io/v3/".into(),
                },
            },
        ),
        // Optimism
        (
            ChainId::Optimism,
            ChainInfo {
                chain_name: "Optimism".into(),
                short_name: "oeth".into(),
                rpc_uri: RpcUri {
                    authentication: RpcAuthentication::NoAuthentication,
                    value: "https://mainnet.optimism.io/".into(),
                },
            },
        ),
        // Binance Smart Chain
        (
            ChainId::BinanceSmartChain,
            ChainInfo {
                chain_name: "BNB Smart Chain".into(),
                short_name: "bnb".into(),
                rpc_uri: RpcUri {
                    authentication: RpcAuthentication::NoAuthentication,
                    value: "https://bsc-dataseed.binance.org/".into(),
                },
            },
        ),
        // Gnosis Chain
        (
            ChainId::GnosisChain,
            ChainInfo {
                chain_name: "Gnosis Chain".into(),
                short_name: "gno".into(),
                rpc_uri: RpcUri {
                    authentication: RpcAuthentication::NoAuthentication,
                    value: "https://rpc.gnosischain.com/".into(),
                },
            },
        ),
        // Polygon
        (
            ChainId::Polygon,
            ChainInfo {
                chain_name: "Polygon".into(),
                short_name: "matic".into(),
                rpc_uri: RpcUri {
                    authentication: RpcAuthentication::ApiKeyPath,
                    value: "https://polygon-mainnet.infura.io/v3/".into(),
                },
            },
        ),
        // Energy Web Chain
        (
            ChainId::EnergyWebChain,
            ChainInfo {
                chain_name: "Energy Web Chain".into(),
                short_name: "ewt".into(),
                rpc_uri: RpcUri {
                    authentication: RpcAuthentication::NoAuthentication,
                    value: "https://rpc.energyweb.org/".into(),
                },
            },
        ),
        // Arbitrum
        (
            ChainId::Arbitrum,
            ChainInfo {
                chain_name: "Arbitrum One".into(),
                short_name: "arb1".into(),
                rpc_uri: RpcUri {
                    authentication: RpcAuthentication::NoAuthentication,
                    value: "https://arb1.arbitrum.io/rpc".into(),
                },
            },
        ),
        // Volta
        (
            ChainId::Volta,
            ChainInfo {
                chain_name: "Volta".into(),
                short_name: "vt".into(),
                rpc_uri: RpcUri {
                    authentication: RpcAuthentication::NoAuthentication,
                    value: "https://volta-rpc.energyweb.org/".into(),
                },
            },
        ),
        // Aurora
        (
            ChainId::Aurora,
            ChainInfo {
                chain_name: "Aurora".into(),
                short_name: "aurora".into(),
                rpc_uri: RpcUri {
                    authentication: RpcAuthentication::NoAuthentication,
                    value: "https://mainnet.aurora.dev/".into(),
                },
            },
        ),
    ])
}
