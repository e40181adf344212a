use {crate::chains::ChainId, serde::Serialize};

/// Dummy genesis block. The onboarding library only requires the field to be
/// present when driving hardware wallets on non-default chains.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GenesisBlock {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HardforkName {
    Berlin,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardforkEntry {
    pub name: HardforkName,
    pub block: u64,
    pub fork_hash: String,
}

/// Synthetic network descriptor for hardware wallet connectors. Carries no
/// semantics of its own beyond the network id.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomNetwork {
    pub network_id: u64,
    pub genesis: GenesisBlock,
    pub hardforks: Vec<HardforkEntry>,
    /// Always empty, present to satisfy the onboarding schema.
    pub bootstrap_nodes: Vec<serde_json::Value>,
}

impl CustomNetwork {
    pub fn for_chain(chain_id: ChainId) -> Self {
        Self {
            network_id: chain_id.network_id(),
            genesis: GenesisBlock::default(),
            hardforks: vec![HardforkEntry {
                name: HardforkName::Berlin,
                block: 0,
                fork_hash: "0x00".into(),
            }],
            bootstrap_nodes: Vec::new(),
        }
    }
}
