use serde::Deserialize;

/// Runtime context of the host application.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RuntimeConfig {
    /// Running as the packaged desktop app rather than in a browser tab.
    #[serde(default)]
    pub desktop: bool,

    /// Test automation is driving the app.
    #[serde(default)]
    pub automation: bool,

    /// Mnemonic for the automation wallet. Injection of the e2e wallet
    /// requires it to be present and non-empty.
    #[serde(default)]
    pub test_mnemonic: Option<String>,

    /// Wallet names disabled by deploy configuration, matched case- and
    /// whitespace-insensitively against module names.
    #[serde(default)]
    pub disabled_wallets: Vec<String>,
}

impl RuntimeConfig {
    pub fn has_test_mnemonic(&self) -> bool {
        self.test_mnemonic
            .as_deref()
            .is_some_and(|mnemonic| !mnemonic.is_empty())
    }
}
