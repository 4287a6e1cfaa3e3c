use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LedgerConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_ledger_path")]
    pub path: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_ledger_path(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_ledger_path() -> String {
    "requestledger.txt".to_string()
}
