use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Chain-group aliases that mutation lists are mapped onto.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Chains", inline)]
#[serde(default)]
pub struct ChainOptions {
    /// HA1 chains of the trimer.
    #[schemars(title = "HA1")]
    pub ha1: String,
    /// HA2 chains of the trimer.
    #[schemars(title = "HA2")]
    pub ha2: String,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            ha1: "A+C+E".to_owned(),
            ha2: "B+D+F".to_owned(),
        }
    }
}
