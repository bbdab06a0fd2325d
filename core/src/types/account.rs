use serde::{Deserialize, Serialize};

/// Credit balance of the account owning the API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    #[serde(deserialize_with = "super::null_as_default")]
    pub recharge_credits: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_bonus_credits: i64,
}
