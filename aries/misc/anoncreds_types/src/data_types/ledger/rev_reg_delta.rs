use serde_json::Value;

use crate::data_types::identifiers::rev_reg_def_id::RevocationRegistryDefinitionId;

/// Change of a registry's status between two accumulator states, as written to the ledger
/// in a registry entry transaction.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RevocationRegistryDelta {
    pub rev_reg_def_id: RevocationRegistryDefinitionId,
    pub value: RevocationRegistryDeltaValue,
    pub timestamp: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationRegistryDeltaValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_accum: Option<Value>,
    pub accum: Value,
    #[serde(default)]
    pub issued: Vec<u32>,
    #[serde(default)]
    pub revoked: Vec<u32>,
}

impl RevocationRegistryDelta {
    pub fn is_empty(&self) -> bool {
        self.value.issued.is_empty() && self.value.revoked.is_empty()
    }
}
