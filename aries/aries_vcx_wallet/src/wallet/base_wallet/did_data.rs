use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidData {
    did: String,
    verkey: String,
}

impl DidData {
    pub fn new(did: &str, verkey: &str) -> Self {
        Self {
            did: did.into(),
            verkey: verkey.into(),
        }
    }

    pub fn did(&self) -> &str {
        &self.did
    }

    pub fn verkey(&self) -> &str {
        &self.verkey
    }
}
