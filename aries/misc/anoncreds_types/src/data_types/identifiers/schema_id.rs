use super::issuer_id::IssuerId;

impl_anoncreds_object_identifier!(SchemaId, LEGACY_SCHEMA_IDENTIFIER);

impl SchemaId {
    pub fn new_legacy(issuer_id: &IssuerId, name: &str, version: &str) -> Self {
        Self(format!("{}:2:{name}:{version}", issuer_id.unqualified()))
    }

    /// Legacy ledgers reference a schema from within a credential definition by the
    /// sequence number of the transaction which wrote it.
    pub fn as_seq_no(&self) -> Option<u32> {
        self.0.parse::<u32>().ok()
    }
}
