use super::{issuer_id::IssuerId, schema_id::SchemaId};

impl_anoncreds_object_identifier!(CredentialDefinitionId, LEGACY_CRED_DEF_IDENTIFIER);

impl CredentialDefinitionId {
    /// Builds `<issuer>:3:CL:<schema reference>:<tag>`. The schema reference is the
    /// schema sequence number when the ledger assigned one, the schema id otherwise.
    pub fn new_legacy(issuer_id: &IssuerId, schema_ref: &str, tag: &str) -> Self {
        Self(format!("{}:3:CL:{schema_ref}:{tag}", issuer_id.unqualified()))
    }

    pub fn new_legacy_for_schema(
        issuer_id: &IssuerId,
        schema_id: &SchemaId,
        schema_seq_no: Option<u32>,
        tag: &str,
    ) -> Self {
        match schema_seq_no {
            Some(seq_no) => Self::new_legacy(issuer_id, &seq_no.to_string(), tag),
            None => Self::new_legacy(issuer_id, &schema_id.0, tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cred_def_id_new_legacy() {
        let issuer_id = IssuerId::new_unchecked("V4SGRU86Z58d6TV7PBUe6f");
        let schema_id = SchemaId::new_legacy(&issuer_id, "gvt", "1.0");

        let by_seq_no =
            CredentialDefinitionId::new_legacy_for_schema(&issuer_id, &schema_id, Some(20), "tag");
        assert_eq!(by_seq_no.0, "V4SGRU86Z58d6TV7PBUe6f:3:CL:20:tag");
        assert!(by_seq_no.validate().is_ok());

        let by_id = CredentialDefinitionId::new_legacy_for_schema(&issuer_id, &schema_id, None, "tag");
        assert_eq!(
            by_id.0,
            "V4SGRU86Z58d6TV7PBUe6f:3:CL:V4SGRU86Z58d6TV7PBUe6f:2:gvt:1.0:tag"
        );
        assert!(by_id.is_legacy());
    }
}
