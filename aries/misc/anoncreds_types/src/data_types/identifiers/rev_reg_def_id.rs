use super::{cred_def_id::CredentialDefinitionId, issuer_id::IssuerId};

impl_anoncreds_object_identifier!(RevocationRegistryDefinitionId, LEGACY_REV_REG_DEF_IDENTIFIER);

impl RevocationRegistryDefinitionId {
    pub fn new_legacy(issuer_id: &IssuerId, cred_def_id: &CredentialDefinitionId, tag: &str) -> Self {
        Self(format!(
            "{}:4:{cred_def_id}:CL_ACCUM:{tag}",
            issuer_id.unqualified()
        ))
    }

    /// The tag component of a legacy registry id, if this is one.
    pub fn legacy_tag(&self) -> Option<&str> {
        LEGACY_REV_REG_DEF_IDENTIFIER
            .captures(&self.0)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::identifiers::rev_reg_tag::RevocationRegistryTag;

    #[test]
    fn test_rev_reg_def_id_embeds_tag() {
        let issuer_id = IssuerId::new_unchecked("V4SGRU86Z58d6TV7PBUe6f");
        let cred_def_id = CredentialDefinitionId::new_legacy(&issuer_id, "20", "tag");
        let tag = RevocationRegistryTag::first(50);

        let id = RevocationRegistryDefinitionId::new_legacy(&issuer_id, &cred_def_id, &tag.to_string());
        assert_eq!(
            id.0,
            "V4SGRU86Z58d6TV7PBUe6f:4:V4SGRU86Z58d6TV7PBUe6f:3:CL:20:tag:CL_ACCUM:1-50"
        );
        assert!(id.validate().is_ok());
        assert_eq!(id.legacy_tag(), Some("1-50"));
    }
}
