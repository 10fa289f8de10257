impl_anoncreds_object_identifier!(IssuerId, LEGACY_DID_IDENTIFIER);

impl IssuerId {
    /// Strips a `did:sov:` style prefix, leaving the bare legacy nym.
    pub fn unqualified(&self) -> &str {
        self.0.rsplit(':').next().unwrap_or(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuer_id_validation() {
        assert!(IssuerId::new("V4SGRU86Z58d6TV7PBUe6f").is_ok());
        assert!(IssuerId::new("did:sov:V4SGRU86Z58d6TV7PBUe6f").is_ok());
        assert!(IssuerId::new("bob").is_err());
    }

    #[test]
    fn test_issuer_id_unqualified() {
        let id = IssuerId::new_unchecked("did:sov:V4SGRU86Z58d6TV7PBUe6f");
        assert_eq!(id.unqualified(), "V4SGRU86Z58d6TV7PBUe6f");
    }
}
