use once_cell::sync::Lazy;
use regex::Regex;

pub static URI_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\+\-\.]+:.+$").unwrap());

pub static LEGACY_DID_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[1-9A-HJ-NP-Za-km-z]{21,22}$").unwrap());

pub static LEGACY_SCHEMA_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[1-9A-HJ-NP-Za-km-z]{21,22}:2:.+:[0-9.]+$").unwrap());

pub static LEGACY_CRED_DEF_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "^[1-9A-HJ-NP-Za-km-z]{21,22}:3:CL:(([1-9][0-9]*)|([1-9A-HJ-NP-Za-km-z]{21,22}:2:.+:[0-9.]+)):(.+)?$",
    )
    .unwrap()
});

pub static LEGACY_REV_REG_DEF_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^[1-9A-HJ-NP-Za-km-z]{21,22}:4:[1-9A-HJ-NP-Za-km-z]{21,22}:3:CL:.+:CL_ACCUM:(.+)$")
        .unwrap()
});

/// Trait for data types which need validation after being loaded from external sources
pub trait Validatable {
    fn validate(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_identifiers() {
        assert!(LEGACY_DID_IDENTIFIER.is_match("V4SGRU86Z58d6TV7PBUe6f"));
        assert!(LEGACY_SCHEMA_IDENTIFIER.is_match("V4SGRU86Z58d6TV7PBUe6f:2:gvt:1.0"));
        assert!(LEGACY_CRED_DEF_IDENTIFIER.is_match("V4SGRU86Z58d6TV7PBUe6f:3:CL:20:tag"));
        assert!(LEGACY_CRED_DEF_IDENTIFIER
            .is_match("V4SGRU86Z58d6TV7PBUe6f:3:CL:V4SGRU86Z58d6TV7PBUe6f:2:gvt:1.0:tag"));
        assert!(LEGACY_REV_REG_DEF_IDENTIFIER
            .is_match("V4SGRU86Z58d6TV7PBUe6f:4:V4SGRU86Z58d6TV7PBUe6f:3:CL:20:tag:CL_ACCUM:1-100"));
        assert!(!LEGACY_DID_IDENTIFIER.is_match("bob"));
    }

    #[test]
    fn test_uri_identifier() {
        assert!(URI_IDENTIFIER.is_match("did:sov:V4SGRU86Z58d6TV7PBUe6f"));
        assert!(!URI_IDENTIFIER.is_match("12"));
    }
}
