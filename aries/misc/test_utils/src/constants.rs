pub const ISSUER_DID: &str = "V4SGRU86Z58d6TV7PBUe6f";
pub const TRUSTEE_SEED: &str = "000000000000000000000000Trustee1";
pub const TAILS_BASE_URI: &str = "https://tails.example.com/api/tails";
pub const SCHEMA_NAME: &str = "gvt";
pub const SCHEMA_VERSION: &str = "1.0";
pub const SCHEMA_ATTRIBUTES: &[&str] = &["name", "age", "sex", "height"];
