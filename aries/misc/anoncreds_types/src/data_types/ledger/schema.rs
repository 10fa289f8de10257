use std::collections::HashSet;

use crate::{
    data_types::identifiers::{issuer_id::IssuerId, schema_id::SchemaId},
    utils::validation::Validatable,
};

pub const MAX_ATTRIBUTES_COUNT: usize = 125;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub id: SchemaId,
    /// Assigned by legacy ledgers once the schema transaction is written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<u32>,
    pub name: String,
    pub version: String,
    pub attr_names: AttributeNames,
    pub issuer_id: IssuerId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AttributeNames(pub Vec<String>);

impl AttributeNames {
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|attr| attr == name)
    }
}

impl From<&[&str]> for AttributeNames {
    fn from(attrs: &[&str]) -> Self {
        Self(attrs.iter().map(|s| String::from(*s)).collect::<Vec<_>>())
    }
}

impl From<Vec<String>> for AttributeNames {
    fn from(attrs: Vec<String>) -> Self {
        Self(attrs)
    }
}

impl From<AttributeNames> for Vec<String> {
    fn from(a: AttributeNames) -> Self {
        a.0
    }
}

impl Validatable for Schema {
    fn validate(&self) -> Result<(), crate::error::Error> {
        self.issuer_id.validate()?;
        self.attr_names.validate()?;
        if self.name.is_empty() || self.version.is_empty() {
            return Err(err_msg!(Input, "Schema name and version must not be empty"));
        }
        Ok(())
    }
}

impl Validatable for AttributeNames {
    fn validate(&self) -> Result<(), crate::error::Error> {
        let mut unique = HashSet::new();
        if !self.0.iter().all(move |name| unique.insert(name)) {
            return Err(err_msg!(Input, "Attributes inside the schema must be unique"));
        }

        if self.0.is_empty() {
            return Err(err_msg!(Input, "Empty list of Schema attributes has been passed"));
        }

        if self.0.len() > MAX_ATTRIBUTES_COUNT {
            return Err(err_msg!(
                Input,
                "The number of Schema attributes {} cannot be greater than {}",
                self.0.len(),
                MAX_ATTRIBUTES_COUNT
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_schema_validation {
    use super::*;

    #[test]
    fn test_schema_valid() {
        let schema_json = json!({
            "id": "V4SGRU86Z58d6TV7PBUe6f:2:gvt:1.0",
            "name": "gvt",
            "version": "1.0",
            "attrNames": ["aaa", "bbb", "ccc"],
            "issuerId": "V4SGRU86Z58d6TV7PBUe6f"
        });

        let schema: Schema = serde_json::from_value(schema_json).unwrap();
        assert_eq!(schema.name, "gvt");
        assert_eq!(schema.seq_no, None);
        assert!(schema.attr_names.contains("bbb"));
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_schema_invalid_missing_properties() {
        let schema_json = json!({
            "name": "gvt",
        });

        assert!(serde_json::from_value::<Schema>(schema_json).is_err());
    }

    #[test]
    fn test_schema_invalid_issuer_id() {
        let schema_json = json!({
            "id": "bob:2:gvt:1.0",
            "name": "gvt",
            "version": "1.0",
            "attrNames": ["aaa", "bbb", "ccc"],
            "issuerId": "bob"
        });

        let schema: Schema = serde_json::from_value(schema_json).unwrap();
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_schema_invalid_attr_names() {
        let empty: AttributeNames = Vec::<String>::new().into();
        assert!(empty.validate().is_err());

        let duplicated: AttributeNames = (&["a", "a"][..]).into();
        assert!(duplicated.validate().is_err());
    }
}
