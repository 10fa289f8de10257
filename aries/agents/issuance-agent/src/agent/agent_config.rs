use std::{path::PathBuf, time::Duration};

use anoncreds_types::{
    data_types::{
        identifiers::{issuer_id::IssuerId, schema_id::SchemaId},
        ledger::rev_reg_def::IssuanceType,
    },
    utils::validation::Validatable,
};
use aries_vcx_issuance::aries_vcx_ledger::ledger::dialect::LedgerDialect;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use url::Url;

use crate::error::{AgentError, AgentErrorKind, AgentResult};

const DEFAULT_TAILS_CACHE_CAPACITY: usize = 16;
const DEFAULT_MAX_CREDENTIAL_COUNT: u32 = 1000;

fn default_tails_dir() -> PathBuf {
    std::env::temp_dir().join("tails")
}

fn default_tails_cache_capacity() -> usize {
    DEFAULT_TAILS_CACHE_CAPACITY
}

/// Lookups of records which an incoming message refers to are retried, since the message
/// may overtake the local write creating the record. Attempt `n` sleeps `n² × base_delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct RetryConfig {
    #[builder(default = 3)]
    pub attempts: u32,
    #[builder(default = 100)]
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RetryConfig {
    pub fn delay(&self, attempt: u32) -> Duration {
        let attempt = u64::from(attempt);
        Duration::from_millis(attempt * attempt * self.base_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
pub struct AgentConfig {
    pub issuer_did: IssuerId,
    /// Public location tails files are served from. Required to enable revocation.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub tails_base_uri: Option<Url>,
    #[builder(default = default_tails_dir(), setter(into))]
    #[serde(default = "default_tails_dir")]
    pub tails_dir: PathBuf,
    #[builder(default)]
    #[serde(default)]
    pub ledger_dialect: LedgerDialect,
    #[builder(default = DEFAULT_TAILS_CACHE_CAPACITY)]
    #[serde(default = "default_tails_cache_capacity")]
    pub tails_cache_capacity: usize,
    #[builder(default)]
    #[serde(default)]
    pub record_retry: RetryConfig,
}

impl AgentConfig {
    pub fn from_json(json: &str) -> AgentResult<Self> {
        let config: AgentConfig = serde_json::from_str(json).map_err(|err| {
            AgentError::from_msg(
                AgentErrorKind::InvalidConfiguration,
                &format!("Unable to parse agent configuration: {err}"),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AgentResult<()> {
        self.issuer_did.validate().map_err(|err| {
            AgentError::from_msg(AgentErrorKind::InvalidConfiguration, &err.to_string())
        })
    }
}

/// Initial fill of a registry's status list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssuancePolicy {
    #[default]
    IssuanceByDefault,
    IssuanceOnDemand,
}

impl From<IssuancePolicy> for IssuanceType {
    fn from(policy: IssuancePolicy) -> Self {
        match policy {
            IssuancePolicy::IssuanceByDefault => IssuanceType::ISSUANCE_BY_DEFAULT,
            IssuancePolicy::IssuanceOnDemand => IssuanceType::ISSUANCE_ON_DEMAND,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
pub struct DefinitionConfig {
    pub issuer_id: IssuerId,
    pub schema_id: SchemaId,
    #[builder(default = String::from("default"), setter(into))]
    pub tag: String,
    #[builder(default)]
    pub enable_revocation: bool,
    #[builder(default = DEFAULT_MAX_CREDENTIAL_COUNT)]
    pub max_credential_count: u32,
    #[builder(default = true)]
    pub auto_scale: bool,
    #[builder(default)]
    pub issuance_policy: IssuancePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_config_defaults() {
        let config =
            AgentConfig::from_json(r#"{ "issuer_did": "V4SGRU86Z58d6TV7PBUe6f" }"#).unwrap();
        assert_eq!(config.tails_base_uri, None);
        assert_eq!(config.ledger_dialect, LedgerDialect::Legacy);
        assert_eq!(config.tails_cache_capacity, 16);
        assert_eq!(config.record_retry, RetryConfig::default());
    }

    #[test]
    fn test_agent_config_rejects_bad_issuer() {
        let err = AgentConfig::from_json(r#"{ "issuer_did": "bob" }"#).unwrap_err();
        assert_eq!(err.kind(), AgentErrorKind::InvalidConfiguration);

        let err = AgentConfig::from_json(r#"{ "tails_dir": "/tmp" }"#).unwrap_err();
        assert_eq!(err.kind(), AgentErrorKind::InvalidConfiguration);
    }

    #[test]
    fn test_agent_config_reads_dialect_and_tails_uri() {
        let config = AgentConfig::from_json(
            r#"{
                "issuer_did": "did:sov:V4SGRU86Z58d6TV7PBUe6f",
                "tails_base_uri": "https://tails.example.com/api/tails",
                "ledger_dialect": "anoncreds",
                "record_retry": { "attempts": 5, "base_delay_ms": 10 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.ledger_dialect, LedgerDialect::Anoncreds);
        assert_eq!(
            config.tails_base_uri.unwrap().as_str(),
            "https://tails.example.com/api/tails"
        );
        assert_eq!(config.record_retry.attempts, 5);
    }

    #[test]
    fn test_retry_delay_is_quadratic() {
        let retry = RetryConfig::default();
        assert_eq!(retry.delay(1), Duration::from_millis(100));
        assert_eq!(retry.delay(2), Duration::from_millis(400));
        assert_eq!(retry.delay(3), Duration::from_millis(900));
    }

    #[test]
    fn test_definition_config_defaults() {
        let issuer_id = IssuerId::new_unchecked("V4SGRU86Z58d6TV7PBUe6f");
        let config = DefinitionConfig::builder()
            .schema_id(SchemaId::new_legacy(&issuer_id, "gvt", "1.0"))
            .issuer_id(issuer_id)
            .build();
        assert_eq!(config.tag, "default");
        assert!(!config.enable_revocation);
        assert_eq!(config.max_credential_count, 1000);
        assert!(config.auto_scale);
        assert_eq!(
            IssuanceType::from(config.issuance_policy),
            IssuanceType::ISSUANCE_BY_DEFAULT
        );
    }
}
