use anoncreds_types::data_types::{
    identifiers::{
        cred_def_id::CredentialDefinitionId, rev_reg_def_id::RevocationRegistryDefinitionId,
        schema_id::SchemaId,
    },
    ledger::{
        cred_def::CredentialDefinition, rev_reg_def::RevocationRegistryDefinition,
        rev_reg_delta::RevocationRegistryDelta, rev_status_list::RevocationStatusList,
        schema::Schema,
    },
};
use serde::{Deserialize, Serialize};

use self::{
    anoncreds::{
        AnoncredsCredentialDefinition, AnoncredsRevocationRegistryDefinition,
        AnoncredsRevocationStatusList, AnoncredsSchema,
    },
    legacy::{CredentialDefinitionV1, RevocationRegistryDefinitionV1, RevocationRegistryDeltaV1, SchemaV1},
};
use crate::{
    errors::error::{VcxLedgerError, VcxLedgerResult},
    ledger::type_conversion::Convert,
};

pub mod anoncreds;
pub mod legacy;

/// The two wire encodings ledgers use for the same anoncreds objects. Business logic only
/// ever sees the canonical types; documents are translated here on the way in and out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerDialect {
    #[default]
    Legacy,
    Anoncreds,
}

impl LedgerDialect {
    pub fn encode_schema(&self, schema: &Schema) -> VcxLedgerResult<String> {
        let json = match self {
            LedgerDialect::Legacy => serde_json::to_string(&SchemaV1::try_from(schema)?)?,
            LedgerDialect::Anoncreds => {
                serde_json::to_string(&AnoncredsSchema::try_from(schema)?)?
            }
        };
        trace!("encode_schema <<< {:?} {}: {}", self, schema.id, json);
        Ok(json)
    }

    pub fn decode_schema(&self, id: &SchemaId, raw: &str) -> VcxLedgerResult<Schema> {
        match self {
            LedgerDialect::Legacy => serde_json::from_str::<SchemaV1>(raw)?.convert(()),
            LedgerDialect::Anoncreds => {
                serde_json::from_str::<AnoncredsSchema>(raw)?.convert(id.clone())
            }
        }
    }

    /// `schema_seq_no` is only consulted by the legacy dialect.
    pub fn encode_cred_def(
        &self,
        cred_def: &CredentialDefinition,
        schema_seq_no: Option<u32>,
    ) -> VcxLedgerResult<String> {
        let json = match self {
            LedgerDialect::Legacy => serde_json::to_string(&CredentialDefinitionV1::from_canonical(
                cred_def,
                schema_seq_no,
            ))?,
            LedgerDialect::Anoncreds => {
                serde_json::to_string(&AnoncredsCredentialDefinition::try_from(cred_def)?)?
            }
        };
        trace!("encode_cred_def <<< {:?} {}: {}", self, cred_def.id, json);
        Ok(json)
    }

    pub fn decode_cred_def(
        &self,
        id: &CredentialDefinitionId,
        raw: &str,
    ) -> VcxLedgerResult<CredentialDefinition> {
        match self {
            LedgerDialect::Legacy => serde_json::from_str::<CredentialDefinitionV1>(raw)?.convert(()),
            LedgerDialect::Anoncreds => {
                serde_json::from_str::<AnoncredsCredentialDefinition>(raw)?.convert(id.clone())
            }
        }
    }

    pub fn encode_rev_reg_def(&self, rev_reg_def: &RevocationRegistryDefinition) -> VcxLedgerResult<String> {
        let json = match self {
            LedgerDialect::Legacy => {
                serde_json::to_string(&RevocationRegistryDefinitionV1::try_from(rev_reg_def)?)?
            }
            LedgerDialect::Anoncreds => serde_json::to_string(
                &AnoncredsRevocationRegistryDefinition::try_from(rev_reg_def)?,
            )?,
        };
        trace!("encode_rev_reg_def <<< {:?} {}: {}", self, rev_reg_def.id, json);
        Ok(json)
    }

    pub fn decode_rev_reg_def(
        &self,
        id: &RevocationRegistryDefinitionId,
        raw: &str,
    ) -> VcxLedgerResult<RevocationRegistryDefinition> {
        match self {
            LedgerDialect::Legacy => {
                serde_json::from_str::<RevocationRegistryDefinitionV1>(raw)?.convert(())
            }
            LedgerDialect::Anoncreds => serde_json::from_str::<AnoncredsRevocationRegistryDefinition>(
                raw,
            )?
            .convert(id.clone()),
        }
    }

    /// Encodes a registry entry. Legacy ledgers take the delta itself, AnonCreds ledgers the
    /// full status list the delta results in.
    pub fn encode_rev_reg_entry(
        &self,
        delta: &RevocationRegistryDelta,
        resulting_list: &RevocationStatusList,
    ) -> VcxLedgerResult<String> {
        if delta.rev_reg_def_id != resulting_list.rev_reg_def_id {
            return Err(VcxLedgerError::InvalidInput(format!(
                "Delta for {} does not match status list of {}",
                delta.rev_reg_def_id, resulting_list.rev_reg_def_id
            )));
        }
        let json = match self {
            LedgerDialect::Legacy => serde_json::to_string(&RevocationRegistryDeltaV1::try_from(delta)?)?,
            LedgerDialect::Anoncreds => serde_json::to_string(
                &AnoncredsRevocationStatusList::try_from(resulting_list)?,
            )?,
        };
        trace!("encode_rev_reg_entry <<< {:?} {}: {}", self, delta.rev_reg_def_id, json);
        Ok(json)
    }

    /// Decodes a registry entry written at `txn_time` into the status list it leaves the
    /// registry in. `previous` is the list before the entry; `None` for the first entry.
    pub fn decode_rev_reg_entry(
        &self,
        raw: &str,
        rev_reg_def: &RevocationRegistryDefinition,
        previous: Option<RevocationStatusList>,
        txn_time: u64,
    ) -> VcxLedgerResult<RevocationStatusList> {
        match self {
            LedgerDialect::Legacy => {
                let delta = serde_json::from_str::<RevocationRegistryDeltaV1>(raw)?
                    .convert((rev_reg_def.id.clone(), txn_time))?;
                trace!(
                    "decode_rev_reg_entry >>> {}: issued {:?}, revoked {:?}",
                    rev_reg_def.id,
                    delta.value.issued,
                    delta.value.revoked
                );
                let mut list = previous.unwrap_or_else(|| {
                    RevocationStatusList::new(
                        rev_reg_def.id.clone(),
                        rev_reg_def.issuer_id.clone(),
                        rev_reg_def.value.issuance_type,
                        rev_reg_def.value.max_cred_num,
                        None,
                        None,
                    )
                });
                list.apply_delta(&delta)?;
                Ok(list)
            }
            LedgerDialect::Anoncreds => {
                let list = serde_json::from_str::<AnoncredsRevocationStatusList>(raw)?.convert(())?;
                if list.rev_reg_def_id != rev_reg_def.id {
                    return Err(VcxLedgerError::InvalidLedgerResponse(format!(
                        "Status list of {} returned for registry {}",
                        list.rev_reg_def_id, rev_reg_def.id
                    )));
                }
                Ok(list)
            }
        }
    }
}
