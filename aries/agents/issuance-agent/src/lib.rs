#![allow(clippy::too_many_arguments)]

#[macro_use]
extern crate log;

pub extern crate aries_vcx_issuance;

mod agent;
mod error;
mod handlers;
mod storage;
mod transport;

pub use agent::{
    agent_config::{AgentConfig, DefinitionConfig, IssuancePolicy, RetryConfig},
    Agent,
};
pub use error::*;
pub use handlers::{
    connection::{Connection, ServiceConnections},
    credential_definition::{DefinitionRecord, ServiceCredentialDefinitions},
    credential_record::CredentialRecord,
    holder::ServiceCredentialsHolder,
    issuer::ServiceCredentialsIssuer,
    revocation_registry::{RevocationRegistryRecord, ServiceRevocationRegistries},
    schema::{SchemaRecord, ServiceSchemas},
};
pub use storage::keyed_locks::KeyedLocks;
pub use transport::MessageSender;
