pub mod credential_definition;
pub mod credential_schema;
pub mod revocation_registry;
