pub mod connection;
pub mod credential_definition;
pub mod credential_record;
pub mod holder;
pub mod issuer;
pub mod revocation_registry;
pub mod schema;
