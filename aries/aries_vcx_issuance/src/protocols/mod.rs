pub mod common;
pub mod issuance;
pub mod revocation_notification;
