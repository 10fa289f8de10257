pub mod cred_issuance;
pub mod notification;
pub mod report_problem;
pub mod revocation;
