pub mod base_anoncreds;
pub mod tails;
