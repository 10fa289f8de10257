pub mod base_wallet;
pub mod memory;
pub mod record_tags;
pub mod utils;
