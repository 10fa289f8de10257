#![allow(clippy::result_large_err)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde;

pub extern crate messages;

pub use aries_vcx_anoncreds;
pub use aries_vcx_ledger;
pub use aries_vcx_wallet;

#[macro_use]
pub mod handlers;

pub mod common;
pub mod errors;
pub mod protocols;
