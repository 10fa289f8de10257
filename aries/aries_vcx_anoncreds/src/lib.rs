#[macro_use]
extern crate log;

pub mod anoncreds;
pub mod errors;
