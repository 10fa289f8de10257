#![allow(clippy::unwrap_used)]

#[macro_use]
extern crate log;

pub mod constants;
pub mod errors;
pub mod logger;
pub mod mockdata;
