#[macro_use]
mod macros;

pub mod identifiers;

#[cfg(feature = "ledger")]
pub mod ledger;

#[cfg(feature = "messages")]
pub mod messages;
