#[macro_use]
pub mod util;
