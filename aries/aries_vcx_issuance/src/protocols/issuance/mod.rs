pub mod builders;
pub mod state;
