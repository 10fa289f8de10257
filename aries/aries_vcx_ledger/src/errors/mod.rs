pub mod error;
mod mapping_others;
