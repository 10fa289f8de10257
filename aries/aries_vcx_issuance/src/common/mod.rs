pub mod credentials;
pub mod primitives;
