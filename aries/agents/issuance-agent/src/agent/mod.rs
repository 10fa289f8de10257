pub mod agent_config;
mod agent_struct;
mod init;

pub use agent_struct::Agent;
