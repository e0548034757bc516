pub mod account_config;
pub mod error;
pub mod source;
pub mod source_registry;
