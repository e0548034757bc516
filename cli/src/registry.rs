//! Registry module.
//!
//! This module provides the source registry adapter bundled with the
//! CLI, which prints sources as JSON for an external provisioning
//! tool to consume.

use calendula_lib::{
    error::{CalendulaError, Result},
    source::CaldavSource,
    source_registry::SourceRegistry,
};

/// Registers sources by printing them to stdout as JSON.
pub struct JsonSourceRegistry;

impl SourceRegistry for JsonSourceRegistry {
    fn register(&mut self, source: &CaldavSource) -> Result<()> {
        let json = serde_json::to_string_pretty(source).map_err(|err| {
            CalendulaError::RegisterSourceError(source.display_name.clone(), err.to_string())
        })?;
        println!("{}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use calendula_lib::account_config::AccountConfig;

    use super::*;

    #[test]
    fn it_should_register_a_source() {
        let config = AccountConfig {
            enabled: true,
            display_name: "Personal".into(),
            server_url: "https://cal.example.com/dav/".into(),
            color: "#3584e4".into(),
            ..AccountConfig::default()
        };
        let source = CaldavSource::from_account_config(&config).unwrap();

        assert!(JsonSourceRegistry.register(&source).is_ok());
    }
}
