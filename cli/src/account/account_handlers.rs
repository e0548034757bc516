//! Account handlers module.
//!
//! This module contains all handlers related to the account.

use anyhow::Result;
use log::info;
use std::path::PathBuf;

use calendula_lib::{
    account_config::{self, AccountConfig},
    source::CaldavSource,
    source_registry::SourceRegistry,
};

/// Checks if a configuration file exists.
pub fn check(path: Option<&str>) -> Result<()> {
    info!(">> check account handler");

    let path = path
        .map(PathBuf::from)
        .unwrap_or_else(account_config::config_path);

    if path.exists() {
        println!("configuration file found at {:?}", path);
    } else {
        println!("no configuration file at {:?}", path);
    }

    info!("<< check account handler");
    Ok(())
}

/// Shows the configured account, without its password.
pub fn show(path: Option<&str>) -> Result<()> {
    info!(">> show account handler");

    let config = AccountConfig::from_opt_path(path)?;

    if config.enabled {
        println!("display name: {}", config.display_name);
        println!("server url: {}", config.server_url);
        println!(
            "username: {}",
            config.username.as_deref().unwrap_or("(derived from URL)")
        );
        println!("color: {}", config.color);
        println!("trust self-signed cert: {}", config.trust_self_signed_cert);
    } else {
        println!("account is disabled");
    }

    info!("<< show account handler");
    Ok(())
}

/// Builds a CalDAV source from the configured account and registers
/// it. A disabled account registers nothing and succeeds.
pub fn provision<R: SourceRegistry>(path: Option<&str>, registry: &mut R) -> Result<()> {
    info!(">> provision account handler");

    let config = AccountConfig::from_opt_path(path)?;

    if !config.enabled {
        println!("account is disabled, nothing to provision");
        info!("<< provision account handler");
        return Ok(());
    }

    let source = CaldavSource::from_account_config(&config)?;
    registry.register(&source)?;

    info!("<< provision account handler");
    Ok(())
}
