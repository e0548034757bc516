use anyhow::Result;

pub mod account;
pub mod registry;

use clap::{App, AppSettings};

use crate::{
    account::{account_args, account_handlers},
    registry::JsonSourceRegistry,
};

fn create_app<'a>() -> App<'a, 'a> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .global_setting(AppSettings::GlobalVersion)
        .arg(&account_args::path_arg())
        .subcommands(account_args::subcmds())
}

fn main() -> Result<()> {
    // init env logger
    let default_env_filter = env_logger::DEFAULT_FILTER_ENV;
    env_logger::init_from_env(env_logger::Env::default().filter_or(default_env_filter, "off"));

    // init app
    let app = create_app();
    let m = app.get_matches();

    // check account commands
    match account_args::matches(&m)? {
        Some(account_args::Cmd::Check) => account_handlers::check(m.value_of("config")),
        Some(account_args::Cmd::Show) => account_handlers::show(m.value_of("config")),
        Some(account_args::Cmd::Provision) => {
            account_handlers::provision(m.value_of("config"), &mut JsonSourceRegistry)
        }
        None => Ok(()),
    }
}
