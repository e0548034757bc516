//! Account arguments module.
//!
//! This module provides subcommands, arguments and a command matcher
//! related to the account.

use anyhow::Result;
use clap::{self, App, Arg, ArgMatches, SubCommand};
use log::{debug, info};

/// Represents the account commands.
#[derive(Debug, PartialEq, Eq)]
pub enum Cmd {
    /// Represents the check account command.
    Check,
    /// Represents the show account command.
    Show,
    /// Represents the provision account command.
    Provision,
}

/// Represents the account command matcher.
pub fn matches(m: &ArgMatches) -> Result<Option<Cmd>> {
    info!(">> account command matcher");

    let cmd = if m.subcommand_matches("check").is_some() {
        debug!("check command matched");
        Some(Cmd::Check)
    } else if m.subcommand_matches("show").is_some() {
        debug!("show command matched");
        Some(Cmd::Show)
    } else if m.subcommand_matches("provision").is_some() {
        debug!("provision command matched");
        Some(Cmd::Provision)
    } else {
        None
    };

    info!("<< account command matcher");
    Ok(cmd)
}

/// Represents the config path argument.
pub fn path_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name("config")
        .long("config")
        .short("c")
        .help("Forces a specific config file path")
        .value_name("PATH")
}

/// Represents the account subcommands.
pub fn subcmds<'a>() -> Vec<App<'a, 'a>> {
    vec![
        SubCommand::with_name("check")
            .aliases(&["chk"])
            .about("Checks if a configuration file exists"),
        SubCommand::with_name("show")
            .aliases(&["sh"])
            .about("Shows the configured account, without its password"),
        SubCommand::with_name("provision")
            .aliases(&["prov", "p"])
            .about("Builds a CalDAV source from the configured account and registers it"),
    ]
}

#[cfg(test)]
mod tests {
    use clap::App;

    use super::*;

    #[test]
    fn it_should_match_cmds() {
        let arg = App::new("calendula")
            .subcommands(subcmds())
            .get_matches_from(&["calendula", "provision"]);

        assert_eq!(Some(Cmd::Provision), matches(&arg).unwrap());
    }

    #[test]
    fn it_should_match_aliases() {
        macro_rules! get_matches_from {
            ($alias:expr) => {
                App::new("calendula")
                    .subcommands(subcmds())
                    .get_matches_from(&["calendula", $alias])
                    .subcommand_name()
            };
        }

        assert_eq!(Some("check"), get_matches_from!["chk"]);
        assert_eq!(Some("show"), get_matches_from!["sh"]);
        assert_eq!(Some("provision"), get_matches_from!["prov"]);
        assert_eq!(Some("provision"), get_matches_from!["p"]);
    }
}
