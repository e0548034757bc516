use log::{debug, info, trace};
use secrecy::SecretString;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::error::*;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV_VAR: &str = "GNOME_CALENDAR_CONFIG";

/// Default calendar color, used when the config file omits `Color`.
pub const DEFAULT_COLOR: &str = "#3584e4";

const CONFIG_DIR_NAME: &str = "gnome-calendar";
const CONFIG_FILE_NAME: &str = "account.conf";

/// Represents the raw `[CalDAV]` section of the account file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeserializedAccountConfig {
    /// Enables the account. Defaults to false.
    pub enabled: bool,
    /// Represents the display name of the calendar.
    pub display_name: Option<String>,
    /// Represents the CalDAV server URL.
    #[serde(rename = "ServerURL")]
    pub server_url: Option<String>,
    /// Represents the CalDAV login. Defaults to the user-info segment
    /// of the server URL.
    pub username: Option<String>,
    /// Represents the calendar color, in hex format.
    pub color: Option<String>,
    /// Trusts self-signed TLS certificates. Advisory only.
    pub trust_self_signed_cert: bool,
    /// Represents the path to the file holding the password.
    pub password_file: Option<String>,
}

/// Represents the whole account file.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DeserializedConfig {
    #[serde(rename = "CalDAV", default)]
    pub caldav: DeserializedAccountConfig,
}

/// Represents the validated account configuration.
#[derive(Debug, Default)]
pub struct AccountConfig {
    /// Whether the account is enabled. When false, all other fields
    /// are left at their defaults.
    pub enabled: bool,
    /// Represents the display name of the calendar.
    pub display_name: String,
    /// Represents the CalDAV server URL, not parsed yet.
    pub server_url: String,
    /// Represents the CalDAV login, if any.
    pub username: Option<String>,
    /// Represents the CalDAV password, read from the password
    /// file. Zeroized when the config is dropped.
    pub password: Option<SecretString>,
    /// Represents the calendar color, in hex format.
    pub color: String,
    /// Trusts self-signed TLS certificates. Advisory only.
    pub trust_self_signed_cert: bool,
}

impl AccountConfig {
    /// Tries to load the account from the default config path.
    pub fn load() -> Result<Self> {
        Self::from_opt_path(None)
    }

    /// Tries to load the account from an optional path.
    pub fn from_opt_path(path: Option<&str>) -> Result<Self> {
        info!("begin: try to load account config from path");
        debug!("path: {:?}", path);

        let path = path.map(PathBuf::from).unwrap_or_else(config_path);

        if !path.exists() {
            return Err(CalendulaError::NotFoundConfigError(path));
        }

        let content = fs::read_to_string(&path)
            .map_err(|err| CalendulaError::ReadConfigError(path.clone(), err))?;
        let value: toml::Value = content
            .parse()
            .map_err(|err| CalendulaError::ParseConfigError(path.clone(), err))?;

        // Probe `Enabled` before any typed field read: a disabled
        // account must load even when its other fields are missing or
        // malformed.
        let enabled = value
            .get("CalDAV")
            .and_then(|section| section.get("Enabled"))
            .and_then(|enabled| enabled.as_bool())
            .unwrap_or_default();

        if !enabled {
            debug!("account is disabled in configuration");
            info!("end: try to load account config from path");
            return Ok(Self::default());
        }

        let config: DeserializedConfig = value
            .try_into()
            .map_err(|err| CalendulaError::ParseConfigError(path.clone(), err))?;
        let account = config.caldav;

        let display_name = account.display_name.filter(|name| !name.is_empty());
        let server_url = account.server_url.filter(|url| !url.is_empty());
        let (display_name, server_url) = match (display_name, server_url) {
            (Some(display_name), Some(server_url)) => (display_name, server_url),
            _ => return Err(CalendulaError::MissingRequiredFieldsError),
        };

        let password_file = account
            .password_file
            .filter(|file| !file.is_empty())
            .ok_or(CalendulaError::MissingPasswordFileError)?;
        let password = read_password_file(Path::new(&password_file))?;

        let config = Self {
            enabled: true,
            display_name,
            server_url,
            username: account.username.filter(|user| !user.is_empty()),
            password: Some(password),
            color: account
                .color
                .filter(|color| !color.is_empty())
                .unwrap_or_else(|| DEFAULT_COLOR.to_owned()),
            trust_self_signed_cert: account.trust_self_signed_cert,
        };
        trace!("account config: {:?}", config);

        info!("end: try to load account config from path");
        Ok(config)
    }
}

/// Gets the config file path.
///
/// The `GNOME_CALENDAR_CONFIG` environment variable takes precedence,
/// then `$XDG_CONFIG_HOME`, then the home directory. Never fails: the
/// returned path is not checked for existence.
pub fn config_path() -> PathBuf {
    let home_var = if cfg!(target_family = "windows") {
        "USERPROFILE"
    } else {
        "HOME"
    };
    config_path_from(
        env::var(CONFIG_PATH_ENV_VAR).ok(),
        env::var("XDG_CONFIG_HOME").ok(),
        env::var(home_var).ok(),
    )
}

/// Composes the config file path from already-resolved environment
/// lookups. Pure counterpart of [`config_path`].
fn config_path_from(
    overridden: Option<String>,
    xdg_config_home: Option<String>,
    home: Option<String>,
) -> PathBuf {
    if let Some(path) = overridden.filter(|path| !path.is_empty()) {
        return PathBuf::from(path);
    }

    let config_home = match xdg_config_home.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => home
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(".config"),
    };

    config_home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Checks if a config file exists. Returns false on any access error.
pub fn has_config() -> bool {
    config_path().exists()
}

/// Reads the password from a file (e.g. from agenix). Trailing
/// whitespace is trimmed in place rather than through an intermediate
/// copy; the secret is wiped when the returned value drops.
fn read_password_file(path: &Path) -> Result<SecretString> {
    let mut contents = fs::read_to_string(path)
        .map_err(|err| CalendulaError::ReadPasswordFileError(path.to_owned(), err))?;
    contents.truncate(contents.trim_end().len());

    if contents.is_empty() {
        return Err(CalendulaError::EmptyPasswordFileError(path.to_owned()));
    }

    Ok(SecretString::from(contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_resolve_path_from_env_var_first() {
        let path = config_path_from(
            Some("/etc/calendula/account.conf".into()),
            Some("/home/alice/.config".into()),
            Some("/home/alice".into()),
        );
        assert_eq!(PathBuf::from("/etc/calendula/account.conf"), path);
    }

    #[test]
    fn it_should_ignore_empty_env_var_override() {
        let path = config_path_from(
            Some("".into()),
            Some("/home/alice/.config".into()),
            Some("/home/alice".into()),
        );
        assert_eq!(
            PathBuf::from("/home/alice/.config/gnome-calendar/account.conf"),
            path
        );
    }

    #[test]
    fn it_should_resolve_path_from_home_last() {
        let path = config_path_from(None, None, Some("/home/alice".into()));
        assert_eq!(
            PathBuf::from("/home/alice/.config/gnome-calendar/account.conf"),
            path
        );
    }

    #[test]
    fn it_should_not_leak_password_through_debug() {
        let config = AccountConfig {
            enabled: true,
            display_name: "Personal".into(),
            server_url: "https://cal.example.com".into(),
            password: Some(SecretString::from("hunter2".to_owned())),
            ..AccountConfig::default()
        };
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
