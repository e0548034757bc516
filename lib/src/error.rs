use std::{io, path::PathBuf, result};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendulaError {
    #[error("cannot find configuration file {0:?}")]
    NotFoundConfigError(PathBuf),
    #[error("cannot read configuration file {0:?}: {1}")]
    ReadConfigError(PathBuf, io::Error),
    #[error("cannot parse configuration file {0:?}: {1}")]
    ParseConfigError(PathBuf, toml::de::Error),
    #[error("missing required fields (DisplayName or ServerURL) in configuration")]
    MissingRequiredFieldsError,
    #[error("PasswordFile not specified in configuration")]
    MissingPasswordFileError,
    #[error("cannot read password file {0:?}: {1}")]
    ReadPasswordFileError(PathBuf, io::Error),
    #[error("password file is empty: {0:?}")]
    EmptyPasswordFileError(PathBuf),
    #[error("cannot parse server URL: {0}")]
    ParseServerUrlError(url::ParseError),
    #[error("invalid server URL: missing host")]
    MissingServerUrlHostError,
    #[error("cannot register caldav source {0:?}: {1}")]
    RegisterSourceError(String, String),
}

pub type Result<T> = result::Result<T, CalendulaError>;
