//! Startup configuration: where the save and log files live, and what the
//! binary was asked to do.

use crate::core::constants::{APP_NAME, LOG_FILE_NAME, SAVE_FILE_NAME, SAVE_PATH_ENV};
use crate::error::PersistenceError;
use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// What to do after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Play,
    /// Print the saved state as JSON and exit.
    Status,
    /// Overwrite the save with a fresh profile.
    Reset,
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub command: CliCommand,
    pub save_path: PathBuf,
    pub log_path: PathBuf,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error("Unknown command: {0}")]
    UnknownArgument(String),

    #[error("Missing value for {0}")]
    MissingValue(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Args(#[from] ArgError),

    #[error(transparent)]
    Location(#[from] PersistenceError),
}

/// Default save location in the platform data directory.
pub fn default_save_path() -> Result<PathBuf, PersistenceError> {
    let dirs = ProjectDirs::from("", "", APP_NAME).ok_or(PersistenceError::NoSaveLocation)?;
    Ok(dirs.data_dir().join(SAVE_FILE_NAME))
}

/// Parses CLI arguments (without the program name).
///
/// Returns the command and an explicit `--save` path if one was given.
pub fn parse_args<I, S>(args: I) -> Result<(CliCommand, Option<PathBuf>), ArgError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut command = CliCommand::Play;
    let mut save_path = None;
    let mut args = args.into_iter().map(Into::<String>::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "status" => command = CliCommand::Status,
            "reset" => command = CliCommand::Reset,
            "--version" | "-v" => command = CliCommand::Version,
            "--help" | "-h" => command = CliCommand::Help,
            "--save" => {
                let path = args.next().ok_or(ArgError::MissingValue("--save"))?;
                save_path = Some(PathBuf::from(path));
            }
            other => return Err(ArgError::UnknownArgument(other.to_string())),
        }
    }
    Ok((command, save_path))
}

impl Config {
    /// Resolve the save path: `--save`, then `$COIN_CLICKER_SAVE`, then the
    /// platform data directory. The log file sits next to the save.
    pub fn resolve(
        command: CliCommand,
        cli_save_path: Option<PathBuf>,
        env_save_path: Option<String>,
    ) -> Result<Self, PersistenceError> {
        let save_path = match (cli_save_path, env_save_path) {
            (Some(path), _) => path,
            (None, Some(env)) if !env.trim().is_empty() => PathBuf::from(env),
            _ => default_save_path()?,
        };
        let log_path = save_path
            .parent()
            .map(|p| p.join(LOG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME));
        Ok(Self {
            command,
            save_path,
            log_path,
        })
    }

    /// Build the config from the process arguments and environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let (command, cli_save) = parse_args(std::env::args().skip(1))?;
        let env_save = std::env::var(SAVE_PATH_ENV).ok();
        Ok(Self::resolve(command, cli_save, env_save)?)
    }
}
