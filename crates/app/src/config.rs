//! Command line and environment configuration.
//!
//! Flags win over environment variables, which win over defaults:
//!
//! - `DRILL_WORDS`: word list file or directory (default `vocabulary`)
//! - `DRILL_BIND`: HTTP listen address (default `127.0.0.1:3000`)
//! - `DRILL_SHUFFLE`: `1`/`true` to shuffle drill order
//! - `RUST_LOG`: tracing filter (default `info`, `warn` for the terminal drill)

use std::net::SocketAddr;
use std::path::PathBuf;

use drill_core::model::BankId;
use thiserror::Error;

const DEFAULT_WORDS: &str = "vocabulary";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("unknown subcommand: {0}")]
    UnknownCommand(String),
    #[error("invalid --bind value: {raw}")]
    InvalidBind { raw: String },
    #[error("invalid --bank value: {raw}")]
    InvalidBankId { raw: String },
    #[error("at least one word list file is required")]
    NoWordLists,
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub words: PathBuf,
    pub bind: SocketAddr,
    pub default_bank: BankId,
    pub shuffle: bool,
    pub log_level: String,
}

/// Settings for a drill in the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillConfig {
    pub files: Vec<PathBuf>,
    pub flip: bool,
    pub shuffle: bool,
    pub save_missed: Option<PathBuf>,
    pub log_level: String,
}

/// Settings for printing the names of word lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub files: Vec<PathBuf>,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Serve(ServeConfig),
    Drill(DrillConfig),
    List(ListConfig),
    Help,
}

impl Command {
    /// Parse arguments (without the program name).
    ///
    /// `env` looks up environment variables; the binary passes
    /// `std::env::var`, tests pass a map.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown or malformed arguments.
    pub fn parse<I, E>(args: I, env: E) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter().peekable();

        // Serving is the default when no subcommand is given.
        let explicit = args
            .peek()
            .is_some_and(|first| !first.starts_with('-') || first == "-h" || first == "--help");
        let subcommand = if explicit {
            args.next().unwrap_or_default()
        } else {
            "serve".to_owned()
        };

        match subcommand.as_str() {
            "serve" => parse_serve(&mut args, &env),
            "drill" => parse_drill(&mut args, &env),
            "list" => parse_list(&mut args, &env),
            "help" | "-h" | "--help" => Ok(Self::Help),
            other => Err(ArgsError::UnknownCommand(other.to_owned())),
        }
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app serve [--words <path>] [--bind <addr>] [--bank <id>] [--shuffle]");
    eprintln!("  app drill <file>... [--flip] [--shuffle] [--save-missed <path>]");
    eprintln!("  app list <file>...");
    eprintln!();
    eprintln!("Defaults for serve:");
    eprintln!("  --words {DEFAULT_WORDS}");
    eprintln!("  --bind {DEFAULT_BIND}");
    eprintln!("  --bank 1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DRILL_WORDS, DRILL_BIND, DRILL_SHUFFLE, RUST_LOG");
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_bind(raw: String) -> Result<SocketAddr, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidBind { raw })
}

fn env_flag(value: Option<String>) -> bool {
    value.is_some_and(|v| matches!(v.trim(), "1" | "true" | "yes"))
}

fn parse_serve(
    args: &mut impl Iterator<Item = String>,
    env: &impl Fn(&str) -> Option<String>,
) -> Result<Command, ArgsError> {
    let mut words = env("DRILL_WORDS").map_or_else(|| PathBuf::from(DEFAULT_WORDS), PathBuf::from);
    let mut bind = parse_bind(env("DRILL_BIND").unwrap_or_else(|| DEFAULT_BIND.to_owned()))?;
    let mut default_bank = BankId::new(1);
    let mut shuffle = env_flag(env("DRILL_SHUFFLE"));

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--words" => words = PathBuf::from(require_value(args, "--words")?),
            "--bind" => bind = parse_bind(require_value(args, "--bind")?)?,
            "--bank" => {
                let value = require_value(args, "--bank")?;
                default_bank = value
                    .parse()
                    .map_err(|_| ArgsError::InvalidBankId { raw: value.clone() })?;
            }
            "--shuffle" => shuffle = true,
            "--help" | "-h" => return Ok(Command::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Command::Serve(ServeConfig {
        words,
        bind,
        default_bank,
        shuffle,
        log_level: env("RUST_LOG").unwrap_or_else(|| "info".to_owned()),
    }))
}

fn parse_drill(
    args: &mut impl Iterator<Item = String>,
    env: &impl Fn(&str) -> Option<String>,
) -> Result<Command, ArgsError> {
    let mut files = Vec::new();
    let mut flip = false;
    let mut shuffle = env_flag(env("DRILL_SHUFFLE"));
    let mut save_missed = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--flip" => flip = true,
            "--shuffle" => shuffle = true,
            "--save-missed" => {
                save_missed = Some(PathBuf::from(require_value(args, "--save-missed")?));
            }
            "--help" | "-h" => return Ok(Command::Help),
            flag if flag.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
            _ => files.push(PathBuf::from(arg)),
        }
    }

    if files.is_empty() {
        return Err(ArgsError::NoWordLists);
    }

    Ok(Command::Drill(DrillConfig {
        files,
        flip,
        shuffle,
        save_missed,
        log_level: env("RUST_LOG").unwrap_or_else(|| "warn".to_owned()),
    }))
}

fn parse_list(
    args: &mut impl Iterator<Item = String>,
    env: &impl Fn(&str) -> Option<String>,
) -> Result<Command, ArgsError> {
    let mut files = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            flag if flag.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
            _ => files.push(PathBuf::from(arg)),
        }
    }

    if files.is_empty() {
        return Err(ArgsError::NoWordLists);
    }

    Ok(Command::List(ListConfig {
        files,
        log_level: env("RUST_LOG").unwrap_or_else(|| "warn".to_owned()),
    }))
}
