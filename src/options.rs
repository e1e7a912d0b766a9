//! # Generic Engine Options
//!
//! Engine-standard command-line options recognized ahead of
//! application-specific arguments:
//!
//! - `-D key=value` — set one configuration property (repeatable)
//! - `--conf <path>` — merge a TOML or JSON properties file (repeatable)
//! - `--tracker <addr>` — set the job tracker address
//!
//! Generic options must precede application arguments; everything from the
//! first unrecognized token onward is returned to the caller untouched.

use std::path::PathBuf;

use clap::Parser;

use crate::config::JobConfiguration;
use crate::constants;
use crate::error::{ConfigError, ConfigResult};

/// Grammar for the engine's generic option prefix of an argument list.
#[derive(Debug, Parser)]
#[command(
    name = "generic-options",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct GenericOptions {
    /// Property definitions, `key=value`.
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    define: Vec<String>,

    /// Properties files to merge, in order.
    #[arg(long = "conf", value_name = "PATH")]
    conf: Vec<PathBuf>,

    /// Job tracker address.
    #[arg(long = "tracker", value_name = "ADDR")]
    tracker: Option<String>,

    /// Application arguments, captured from the first unrecognized token.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    remaining: Vec<String>,
}

/// Parse the generic option prefix of `args`, merging recognized options
/// into `conf`, and return the remaining application arguments.
///
/// Merge order: `--conf` files first (in flag order), then `-D` definitions
/// (which therefore override file-sourced values), then `--tracker`.
///
/// Declared fallible as a whole even though some engine variants can only
/// fail on the file-merge path; callers must not assume any sub-path is
/// infallible, so the error contract stays stable across variants.
pub fn parse_generic_options<I, S>(conf: &mut JobConfiguration, args: I) -> ConfigResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let options = GenericOptions::try_parse_from(&args)
        .map_err(|e| ConfigError::InvalidArguments(e.to_string()))?;

    for path in &options.conf {
        let merged = conf.merge_file(path)?;
        tracing::debug!(?path, merged, "Applied --conf properties file");
    }

    for define in &options.define {
        let (key, value) = define
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidDefine(define.clone()))?;
        conf.set(key, value);
    }

    if let Some(addr) = &options.tracker {
        conf.set(constants::PROP_JOB_TRACKER_ADDRESS, addr.clone());
    }

    Ok(options.remaining)
}
