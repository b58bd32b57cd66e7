//! Environment-driven configuration shared by the helper binaries.
//!
//! Flags parsed by each binary take precedence; the environment only fills in
//! what the command line left unset.

use crate::catalog::{Catalog, catalog_from_document};
use crate::portal::load_portal_dir;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Directory holding the published portal artifacts.
pub const DATA_DIR_ENV: &str = "PORTAL_DATA_DIR";
/// `EnvFilter` directives for the binaries' logging.
pub const LOG_ENV: &str = "PORTAL_LOG";
/// Emit JSON log lines when set to a truthy value.
pub const LOG_JSON_ENV: &str = "PORTAL_LOG_JSON";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Whether an environment flag is set to something other than empty or `0`.
pub fn env_flag(name: &str) -> bool {
    env::var(name)
        .ok()
        .map(|v| !v.trim().is_empty() && v != "0")
        .unwrap_or(false)
}

pub fn data_dir_from_env() -> Option<PathBuf> {
    env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: String,
    pub json: bool,
}

impl LogSettings {
    pub fn from_env() -> Self {
        let filter = env::var(LOG_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self {
            filter,
            json: env_flag(LOG_JSON_ENV),
        }
    }
}

/// Where a binary reads its catalog document from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    DataDir(PathBuf),
}

impl InputSource {
    /// Resolve the source when no input flag was given: the configured data
    /// directory if any, otherwise stdin.
    pub fn resolve(explicit: Option<InputSource>) -> InputSource {
        explicit
            .or_else(|| data_dir_from_env().map(InputSource::DataDir))
            .unwrap_or(InputSource::Stdin)
    }

    /// Read the catalog. Shape problems degrade to an emptier catalog; only
    /// I/O and JSON syntax errors are reported.
    pub fn read_catalog(&self) -> Result<Catalog> {
        match self {
            InputSource::DataDir(dir) => Ok(load_portal_dir(dir)?.catalog()),
            InputSource::File(path) => {
                if !path.is_file() {
                    bail!("input file not found: {}", path.display());
                }
                let data = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                parse_document(&data).map(|value| catalog_from_document(&value))
            }
            InputSource::Stdin => {
                let mut data = String::new();
                io::stdin()
                    .read_to_string(&mut data)
                    .context("reading stdin")?;
                parse_document(&data).map(|value| catalog_from_document(&value))
            }
        }
    }
}

fn parse_document(data: &str) -> Result<Value> {
    let trimmed = data.trim();
    if trimmed.is_empty() {
        bail!("No input provided");
    }
    serde_json::from_str(trimmed).context("failed to parse JSON input")
}

/// Parse the input-selection flags shared by the binaries.
///
/// Returns `Ok(true)` when `flag` was one of `--file`, `--stdin`, or
/// `--data-dir` and was consumed.
pub fn take_input_flag(
    flag: &str,
    args: &mut impl Iterator<Item = std::ffi::OsString>,
    source: &mut Option<InputSource>,
) -> Result<bool> {
    let parsed = match flag {
        "--file" => InputSource::File(PathBuf::from(next_value(args, "--file")?)),
        "--data-dir" => InputSource::DataDir(PathBuf::from(next_value(args, "--data-dir")?)),
        "--stdin" => InputSource::Stdin,
        _ => return Ok(false),
    };
    if source.is_some() {
        bail!("--file/--stdin/--data-dir may only be provided once");
    }
    *source = Some(parsed);
    Ok(true)
}

pub fn next_value(
    args: &mut impl Iterator<Item = std::ffi::OsString>,
    flag: &str,
) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tempfile::NamedTempFile;

    fn os_args(values: &[&str]) -> std::vec::IntoIter<OsString> {
        values
            .iter()
            .map(OsString::from)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn input_flags_are_consumed_once() {
        let mut source = None;
        let mut args = os_args(&["catalog.json"]);
        assert!(take_input_flag("--file", &mut args, &mut source).unwrap());
        assert_eq!(source, Some(InputSource::File(PathBuf::from("catalog.json"))));

        let mut more = os_args(&[]);
        assert!(take_input_flag("--stdin", &mut more, &mut source).is_err());
        assert!(!take_input_flag("--pretty", &mut more, &mut None).unwrap());
    }

    #[test]
    fn missing_flag_value_is_an_error() {
        let mut args = os_args(&[]);
        let err = take_input_flag("--data-dir", &mut args, &mut None).unwrap_err();
        assert!(err.to_string().contains("missing value for --data-dir"));
    }

    #[test]
    fn file_source_reads_aggregate_documents() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            r#"{"catalog":{"domains":[{"id":"sales"}]},"runtime":{}}"#,
        )
        .unwrap();
        let catalog = InputSource::File(file.path().to_path_buf())
            .read_catalog()
            .unwrap();
        assert_eq!(catalog.domains.len(), 1);
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = NamedTempFile::new().unwrap();
        let err = InputSource::File(file.path().to_path_buf())
            .read_catalog()
            .unwrap_err();
        assert!(err.to_string().contains("No input"));
    }
}
