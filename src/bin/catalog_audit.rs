//! Report data-quality findings in a portal catalog.
//!
//! Prints one finding per line (or NDJSON with `--json`) and exits 1 when any
//! finding exists, so CI can gate catalog publishes on dangling references.

use anyhow::{Result, bail};
use archportal::audit_catalog;
use archportal::config::{InputSource, LogSettings, take_input_flag};
use archportal::logging::init_logging;
use std::env;

fn main() {
    init_logging(&LogSettings::from_env());
    match run() {
        Ok(0) => {}
        Ok(count) => {
            eprintln!("{count} catalog finding(s)");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<usize> {
    let mut args = env::args_os().skip(1);
    let mut source: Option<InputSource> = None;
    let mut json = false;

    while let Some(arg_os) = args.next() {
        let arg = arg_os
            .into_string()
            .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
        if take_input_flag(&arg, &mut args, &mut source)? {
            continue;
        }
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                print!(
                    "Usage: catalog-audit [--file PATH|--stdin|--data-dir DIR] [--json]\n\
Lists dangling or missing domain references and duplicate node ids.\n"
                );
                std::process::exit(0);
            }
            other => bail!("unknown flag: {other}"),
        }
    }

    let catalog = InputSource::resolve(source).read_catalog()?;
    let findings = audit_catalog(&catalog);
    for finding in &findings {
        if json {
            println!("{}", serde_json::to_string(finding)?);
        } else {
            println!("{finding}");
        }
    }
    Ok(findings.len())
}
