//! Render the portal catalog as a node/edge graph.
//!
//! Reads a catalog (bare or aggregate) from a file, stdin, or a directory of
//! published portal artifacts, and prints the graph JSON the visualization
//! widget consumes. Bad references are tolerated; `--audit` only logs them.

use anyhow::{Context, Result, bail};
use archportal::config::{InputSource, LogSettings, take_input_flag};
use archportal::logging::init_logging;
use archportal::{GraphContract, audit_catalog, build_graph};
use std::env;
use tracing::{info, warn};

fn main() {
    init_logging(&LogSettings::from_env());
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let catalog = args.source.read_catalog()?;

    if args.audit {
        for finding in audit_catalog(&catalog) {
            warn!(%finding, "catalog finding");
        }
    }

    let graph = build_graph(&catalog);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built portal graph"
    );

    let value = serde_json::to_value(&graph).context("serializing graph")?;
    if args.validate {
        GraphContract::load()?.validate(&value)?;
    }

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{rendered}");
    Ok(())
}

struct CliArgs {
    source: InputSource,
    pretty: bool,
    validate: bool,
    audit: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut source: Option<InputSource> = None;
        let mut pretty = false;
        let mut validate = false;
        let mut audit = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            if take_input_flag(&arg, &mut args, &mut source)? {
                continue;
            }
            match arg.as_str() {
                "--pretty" => pretty = true,
                "--validate" => validate = true,
                "--audit" => audit = true,
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}\n{}", usage()),
            }
        }

        Ok(CliArgs {
            source: InputSource::resolve(source),
            pretty,
            validate,
            audit,
        })
    }
}

fn usage() -> &'static str {
    "Usage: portal-graph [--file PATH|--stdin|--data-dir DIR] [--pretty] [--validate] [--audit]\n\
Reads a catalog (or aggregate portal document) and prints its node/edge graph as JSON.\n\
Without an input flag, PORTAL_DATA_DIR is used when set, otherwise stdin.\n"
}
