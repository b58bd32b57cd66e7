use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn portal_graph_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_portal-graph"))
}

pub fn catalog_audit_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_catalog-audit"))
}

/// Command with the portal environment cleared so host settings cannot leak in.
pub fn isolated_command(binary: &Path) -> Command {
    let mut cmd = Command::new(binary);
    cmd.env_remove("PORTAL_DATA_DIR")
        .env_remove("PORTAL_LOG_JSON")
        .env("PORTAL_LOG", "off");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    fs::write(path, serde_json::to_vec(value)?)
        .with_context(|| format!("writing fixture {}", path.display()))
}
