use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::Client;

pub fn load_clients(path: impl AsRef<Path>) -> Result<Vec<Client>> {
    let file = fs::read_to_string(path.as_ref())
        .with_context(|| format!("failed to read {}", path.as_ref().display()))?;
    parse_clients(&file).with_context(|| format!("invalid json in {}", path.as_ref().display()))
}

/// The catalog document must be a JSON array of record-shaped objects.
pub fn parse_clients(text: &str) -> Result<Vec<Client>> {
    let clients: Vec<Client> = serde_json::from_str(text)?;
    Ok(clients)
}

/// Pretty-prints with 2-space indentation, matching the export shape the
/// catalog pages are served from.
pub fn to_json_pretty(clients: &[Client]) -> Result<String> {
    serde_json::to_string_pretty(clients).context("failed to serialize catalog")
}

pub fn save_clients(path: impl AsRef<Path>, clients: &[Client]) -> Result<()> {
    let mut text = to_json_pretty(clients)?;
    text.push('\n');
    fs::write(path.as_ref(), text)
        .with_context(|| format!("failed to write {}", path.as_ref().display()))
}
