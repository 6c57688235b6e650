use std::env;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Environment-driven configuration
// ---------------------------------------------------------------------------

const DEFAULT_STORE: &str = "data/reviews.csv";

/// Process-level configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted review store.
    pub store_path: PathBuf,
    /// External ingestion command line (program + args); the selected post
    /// count is appended as the final argument. `None` disables the tool.
    pub ingest_command: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Self {
        let store_path = env::var("REVIEW_STORE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE));

        let ingest_command = env::var("INGEST_COMMAND")
            .ok()
            .as_deref()
            .and_then(parse_command);

        Config {
            store_path,
            ingest_command,
        }
    }
}

/// Split a command line on whitespace into program + args. No quoting rules;
/// the ingest tool takes simple arguments only.
fn parse_command(raw: &str) -> Option<Vec<String>> {
    let parts: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if parts.is_empty() { None } else { Some(parts) }
}
