use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

use super::error::DataError;
use super::model::RawReview;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load all raw review rows from the persisted store. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – the store format written by the ingest tool (recommended)
/// * `.json` – records-oriented: `[{ "created": ..., "title": ..., ... }]`
///
/// The whole file is read on every call; rows come back in store order. Any
/// failure to open or parse the store is reported as [`DataError::Unavailable`]
/// and is fatal to the view.
pub fn load_store(path: &Path) -> Result<Vec<RawReview>, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let result = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(anyhow::anyhow!("unsupported store extension: .{other}")),
    };

    result.map_err(|e| DataError::Unavailable(format!("{e:#}")))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with at least `created`, `title`, `comment`,
/// `sentiment`, `type`. Extra columns are ignored; missing columns fall back
/// to empty strings and surface later as malformed or unknown values.
fn load_csv(path: &Path) -> Result<Vec<RawReview>> {
    let mut reader = csv::Reader::from_path(path).context("opening review store")?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<RawReview>().enumerate() {
        let raw = result.with_context(|| format!("review store row {row_no}"))?;
        rows.push(raw);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')` shape):
///
/// ```json
/// [
///   {
///     "created": 1641019620,
///     "title": "Loved this film",
///     "comment": "Would watch again.",
///     "sentiment": "positive",
///     "type": "Discussion"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<RawReview>> {
    let text = std::fs::read_to_string(path).context("reading JSON store")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON store")?;

    let records = root.as_array().context("expected top-level JSON array")?;

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = match rec.as_object() {
            Some(obj) => obj,
            None => bail!("row {i} is not a JSON object"),
        };
        rows.push(RawReview {
            created: field_as_string(obj.get("created")),
            title: field_as_string(obj.get("title")),
            comment: field_as_string(obj.get("comment")),
            sentiment: field_as_string(obj.get("sentiment")),
            post_type: field_as_string(obj.get("type")),
        });
    }
    Ok(rows)
}

/// Flatten a JSON field to the free-form text `RawReview` carries. Numbers are
/// kept in their decimal form so `created` survives either representation.
fn field_as_string(val: Option<&JsonValue>) -> String {
    match val {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(JsonValue::Bool(b)) => b.to_string(),
        Some(JsonValue::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
