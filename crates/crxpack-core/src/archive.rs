//! Deterministic zip serialization of the extension sources.
//!
//! The archive is the unit that gets signed, so two packaging runs over
//! identical inputs must produce byte-identical blobs. All timestamp and
//! permission metadata is pinned: entries carry the DOS epoch
//! (1980-01-01) and mode 0644, and the Deflate level is fixed.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::{PackError, Result};

/// Fixed Deflate level; changing it changes the signed bytes.
const COMPRESSION_LEVEL: i64 = 6;

/// Strip a single leading path separator.
///
/// Build pipelines commonly hand over release paths rooted at `/`
/// (`/manifest.json`); zip entry names are relative. Exactly one
/// separator is removed so `//x` keeps its second slash.
fn normalize_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

fn zip_timestamp() -> DateTime {
    DateTime::from_date_and_time(1980, 1, 1, 0, 0, 0).unwrap_or_else(|_| DateTime::default())
}

/// Serialize `(path, bytes)` entries into one zip blob, in input order.
///
/// # Errors
///
/// Returns [`PackError::Archive`] if a normalized path is empty or
/// duplicated, or if the compression stream fails. The caller must treat
/// any error as fatal for the whole packaging run; no partial archive is
/// ever returned.
pub fn build_archive<'a, I>(entries: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let timestamp = zip_timestamp();
    let mut seen: HashSet<String> = HashSet::new();
    let mut count = 0usize;

    for (path, bytes) in entries {
        let name = normalize_path(path);
        if name.is_empty() {
            return Err(PackError::Archive(format!("empty entry path: {path:?}")));
        }
        if !seen.insert(name.to_string()) {
            return Err(PackError::Archive(format!("duplicate entry path: {name}")));
        }

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(COMPRESSION_LEVEL))
            .last_modified_time(timestamp)
            .unix_permissions(0o644);
        writer
            .start_file(name, options)
            .map_err(|e| PackError::Archive(format!("failed to add {name}: {e}")))?;
        writer
            .write_all(bytes)
            .map_err(|e| PackError::Archive(format!("failed to write {name}: {e}")))?;
        count += 1;
    }

    let cursor = writer.finish()?;
    tracing::debug!(entries = count, bytes = cursor.get_ref().len(), "archive built");
    Ok(cursor.into_inner())
}
