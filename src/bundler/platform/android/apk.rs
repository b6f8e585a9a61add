//! APK archive writer.
//!
//! Writes an entry table into a single deflate-compressed ZIP container.
//!
//! Output is reproducible: entries are written in table order with a pinned
//! timestamp (the ZIP epoch, 1980-01-01 00:00:00) and fixed `0o644`
//! permissions, so building twice yields byte-identical files.
//!
//! The target file is truncated if present; its parent directory must
//! already exist.

use super::entries::ArchiveEntry;
use crate::bail;
use crate::bundler::error::{Error, ErrorExt, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Deflate level applied to every entry.
pub const COMPRESSION_LEVEL: i64 = 6;

/// Per-entry ZIP options shared by every member of the archive.
pub fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL))
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

/// Writes `entries` into a new archive at `output_path`.
///
/// # Errors
///
/// Returns [`Error::DuplicateEntry`] before touching the filesystem if two
/// entries share a name, [`Error::Fs`] if the output file cannot be created,
/// and [`Error::ZipError`] / [`Error::IoError`] if writing fails midway. A
/// partially written file is left as is.
pub fn write_apk(output_path: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    ensure_unique_names(entries)?;
    if entries.is_empty() {
        bail!("refusing to write an apk with no entries");
    }

    let file = File::create(output_path).fs_context("creating apk archive", output_path)?;
    let mut zip = ZipWriter::new(file);
    let options = entry_options();

    for entry in entries {
        let content = entry.content();
        log::debug!("Adding {} ({} bytes)", entry.name(), content.len());

        zip.start_file(entry.name(), options)?;
        zip.write_all(&content)?;
    }

    let mut file = zip.finish()?;
    file.flush().fs_context("flushing apk archive", output_path)?;

    log::info!("Wrote {} entries to {}", entries.len(), output_path.display());
    Ok(())
}

fn ensure_unique_names(entries: &[ArchiveEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.name()) {
            return Err(Error::DuplicateEntry {
                name: entry.name().to_string(),
            });
        }
    }
    Ok(())
}
