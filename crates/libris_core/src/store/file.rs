//! Whole-file JSON load/save for the catalog.
//!
//! # Responsibility
//! - Read the backing file into a `Catalog`, tolerating absence.
//! - Serialize the full catalog back, human-readably formatted.
//!
//! # Invariants
//! - The on-disk document is one top-level JSON object keyed by book ID.
//! - Output is pretty-printed with 4-space indentation.
//! - Save overwrites prior content unconditionally; no atomic rename.

use super::{Catalog, StoreError, StoreResult};
use log::{error, info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

/// Loads the catalog from `path`.
///
/// A missing file yields an empty catalog. Unreadable or unparseable
/// content is returned as an error so the caller can warn the user and
/// decide how to continue.
pub fn load_catalog(path: impl AsRef<Path>) -> StoreResult<Catalog> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=catalog_load module=store status=start path={}",
        path.display()
    );

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(
                "event=catalog_load module=store status=ok mode=missing duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(Catalog::new());
        }
        Err(err) => {
            error!(
                "event=catalog_load module=store status=error error_code=read_failed duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    match serde_json::from_str::<Catalog>(&text) {
        Ok(catalog) => {
            info!(
                "event=catalog_load module=store status=ok count={} duration_ms={}",
                catalog.len(),
                started_at.elapsed().as_millis()
            );
            Ok(catalog)
        }
        Err(err) => {
            warn!(
                "event=catalog_load module=store status=error error_code=malformed duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(StoreError::Malformed {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

/// Saves the full catalog to `path`, replacing any prior content.
pub fn save_catalog(path: impl AsRef<Path>, catalog: &Catalog) -> StoreResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    // Matches the backing-file contract: 4-space indentation, not the
    // serde_json default of 2.
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    catalog
        .serialize(&mut serializer)
        .map_err(|err| StoreError::Malformed {
            path: path.to_path_buf(),
            source: err,
        })?;

    if let Err(err) = fs::write(path, &buffer) {
        error!(
            "event=catalog_save module=store status=error error_code=write_failed duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        );
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: err,
        });
    }

    info!(
        "event=catalog_save module=store status=ok count={} duration_ms={}",
        catalog.len(),
        started_at.elapsed().as_millis()
    );
    Ok(())
}
