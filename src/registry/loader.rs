//! Snapshot loading from JSON files, directories and ZIP archives.

use super::{RegistrySnapshot, Section};
use crate::error::{ExtractorError, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Load a snapshot from a file path.
///
/// A `.json` file holds the whole snapshot; a directory or any other file
/// (treated as a ZIP archive) holds one `<section>.json` per section.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<RegistrySnapshot> {
    let path = path.as_ref();

    if path.is_dir() {
        load_from_directory(path)
    } else if !path.exists() {
        Err(ExtractorError::InvalidSnapshot(format!(
            "{} does not exist",
            path.display()
        )))
    } else if path.extension().map(|e| e == "json").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let snapshot: RegistrySnapshot = serde_json::from_str(&contents)?;
        info!(path = %path.display(), blocks = snapshot.blocks.len(), "Loaded snapshot document");
        Ok(snapshot)
    } else {
        let data = std::fs::read(path)?;
        load_from_bytes(&data)
    }
}

/// Load a snapshot from bytes (ZIP data).
pub fn load_from_bytes(data: &[u8]) -> Result<RegistrySnapshot> {
    let cursor = std::io::Cursor::new(data);
    let mut archive = zip::ZipArchive::new(cursor)?;

    let mut snapshot = RegistrySnapshot::new();
    let mut seen = Vec::new();
    let mut root: Option<String> = None;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let file_path = file.name().to_string();

        if file.is_dir() {
            continue;
        }

        let Some((prefix, section)) = parse_entry_path(&file_path) else {
            debug!(entry = %file_path, "Skipping unrecognised archive entry");
            continue;
        };

        // Every section must live under the same directory (or all at the root)
        match &root {
            Some(expected) if expected != prefix => {
                return Err(ExtractorError::InvalidSnapshot(format!(
                    "{} is outside the snapshot directory {:?}",
                    file_path, expected
                )));
            }
            Some(_) => {}
            None => root = Some(prefix.to_string()),
        }

        if seen.contains(&section) {
            return Err(ExtractorError::InvalidSnapshot(format!(
                "section {} appears more than once (at {})",
                section.name(),
                file_path
            )));
        }

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        snapshot.set_section(section, &contents)?;
        seen.push(section);
    }

    if seen.is_empty() {
        return Err(ExtractorError::InvalidSnapshot(
            "archive contains no registry sections".to_string(),
        ));
    }

    info!(sections = seen.len(), "Loaded snapshot archive");
    Ok(snapshot)
}

/// Load a snapshot from a directory of section files.
fn load_from_directory(path: &Path) -> Result<RegistrySnapshot> {
    let mut snapshot = RegistrySnapshot::new();
    let mut found = 0;

    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        match Section::from_file_name(&file_name) {
            Some(section) => {
                let contents = std::fs::read_to_string(entry.path())?;
                snapshot.set_section(section, &contents)?;
                found += 1;
            }
            None => debug!(file = %file_name, "Skipping unrecognised snapshot file"),
        }
    }

    if found == 0 {
        return Err(ExtractorError::InvalidSnapshot(format!(
            "no registry sections found in {}",
            path.display()
        )));
    }

    info!(path = %path.display(), sections = found, "Loaded snapshot directory");
    Ok(snapshot)
}

/// Map an archive entry to its directory prefix and section.
/// Sections sit at the archive root (empty prefix) or one directory below it.
fn parse_entry_path(file_path: &str) -> Option<(&str, Section)> {
    let parts: Vec<&str> = file_path.split('/').filter(|p| !p.is_empty()).collect();

    match parts.as_slice() {
        [file_name] => Some(("", Section::from_file_name(file_name)?)),
        [prefix, file_name] => Some((*prefix, Section::from_file_name(file_name)?)),
        _ => None,
    }
}
