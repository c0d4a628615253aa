//! # Steel Extractor
//!
//! Turns a snapshot of a Minecraft server's registries into JSON data files
//! for server reimplementations.
//!
//! ## Overview
//!
//! A dump step inside the running server writes a registry snapshot (blocks
//! with their per-state collision boxes, items, entity types, game rules,
//! loot tables and more). This library loads that snapshot and runs a set of
//! extractors over it, writing one JSON file per extractor.
//!
//! Collision shapes are deduplicated: every distinct box is stored once in a
//! shared table, and each block stores its most common shape list plus
//! overwrites for the states that differ. See [`shapes`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use steel_extractor::{load_snapshot, ExtractionRun};
//!
//! let snapshot = load_snapshot("path/to/snapshot.zip")?;
//! let summary = ExtractionRun::new(snapshot).run("steel_extractor_output")?;
//! println!("wrote {} files", summary.written.len());
//! ```
//!
//! ## Using the compactor directly
//!
//! ```ignore
//! use steel_extractor::{Shape, ShapeCompactor};
//!
//! let mut compactor = ShapeCompactor::new();
//! let slab = compactor.compact(&[vec![Shape::full_block()], vec![]])?;
//! let table = compactor.into_table();
//! ```

pub mod error;
pub mod types;
pub mod shapes;
pub mod registry;
pub mod extractor;
pub mod runner;

// Re-export main types for convenience
pub use error::{ExtractorError, Result};
pub use types::{Shape, ShapeList};
pub use shapes::{CompactedOwnerShapes, Overwrite, ShapeCompactor, ShapeTable};
pub use registry::{RegistrySnapshot, Section};
pub use extractor::{Extractor, ExtractorKind};
pub use runner::{ExtractionRun, ExtractorConfig, RunSummary};

/// Load a registry snapshot from a file path (JSON file, directory or ZIP).
pub fn load_snapshot<P: AsRef<std::path::Path>>(path: P) -> Result<RegistrySnapshot> {
    registry::loader::load_from_path(path)
}

/// Load a registry snapshot from ZIP bytes.
pub fn load_snapshot_from_bytes(data: &[u8]) -> Result<RegistrySnapshot> {
    registry::loader::load_from_bytes(data)
}
