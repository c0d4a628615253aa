//! Collision shape deduplication.
//!
//! Every block state carries a list of axis-aligned boxes. Most states of a
//! block share the same list, so each block stores one default list plus
//! sparse per-state overwrites, with all boxes pooled in one shared table.

pub mod table;
pub mod compactor;

pub use table::ShapeTable;
pub use compactor::{CompactedOwnerShapes, Overwrite, ShapeCompactor};
