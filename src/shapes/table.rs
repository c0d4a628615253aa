//! Run-scoped interning table for collision boxes.

use crate::error::{ExtractorError, Result};
use crate::types::{Shape, ShapeList};
use std::collections::HashMap;

/// Maps every distinct [`Shape`] seen during a run to a dense index.
///
/// Indices are assigned in first-seen order starting at 0 and never change
/// for the lifetime of the table. The emitted `shapes` array is this table
/// read out in index order.
#[derive(Debug, Clone, Default)]
pub struct ShapeTable {
    shapes: Vec<Shape>,
    indices: HashMap<Shape, u32>,
}

impl ShapeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index of `shape`, inserting it at the end if unseen.
    pub fn intern(&mut self, shape: Shape) -> Result<u32> {
        if let Some(&index) = self.indices.get(&shape) {
            return Ok(index);
        }

        let index = next_index(self.shapes.len())?;
        self.shapes.push(shape);
        self.indices.insert(shape, index);
        Ok(index)
    }

    /// Intern each shape of a list, preserving order.
    pub fn encode(&mut self, shapes: &[Shape]) -> Result<Vec<u32>> {
        shapes.iter().map(|shape| self.intern(*shape)).collect()
    }

    /// Look up the shapes behind an index list.
    pub fn resolve(&self, indices: &[u32]) -> Result<ShapeList> {
        indices
            .iter()
            .map(|&index| {
                self.get(index).copied().ok_or_else(|| {
                    ExtractorError::InvariantViolation(format!(
                        "shape index {} is outside the table ({} entries)",
                        index,
                        self.len()
                    ))
                })
            })
            .collect()
    }

    pub fn get(&self, index: u32) -> Option<&Shape> {
        self.shapes.get(index as usize)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// All interned shapes in index order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

/// Index for a table that currently holds `len` shapes.
fn next_index(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        ExtractorError::InvariantViolation(format!(
            "shape table is full ({} entries)",
            len
        ))
    })
}
