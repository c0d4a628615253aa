//! Axis-aligned collision boxes.

use crate::error::{ExtractorError, Result};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An axis-aligned box, as returned by a block state's collision shape.
///
/// Equality and hashing compare the exact bit patterns of all six
/// coordinates, so `0.0` and `-0.0` are distinct shapes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shape {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

/// The collision geometry of one block state, in emission order.
pub type ShapeList = Vec<Shape>;

impl Shape {
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    /// A box spanning one whole block.
    pub fn full_block() -> Self {
        Self::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0])
    }

    /// Reject boxes that cannot come from a real collision shape.
    pub fn validate(&self) -> Result<()> {
        for axis in 0..3 {
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if !lo.is_finite() || !hi.is_finite() {
                return Err(ExtractorError::InvalidInput(format!(
                    "shape {:?} has a non-finite coordinate",
                    self
                )));
            }
            if lo > hi {
                return Err(ExtractorError::InvalidInput(format!(
                    "shape {:?} has min > max on axis {}",
                    self, axis
                )));
            }
        }
        Ok(())
    }

    fn bits(&self) -> [u64; 6] {
        [
            self.min[0].to_bits(),
            self.min[1].to_bits(),
            self.min[2].to_bits(),
            self.max[0].to_bits(),
            self.max[1].to_bits(),
            self.max[2].to_bits(),
        ]
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}
