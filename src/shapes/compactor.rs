//! Default/overwrite compaction of per-state collision shapes.

use super::table::ShapeTable;
use crate::error::{ExtractorError, Result};
use crate::types::{Shape, ShapeList};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Compacted collision shapes of one block.
///
/// `default` holds the shape indices shared by most states; `overwrites`
/// lists only the states that differ from it, in state order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactedOwnerShapes {
    pub default: Vec<u32>,
    pub overwrites: Vec<Overwrite>,
}

/// A state whose collision shapes differ from its block's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overwrite {
    /// Zero-based position of the state within its block.
    pub offset: usize,
    /// Shape table indices for this state.
    #[serde(rename = "collision_shapes")]
    pub shapes: Vec<u32>,
}

impl CompactedOwnerShapes {
    /// Shape indices of the state at `offset`.
    pub fn state_indices(&self, offset: usize) -> &[u32] {
        // Overwrites are emitted in ascending offset order
        match self
            .overwrites
            .binary_search_by_key(&offset, |overwrite| overwrite.offset)
        {
            Ok(pos) => &self.overwrites[pos].shapes,
            Err(_) => &self.default,
        }
    }

    /// Expand back into one shape list per state.
    pub fn decode(&self, table: &ShapeTable, state_count: usize) -> Result<Vec<ShapeList>> {
        let default = table.resolve(&self.default)?;
        let mut states = vec![default; state_count];

        for overwrite in &self.overwrites {
            let slot = states.get_mut(overwrite.offset).ok_or_else(|| {
                ExtractorError::InvariantViolation(format!(
                    "overwrite offset {} exceeds state count {}",
                    overwrite.offset, state_count
                ))
            })?;
            *slot = table.resolve(&overwrite.shapes)?;
        }

        Ok(states)
    }
}

/// A distinct shape list seen among one block's states.
struct ShapeGroup<'a> {
    shapes: &'a [Shape],
    indices: Vec<u32>,
    count: usize,
}

/// Deduplicates collision shapes across every block of a run.
///
/// Owns the run's [`ShapeTable`]; each call to [`compact`](Self::compact)
/// interns new shapes into it.
#[derive(Debug, Default)]
pub struct ShapeCompactor {
    table: ShapeTable,
}

impl ShapeCompactor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &ShapeTable {
        &self.table
    }

    pub fn into_table(self) -> ShapeTable {
        self.table
    }

    /// Compact the shape lists of one block's states, given in state order.
    ///
    /// The default is the most frequent list; on a tie the list seen first
    /// wins. Inputs must already be validated.
    pub fn compact<S: AsRef<[Shape]>>(&mut self, states: &[S]) -> Result<CompactedOwnerShapes> {
        if states.is_empty() {
            return Ok(CompactedOwnerShapes::default());
        }

        let mut groups: Vec<ShapeGroup<'_>> = Vec::new();
        let mut lookup: HashMap<&[Shape], usize> = HashMap::new();

        for state in states {
            let shapes = state.as_ref();
            match lookup.get(shapes) {
                Some(&slot) => groups[slot].count += 1,
                None => {
                    lookup.insert(shapes, groups.len());
                    groups.push(ShapeGroup {
                        shapes,
                        indices: self.table.encode(shapes)?,
                        count: 1,
                    });
                }
            }
        }

        // Strict comparison keeps the earliest group on ties
        let mut default_slot = 0;
        for (slot, group) in groups.iter().enumerate().skip(1) {
            if group.count > groups[default_slot].count {
                default_slot = slot;
            }
        }
        let default_shapes = groups[default_slot].shapes;

        let mut overwrites = Vec::new();
        for (offset, state) in states.iter().enumerate() {
            let shapes = state.as_ref();
            if shapes == default_shapes {
                continue;
            }

            let slot = lookup.get(shapes).copied().ok_or_else(|| {
                ExtractorError::InvariantViolation(format!(
                    "no encoded shape list for state offset {}",
                    offset
                ))
            })?;
            overwrites.push(Overwrite {
                offset,
                shapes: groups[slot].indices.clone(),
            });
        }

        Ok(CompactedOwnerShapes {
            default: std::mem::take(&mut groups[default_slot].indices),
            overwrites,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Shape {
        Shape::full_block()
    }

    fn bottom_slab() -> Shape {
        Shape::new([0.0, 0.0, 0.0], [1.0, 0.5, 1.0])
    }

    fn top_slab() -> Shape {
        Shape::new([0.0, 0.5, 0.0], [1.0, 1.0, 1.0])
    }

    fn post() -> Shape {
        Shape::new([0.375, 0.0, 0.375], [0.625, 1.5, 0.625])
    }

    #[test]
    fn test_majority_default() {
        let mut compactor = ShapeCompactor::new();
        let a = vec![full()];
        let b = vec![bottom_slab()];

        let out = compactor.compact(&[a.clone(), a, b]).unwrap();

        assert_eq!(out.default, vec![0]);
        assert_eq!(
            out.overwrites,
            vec![Overwrite {
                offset: 2,
                shapes: vec![1]
            }]
        );
    }

    #[test]
    fn test_tie_prefers_first_seen() {
        let mut compactor = ShapeCompactor::new();
        let out = compactor
            .compact(&[vec![top_slab()], vec![bottom_slab()]])
            .unwrap();

        assert_eq!(out.default, vec![0]);
        assert_eq!(out.overwrites.len(), 1);
        assert_eq!(out.overwrites[0].offset, 1);
        assert_eq!(out.overwrites[0].shapes, vec![1]);
    }

    #[test]
    fn test_tie_with_later_majority() {
        // B appears first but A overtakes it
        let mut compactor = ShapeCompactor::new();
        let a = vec![full()];
        let b = vec![post()];
        let out = compactor
            .compact(&[b.clone(), a.clone(), a.clone(), b.clone(), a])
            .unwrap();

        assert_eq!(out.default, vec![1]);
        let offsets: Vec<usize> = out.overwrites.iter().map(|o| o.offset).collect();
        assert_eq!(offsets, vec![0, 3]);
    }

    #[test]
    fn test_no_states() {
        let mut compactor = ShapeCompactor::new();
        let out = compactor.compact::<ShapeList>(&[]).unwrap();

        assert!(out.default.is_empty());
        assert!(out.overwrites.is_empty());
        assert!(compactor.table().is_empty());
    }

    #[test]
    fn test_empty_shape_list_can_be_default() {
        let mut compactor = ShapeCompactor::new();
        let air: ShapeList = Vec::new();
        let out = compactor
            .compact(&[air.clone(), air, vec![full()]])
            .unwrap();

        assert!(out.default.is_empty());
        assert_eq!(out.overwrites[0].offset, 2);
        assert_eq!(out.overwrites[0].shapes, vec![0]);
    }

    #[test]
    fn test_shape_order_matters() {
        let mut compactor = ShapeCompactor::new();
        let out = compactor
            .compact(&[
                vec![bottom_slab(), post()],
                vec![post(), bottom_slab()],
                vec![bottom_slab(), post()],
            ])
            .unwrap();

        assert_eq!(out.default, vec![0, 1]);
        assert_eq!(out.overwrites.len(), 1);
        assert_eq!(out.overwrites[0].shapes, vec![1, 0]);
        assert_eq!(compactor.table().len(), 2);
    }

    #[test]
    fn test_table_is_shared_across_blocks() {
        let mut compactor = ShapeCompactor::new();
        compactor.compact(&[vec![full()]]).unwrap();
        let out = compactor
            .compact(&[vec![bottom_slab()], vec![full()], vec![bottom_slab()]])
            .unwrap();

        assert_eq!(out.default, vec![1]);
        assert_eq!(out.overwrites[0].shapes, vec![0]);
        assert_eq!(compactor.table().shapes(), &[full(), bottom_slab()]);
    }

    #[test]
    fn test_state_indices() {
        let mut compactor = ShapeCompactor::new();
        let out = compactor
            .compact(&[vec![full()], vec![post()], vec![full()], vec![bottom_slab()]])
            .unwrap();

        assert_eq!(out.state_indices(0), &[0]);
        assert_eq!(out.state_indices(1), &[1]);
        assert_eq!(out.state_indices(2), &[0]);
        assert_eq!(out.state_indices(3), &[2]);
    }

    #[test]
    fn test_round_trip_across_blocks() {
        let blocks: Vec<Vec<ShapeList>> = vec![
            vec![vec![full()]],
            vec![
                vec![bottom_slab()],
                vec![top_slab()],
                vec![full()],
                vec![bottom_slab()],
            ],
            vec![vec![], vec![post(), full()], vec![]],
            vec![],
        ];

        let mut compactor = ShapeCompactor::new();
        let compacted: Vec<CompactedOwnerShapes> = blocks
            .iter()
            .map(|states| compactor.compact(states).unwrap())
            .collect();
        let table = compactor.into_table();

        for (states, out) in blocks.iter().zip(&compacted) {
            let all_indices = out
                .default
                .iter()
                .chain(out.overwrites.iter().flat_map(|o| o.shapes.iter()));
            for &index in all_indices {
                assert!((index as usize) < table.len());
            }

            assert_eq!(&out.decode(&table, states.len()).unwrap(), states);
        }
    }

    #[test]
    fn test_decode_rejects_bad_offset() {
        let mut table = ShapeTable::new();
        table.intern(full()).unwrap();
        let out = CompactedOwnerShapes {
            default: vec![0],
            overwrites: vec![Overwrite {
                offset: 5,
                shapes: vec![0],
            }],
        };

        assert!(matches!(
            out.decode(&table, 2),
            Err(ExtractorError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_json_layout() {
        let out = CompactedOwnerShapes {
            default: vec![0],
            overwrites: vec![Overwrite {
                offset: 3,
                shapes: vec![1, 2],
            }],
        };

        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "default": [0],
                "overwrites": [{ "offset": 3, "collision_shapes": [1, 2] }]
            })
        );
    }
}
