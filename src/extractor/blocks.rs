//! Block registry extraction with compacted collision shapes.

use super::Extractor;
use crate::error::Result;
use crate::registry::{BehaviourProperties, BlockDefinition, PropertyKind, RegistrySnapshot};
use crate::shapes::{CompactedOwnerShapes, ShapeCompactor};
use crate::types::{resource_path, simple_enum_class_name, Shape};
use serde::Serialize;
use tracing::debug;

/// Writes `blocks.json`: the shared shape table, block entity types, and
/// every block with its behaviour, collisions and default state.
pub struct BlocksExtractor;

#[derive(Serialize)]
struct BlocksOutput<'a> {
    shapes: &'a [Shape],
    block_entity_types: Vec<&'a str>,
    blocks: Vec<BlockOutput<'a>>,
}

#[derive(Serialize)]
struct BlockOutput<'a> {
    id: u32,
    name: &'a str,
    collisions: CompactedOwnerShapes,
    behavior_properties: &'a BehaviourProperties,
    properties: Vec<Option<&'a str>>,
    default_properties: Vec<String>,
}

impl Extractor for BlocksExtractor {
    fn name(&self) -> &'static str {
        "blocks"
    }

    fn file_name(&self) -> &'static str {
        "blocks.json"
    }

    fn extract(&self, snapshot: &RegistrySnapshot) -> Result<serde_json::Value> {
        // Fresh table per run; indices are only meaningful within one file
        let mut compactor = ShapeCompactor::new();
        let mut blocks = Vec::with_capacity(snapshot.blocks.len());

        for block in &snapshot.blocks {
            let states = block.collision_shapes()?;
            let collisions = compactor.compact(&states)?;

            blocks.push(BlockOutput {
                id: block.id,
                name: resource_path(&block.name),
                collisions,
                behavior_properties: &block.behaviour,
                properties: block
                    .properties
                    .iter()
                    .map(|p| p.constant.as_deref())
                    .collect(),
                default_properties: default_properties(block)?,
            });
        }

        debug!(
            blocks = blocks.len(),
            states = snapshot.state_count(),
            shapes = compactor.table().len(),
            "Compacted collision shapes"
        );

        let output = BlocksOutput {
            shapes: compactor.table().shapes(),
            block_entity_types: snapshot
                .block_entity_types
                .iter()
                .map(|name| resource_path(name))
                .collect(),
            blocks,
        };

        Ok(serde_json::to_value(output)?)
    }
}

/// Default state values tagged with their property type,
/// e.g. "bool_false", "int_0", "enum_Axis_y".
fn default_properties(block: &BlockDefinition) -> Result<Vec<String>> {
    Ok(block
        .default_values()?
        .map(|(property, value)| prefixed_value(&property.kind, value))
        .collect())
}

fn prefixed_value(kind: &PropertyKind, value: &str) -> String {
    match kind {
        PropertyKind::Bool => format!("bool_{}", value),
        PropertyKind::Int => format!("int_{}", value),
        PropertyKind::Enum { class } => {
            format!("enum_{}_{}", simple_enum_class_name(class), value)
        }
        PropertyKind::Other => format!("unknown_{}", value),
    }
}
