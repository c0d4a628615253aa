//! Block definitions as exposed by the host.

use crate::error::{ExtractorError, Result};
use crate::types::{Shape, ShapeList};
use serde::{Deserialize, Serialize};

/// One entry of the block registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDefinition {
    /// Numeric registry id.
    pub id: u32,
    /// Resource location, e.g. "minecraft:oak_slab".
    pub name: String,
    /// Simple name of the implementing class, e.g. "SlabBlock".
    #[serde(default)]
    pub class: String,
    pub behaviour: BehaviourProperties,
    /// State properties in definition order.
    #[serde(default)]
    pub properties: Vec<BlockProperty>,
    /// Raw values of the default state, parallel to `properties`.
    #[serde(default)]
    pub default_state: Vec<String>,
    /// Every possible state in state-id order.
    #[serde(default)]
    pub states: Vec<BlockStateDefinition>,
}

impl BlockDefinition {
    /// Collision shapes of every state, checked for completeness.
    pub fn collision_shapes(&self) -> Result<Vec<&[Shape]>> {
        self.states
            .iter()
            .enumerate()
            .map(|(offset, state)| {
                let shapes = state.collision_shapes.as_deref().ok_or_else(|| {
                    ExtractorError::InvalidInput(format!(
                        "block {} state {} has no collision shape data",
                        self.name, offset
                    ))
                })?;
                for shape in shapes {
                    shape.validate().map_err(|e| {
                        ExtractorError::InvalidInput(format!(
                            "block {} state {}: {}",
                            self.name, offset, e
                        ))
                    })?;
                }
                Ok(shapes)
            })
            .collect()
    }

    /// Pair each property with its default value.
    pub fn default_values(&self) -> Result<impl Iterator<Item = (&BlockProperty, &str)> + '_> {
        if self.default_state.len() != self.properties.len() {
            return Err(ExtractorError::InvalidInput(format!(
                "block {} has {} properties but {} default values",
                self.name,
                self.properties.len(),
                self.default_state.len()
            )));
        }

        Ok(self
            .properties
            .iter()
            .zip(self.default_state.iter().map(String::as_str)))
    }
}

/// A single block state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockStateDefinition {
    /// Collision boxes against an empty world at the origin.
    #[serde(default)]
    pub collision_shapes: Option<ShapeList>,
}

impl BlockStateDefinition {
    pub fn with_shapes(shapes: ShapeList) -> Self {
        Self {
            collision_shapes: Some(shapes),
        }
    }
}

/// The behaviour settings a block was registered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviourProperties {
    pub has_collision: bool,
    pub can_occlude: bool,
    pub explosion_resistance: f64,
    pub is_randomly_ticking: bool,
    pub force_solid_off: bool,
    pub force_solid_on: bool,
    pub push_reaction: PushReaction,
    pub friction: f64,
    pub speed_factor: f64,
    pub jump_factor: f64,
    pub dynamic_shape: bool,
    pub destroy_time: f64,
    pub ignited_by_lava: bool,
    pub liquid: bool,
    pub is_air: bool,
    pub is_redstone_conductor: bool,
    pub is_suffocating: bool,
    pub requires_correct_tool_for_drops: bool,
    /// Note block instrument constant, e.g. "HARP".
    pub instrument: String,
    pub replaceable: bool,
}

impl Default for BehaviourProperties {
    fn default() -> Self {
        Self {
            has_collision: true,
            can_occlude: true,
            explosion_resistance: 0.0,
            is_randomly_ticking: false,
            force_solid_off: false,
            force_solid_on: false,
            push_reaction: PushReaction::Normal,
            friction: 0.6,
            speed_factor: 1.0,
            jump_factor: 1.0,
            dynamic_shape: false,
            destroy_time: 0.0,
            ignited_by_lava: false,
            liquid: false,
            is_air: false,
            is_redstone_conductor: true,
            is_suffocating: true,
            requires_correct_tool_for_drops: false,
            instrument: "HARP".to_string(),
            replaceable: false,
        }
    }
}

/// How a block reacts to pistons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PushReaction {
    Normal,
    Destroy,
    Block,
    Ignore,
    PushOnly,
}

/// A block state property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockProperty {
    /// Property name as used in state strings, e.g. "facing".
    pub name: String,
    /// Name of the shared property constant, e.g. "HORIZONTAL_FACING".
    #[serde(default)]
    pub constant: Option<String>,
    #[serde(flatten)]
    pub kind: PropertyKind,
}

/// The value type of a [`BlockProperty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyKind {
    Bool,
    Int,
    /// Enum property; `class` is the JVM class name of its values.
    Enum { class: String },
    Other,
}
