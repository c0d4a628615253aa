//! Non-block registry entries.

use serde::{Deserialize, Serialize};

/// One entry of the item registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub class: String,
    /// Block placed by this item, for block items.
    #[serde(default)]
    pub block: Option<String>,
    /// Default data components, already encoded by the host codec.
    #[serde(default)]
    pub components: serde_json::Value,
    #[serde(default)]
    pub is_double: bool,
    #[serde(default)]
    pub is_scaffolding: bool,
    #[serde(default)]
    pub is_water_placable: bool,
}

/// One entry of the entity type registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityTypeDefinition {
    pub id: u32,
    pub name: String,
    /// Missing when the host could not read tracking info.
    #[serde(default)]
    pub client_tracking_range: Option<i32>,
    #[serde(default)]
    pub update_interval: Option<i32>,
}

/// A registered entity data serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializerDefinition {
    /// Constant name, e.g. "BYTE".
    pub name: String,
    /// Serialized network id.
    pub id: i32,
}

/// One entry of the game rule registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRuleDefinition {
    pub name: String,
    pub category: String,
    pub value: GameRuleValue,
}

/// Value type and default of a game rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameRuleValue {
    Bool {
        default: bool,
    },
    Int {
        default: i32,
        #[serde(default = "int_min")]
        min: i32,
        #[serde(default = "int_max")]
        max: i32,
    },
    /// Rule types without a dedicated argument kind.
    Other {
        type_name: String,
        default: String,
    },
}

fn int_min() -> i32 {
    i32::MIN
}

fn int_max() -> i32 {
    i32::MAX
}

/// One loot table, encoded by the host or carrying the encoder error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootTableDefinition {
    /// Full identifier, e.g. "minecraft:chests/simple_dungeon".
    pub name: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}
