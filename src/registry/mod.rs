//! Registry snapshots.
//!
//! A snapshot is the typed view of the host's registries that the
//! extractors consume. It is produced by a dump step running inside the
//! server and loaded here from a JSON file, a directory, or a ZIP archive.

pub mod block;
pub mod entries;
pub mod loader;

pub use block::{
    BehaviourProperties, BlockDefinition, BlockProperty, BlockStateDefinition, PropertyKind,
    PushReaction,
};
pub use entries::{
    EntityTypeDefinition, GameRuleDefinition, GameRuleValue, ItemDefinition, LootTableDefinition,
    SerializerDefinition,
};

use crate::error::{ExtractorError, Result};
use serde::{Deserialize, Serialize};

/// All registries of one server instance, each in registry order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySnapshot {
    pub blocks: Vec<BlockDefinition>,
    pub block_entity_types: Vec<String>,
    pub items: Vec<ItemDefinition>,
    pub entity_types: Vec<EntityTypeDefinition>,
    pub entity_data_serializers: Vec<SerializerDefinition>,
    pub game_rules: Vec<GameRuleDefinition>,
    pub menu_types: Vec<String>,
    pub loot_tables: Vec<LootTableDefinition>,
}

/// One top-level section of a snapshot, stored as `<name>.json` in
/// directory and archive snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Blocks,
    BlockEntityTypes,
    Items,
    EntityTypes,
    EntityDataSerializers,
    GameRules,
    MenuTypes,
    LootTables,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Blocks,
        Section::BlockEntityTypes,
        Section::Items,
        Section::EntityTypes,
        Section::EntityDataSerializers,
        Section::GameRules,
        Section::MenuTypes,
        Section::LootTables,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Blocks => "blocks",
            Section::BlockEntityTypes => "block_entity_types",
            Section::Items => "items",
            Section::EntityTypes => "entity_types",
            Section::EntityDataSerializers => "entity_data_serializers",
            Section::GameRules => "game_rules",
            Section::MenuTypes => "menu_types",
            Section::LootTables => "loot_tables",
        }
    }

    /// Match a section file name such as "items.json".
    pub fn from_file_name(file_name: &str) -> Option<Section> {
        let stem = file_name.strip_suffix(".json")?;
        Self::ALL.into_iter().find(|section| section.name() == stem)
    }
}

impl RegistrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one section's JSON and store it, replacing any previous value.
    pub fn set_section(&mut self, section: Section, contents: &str) -> Result<()> {
        let wrap = |e: serde_json::Error| {
            ExtractorError::InvalidSnapshot(format!("section {}: {}", section.name(), e))
        };

        match section {
            Section::Blocks => self.blocks = serde_json::from_str(contents).map_err(wrap)?,
            Section::BlockEntityTypes => {
                self.block_entity_types = serde_json::from_str(contents).map_err(wrap)?
            }
            Section::Items => self.items = serde_json::from_str(contents).map_err(wrap)?,
            Section::EntityTypes => {
                self.entity_types = serde_json::from_str(contents).map_err(wrap)?
            }
            Section::EntityDataSerializers => {
                self.entity_data_serializers = serde_json::from_str(contents).map_err(wrap)?
            }
            Section::GameRules => self.game_rules = serde_json::from_str(contents).map_err(wrap)?,
            Section::MenuTypes => self.menu_types = serde_json::from_str(contents).map_err(wrap)?,
            Section::LootTables => {
                self.loot_tables = serde_json::from_str(contents).map_err(wrap)?
            }
        }

        Ok(())
    }

    /// Number of entries in a section.
    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Blocks => self.blocks.len(),
            Section::BlockEntityTypes => self.block_entity_types.len(),
            Section::Items => self.items.len(),
            Section::EntityTypes => self.entity_types.len(),
            Section::EntityDataSerializers => self.entity_data_serializers.len(),
            Section::GameRules => self.game_rules.len(),
            Section::MenuTypes => self.menu_types.len(),
            Section::LootTables => self.loot_tables.len(),
        }
    }

    /// Total number of block states across all blocks.
    pub fn state_count(&self) -> usize {
        self.blocks.iter().map(|b| b.states.len()).sum()
    }
}
