//! Registry extractors.
//!
//! Each extractor turns part of a [`RegistrySnapshot`] into one JSON
//! document, written by the runner as `file_name()` in the output directory.

pub mod blocks;
pub mod items;
pub mod entities;
pub mod game_rules;
pub mod loot_tables;
pub mod listings;

pub use blocks::BlocksExtractor;
pub use entities::{EntitiesExtractor, EntityDataSerializersExtractor};
pub use game_rules::GameRulesExtractor;
pub use items::ItemsExtractor;
pub use listings::{BlockEntitiesExtractor, ClassesExtractor, MenuTypesExtractor};
pub use loot_tables::LootTablesExtractor;

use crate::error::{ExtractorError, Result};
use crate::registry::RegistrySnapshot;
use crate::runner::ExtractorConfig;
use std::fmt;
use std::str::FromStr;

/// Produces one output document from a snapshot.
pub trait Extractor {
    /// Short name used in logs and on the command line.
    fn name(&self) -> &'static str;

    /// Output file name, e.g. "blocks.json".
    fn file_name(&self) -> &'static str;

    fn extract(&self, snapshot: &RegistrySnapshot) -> Result<serde_json::Value>;
}

/// The built-in extractors, in default run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    Blocks,
    Items,
    Entities,
    EntityDataSerializers,
    GameRules,
    MenuTypes,
    BlockEntities,
    LootTables,
    Classes,
}

impl ExtractorKind {
    pub const ALL: [ExtractorKind; 9] = [
        ExtractorKind::Blocks,
        ExtractorKind::Items,
        ExtractorKind::Entities,
        ExtractorKind::EntityDataSerializers,
        ExtractorKind::GameRules,
        ExtractorKind::MenuTypes,
        ExtractorKind::BlockEntities,
        ExtractorKind::LootTables,
        ExtractorKind::Classes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExtractorKind::Blocks => "blocks",
            ExtractorKind::Items => "items",
            ExtractorKind::Entities => "entities",
            ExtractorKind::EntityDataSerializers => "entity_data_serializers",
            ExtractorKind::GameRules => "game_rules",
            ExtractorKind::MenuTypes => "menu_types",
            ExtractorKind::BlockEntities => "block_entities",
            ExtractorKind::LootTables => "loot_tables",
            ExtractorKind::Classes => "classes",
        }
    }

    /// Build the extractor for this kind.
    pub fn create(&self, config: &ExtractorConfig) -> Box<dyn Extractor> {
        match self {
            ExtractorKind::Blocks => Box::new(BlocksExtractor),
            ExtractorKind::Items => Box::new(ItemsExtractor),
            ExtractorKind::Entities => {
                Box::new(EntitiesExtractor::new(config.entity_filter.clone()))
            }
            ExtractorKind::EntityDataSerializers => Box::new(EntityDataSerializersExtractor),
            ExtractorKind::GameRules => Box::new(GameRulesExtractor),
            ExtractorKind::MenuTypes => Box::new(MenuTypesExtractor),
            ExtractorKind::BlockEntities => Box::new(BlockEntitiesExtractor),
            ExtractorKind::LootTables => Box::new(LootTablesExtractor),
            ExtractorKind::Classes => Box::new(ClassesExtractor),
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtractorKind {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ExtractorError::UnknownExtractor(s.to_string()))
    }
}
