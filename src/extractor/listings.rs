//! Plain registry listings: menu types, block entity types and classes.

use super::Extractor;
use crate::error::Result;
use crate::registry::RegistrySnapshot;
use crate::types::resource_path;
use serde::Serialize;
use serde_json::json;

/// Writes `menutypes.json`, a bare array of menu type names.
pub struct MenuTypesExtractor;

/// Writes `block_entities.json`.
pub struct BlockEntitiesExtractor;

/// Writes `classes.json`, mapping blocks and items to implementation classes.
pub struct ClassesExtractor;

impl Extractor for MenuTypesExtractor {
    fn name(&self) -> &'static str {
        "menu_types"
    }

    fn file_name(&self) -> &'static str {
        "menutypes.json"
    }

    fn extract(&self, snapshot: &RegistrySnapshot) -> Result<serde_json::Value> {
        Ok(json!(paths(&snapshot.menu_types)))
    }
}

impl Extractor for BlockEntitiesExtractor {
    fn name(&self) -> &'static str {
        "block_entities"
    }

    fn file_name(&self) -> &'static str {
        "block_entities.json"
    }

    fn extract(&self, snapshot: &RegistrySnapshot) -> Result<serde_json::Value> {
        Ok(json!({ "block_entity_types": paths(&snapshot.block_entity_types) }))
    }
}

#[derive(Serialize)]
struct ClassesOutput<'a> {
    blocks: Vec<ClassEntry<'a>>,
    items: Vec<ClassEntry<'a>>,
}

#[derive(Serialize)]
struct ClassEntry<'a> {
    name: &'a str,
    class: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    block: Option<&'a str>,
}

impl Extractor for ClassesExtractor {
    fn name(&self) -> &'static str {
        "classes"
    }

    fn file_name(&self) -> &'static str {
        "classes.json"
    }

    fn extract(&self, snapshot: &RegistrySnapshot) -> Result<serde_json::Value> {
        let blocks = snapshot
            .blocks
            .iter()
            .map(|block| ClassEntry {
                name: resource_path(&block.name),
                class: &block.class,
                block: None,
            })
            .collect();

        let items = snapshot
            .items
            .iter()
            .map(|item| ClassEntry {
                name: resource_path(&item.name),
                class: &item.class,
                block: item.block.as_deref().map(resource_path),
            })
            .collect();

        Ok(serde_json::to_value(ClassesOutput { blocks, items })?)
    }
}

fn paths(names: &[String]) -> Vec<&str> {
    names.iter().map(|name| resource_path(name)).collect()
}
