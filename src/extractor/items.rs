//! Item registry extraction.

use super::Extractor;
use crate::error::Result;
use crate::registry::RegistrySnapshot;
use crate::types::resource_path;
use serde::Serialize;

/// Writes `items.json` with every item's components and placement flags.
pub struct ItemsExtractor;

#[derive(Serialize)]
struct ItemsOutput<'a> {
    items: Vec<ItemOutput<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemOutput<'a> {
    id: u32,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_item: Option<&'a str>,
    components: &'a serde_json::Value,
    is_double: bool,
    is_scaffolding: bool,
    is_water_placable: bool,
}

impl Extractor for ItemsExtractor {
    fn name(&self) -> &'static str {
        "items"
    }

    fn file_name(&self) -> &'static str {
        "items.json"
    }

    fn extract(&self, snapshot: &RegistrySnapshot) -> Result<serde_json::Value> {
        let items = snapshot
            .items
            .iter()
            .map(|item| ItemOutput {
                id: item.id,
                name: resource_path(&item.name),
                block_item: item.block.as_deref().map(resource_path),
                components: &item.components,
                is_double: item.is_double,
                is_scaffolding: item.is_scaffolding,
                is_water_placable: item.is_water_placable,
            })
            .collect();

        Ok(serde_json::to_value(ItemsOutput { items })?)
    }
}
