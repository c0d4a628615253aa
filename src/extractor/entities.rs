//! Entity type and entity data serializer extraction.

use super::Extractor;
use crate::error::Result;
use crate::registry::{RegistrySnapshot, SerializerDefinition};
use crate::types::resource_path;
use serde::Serialize;
use tracing::{debug, warn};

/// Writes `entities.json`: serializer ids plus entity types, optionally
/// restricted to a set of entity names.
pub struct EntitiesExtractor {
    filter: Option<Vec<String>>,
}

/// Writes `entity_data_serializers.json`.
pub struct EntityDataSerializersExtractor;

#[derive(Serialize)]
struct EntitiesOutput<'a> {
    entity_data_serializers: Vec<&'a SerializerDefinition>,
    entity_types: Vec<EntityTypeOutput<'a>>,
}

#[derive(Serialize)]
struct EntityTypeOutput<'a> {
    id: u32,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_tracking_range: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    update_interval: Option<i32>,
}

impl EntitiesExtractor {
    /// `filter` lists entity names (with or without namespace) to keep;
    /// `None` keeps every entity type.
    pub fn new(filter: Option<Vec<String>>) -> Self {
        Self { filter }
    }

    fn accepts(&self, name: &str) -> bool {
        match &self.filter {
            Some(names) => names.iter().any(|n| resource_path(n) == name),
            None => true,
        }
    }
}

impl Extractor for EntitiesExtractor {
    fn name(&self) -> &'static str {
        "entities"
    }

    fn file_name(&self) -> &'static str {
        "entities.json"
    }

    fn extract(&self, snapshot: &RegistrySnapshot) -> Result<serde_json::Value> {
        let mut entity_types = Vec::new();

        for entity in &snapshot.entity_types {
            let name = resource_path(&entity.name);
            if !self.accepts(name) {
                continue;
            }

            if entity.client_tracking_range.is_none() || entity.update_interval.is_none() {
                warn!(entity = name, "Missing tracking info");
            }

            entity_types.push(EntityTypeOutput {
                id: entity.id,
                name,
                client_tracking_range: entity.client_tracking_range,
                update_interval: entity.update_interval,
            });
        }

        let output = EntitiesOutput {
            entity_data_serializers: sorted_serializers(snapshot),
            entity_types,
        };

        Ok(serde_json::to_value(output)?)
    }
}

impl Extractor for EntityDataSerializersExtractor {
    fn name(&self) -> &'static str {
        "entity_data_serializers"
    }

    fn file_name(&self) -> &'static str {
        "entity_data_serializers.json"
    }

    fn extract(&self, snapshot: &RegistrySnapshot) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(sorted_serializers(snapshot))?)
    }
}

/// Serializers in registration (id) order.
fn sorted_serializers(snapshot: &RegistrySnapshot) -> Vec<&SerializerDefinition> {
    let mut serializers: Vec<_> = snapshot.entity_data_serializers.iter().collect();
    // Stable sort keeps declaration order for duplicate ids
    serializers.sort_by_key(|s| s.id);
    for serializer in &serializers {
        debug!(name = %serializer.name, id = serializer.id, "Serializer");
    }
    serializers
}
