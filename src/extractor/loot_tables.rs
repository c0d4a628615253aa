//! Loot table extraction.

use super::Extractor;
use crate::error::{ExtractorError, Result};
use crate::registry::RegistrySnapshot;
use serde::Serialize;
use tracing::warn;

/// Writes `loot_tables.json`. Tables the host failed to encode are kept
/// with their error message instead of data.
pub struct LootTablesExtractor;

#[derive(Serialize)]
struct LootTablesOutput<'a> {
    loot_tables: Vec<LootTableOutput<'a>>,
}

#[derive(Serialize)]
struct LootTableOutput<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Extractor for LootTablesExtractor {
    fn name(&self) -> &'static str {
        "loot_tables"
    }

    fn file_name(&self) -> &'static str {
        "loot_tables.json"
    }

    fn extract(&self, snapshot: &RegistrySnapshot) -> Result<serde_json::Value> {
        let mut loot_tables = Vec::with_capacity(snapshot.loot_tables.len());

        for table in &snapshot.loot_tables {
            let entry = match (&table.data, &table.error) {
                (Some(data), _) => LootTableOutput {
                    name: &table.name,
                    data: Some(data),
                    error: None,
                },
                (None, Some(error)) => {
                    warn!(table = %table.name, error = %error, "Failed to encode loot table");
                    LootTableOutput {
                        name: &table.name,
                        data: None,
                        error: Some(error),
                    }
                }
                (None, None) => {
                    return Err(ExtractorError::InvalidInput(format!(
                        "loot table {} has neither data nor an error",
                        table.name
                    )))
                }
            };
            loot_tables.push(entry);
        }

        Ok(serde_json::to_value(LootTablesOutput { loot_tables })?)
    }
}
