//! Game rule extraction.

use super::Extractor;
use crate::error::Result;
use crate::registry::{GameRuleValue, RegistrySnapshot};
use serde::Serialize;
use serde_json::Value;

/// Writes `game_rules.json` with each rule's type, default and bounds.
pub struct GameRulesExtractor;

#[derive(Serialize)]
struct GameRulesOutput<'a> {
    game_rules: Vec<GameRuleOutput<'a>>,
}

#[derive(Serialize)]
struct GameRuleOutput<'a> {
    name: &'a str,
    category: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<i32>,
}

impl Extractor for GameRulesExtractor {
    fn name(&self) -> &'static str {
        "game_rules"
    }

    fn file_name(&self) -> &'static str {
        "game_rules.json"
    }

    fn extract(&self, snapshot: &RegistrySnapshot) -> Result<Value> {
        let game_rules = snapshot
            .game_rules
            .iter()
            .map(|rule| {
                let (kind, default, min, max) = match &rule.value {
                    GameRuleValue::Bool { default } => ("bool", Value::from(*default), None, None),
                    GameRuleValue::Int { default, min, max } => (
                        "int",
                        Value::from(*default),
                        // Unbounded sides are left out
                        Some(*min).filter(|&v| v != i32::MIN),
                        Some(*max).filter(|&v| v != i32::MAX),
                    ),
                    GameRuleValue::Other { type_name, default } => {
                        (type_name.as_str(), Value::from(default.as_str()), None, None)
                    }
                };

                GameRuleOutput {
                    name: &rule.name,
                    category: &rule.category,
                    kind,
                    default,
                    min,
                    max,
                }
            })
            .collect();

        Ok(serde_json::to_value(GameRulesOutput { game_rules })?)
    }
}
