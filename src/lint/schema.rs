//! JSON Schema generation for the configuration file.
//!
//! This module generates a JSON Schema (Draft-07) for `.tsc-lint.yml`,
//! enabling IDE autocomplete and validation. Each registered rule
//! contributes its own options schema.

use serde_json::{json, Map, Value};

use super::registry::RuleRegistry;

/// Generates JSON Schema for the configuration file.
pub struct SchemaGenerator<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> SchemaGenerator<'a> {
    /// Create a new schema generator for the rules in `registry`.
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Generate the complete JSON Schema.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "tsc-lint Configuration",
            "description": "Rule configuration for tsc-lint",
            "type": "object",
            "properties": {
                "rules": self.rules_schema()
            },
            "additionalProperties": false
        })
    }

    /// Generate schema for the rules map.
    fn rules_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .registry
            .iter()
            .map(|rule| {
                let schema = self.rule_setting_schema(rule.description(), rule.options_schema());
                (rule.id().to_string(), schema)
            })
            .collect();

        json!({
            "type": "object",
            "description": "Per-rule severity and options",
            "properties": properties,
            "additionalProperties": false
        })
    }

    /// A rule is configured by a level, or a level followed by its options.
    fn rule_setting_schema(&self, description: &str, options: Value) -> Value {
        let mut items = vec![self.level_schema()];
        if let Value::Array(option_items) = options {
            items.extend(option_items);
        }

        json!({
            "description": description,
            "oneOf": [
                self.level_schema(),
                {
                    "type": "array",
                    "items": items,
                    "minItems": 1
                }
            ]
        })
    }

    /// Generate schema for a rule level.
    fn level_schema(&self) -> Value {
        json!({
            "oneOf": [
                { "type": "string", "enum": ["off", "warn", "error"] },
                { "type": "integer", "enum": [0, 1, 2] }
            ]
        })
    }
}
