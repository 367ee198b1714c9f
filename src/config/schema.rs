//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `.tsc-lint.yml` file format:
//!
//! ```yaml
//! rules:
//!   all: [error, { excludeErrorCodes: [2307] }]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lint::Severity;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Per-rule settings keyed by rule ID.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleSetting>,
}

impl LintConfig {
    /// Settings for a rule, if configured.
    pub fn rule(&self, id: &str) -> Option<&RuleSetting> {
        self.rules.get(id)
    }

    /// Replace the options of a rule, keeping its configured level.
    pub fn set_rule_options(&mut self, id: &str, options: Value) {
        self.rules.entry(id.to_string()).or_default().options = Some(options);
    }
}

/// How severely a rule reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "LevelRepr")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

impl RuleLevel {
    /// The severity reports carry, or `None` when the rule is off.
    pub fn severity(self) -> Option<Severity> {
        match self {
            RuleLevel::Off => None,
            RuleLevel::Warn => Some(Severity::Warning),
            RuleLevel::Error => Some(Severity::Error),
        }
    }
}

/// Levels may be written as names or as 0/1/2.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Code(u8),
    Name(String),
}

impl TryFrom<LevelRepr> for RuleLevel {
    type Error = String;

    fn try_from(repr: LevelRepr) -> Result<Self, String> {
        match repr {
            LevelRepr::Code(0) => Ok(Self::Off),
            LevelRepr::Code(1) => Ok(Self::Warn),
            LevelRepr::Code(2) => Ok(Self::Error),
            LevelRepr::Name(name) => match name.as_str() {
                "off" => Ok(Self::Off),
                "warn" => Ok(Self::Warn),
                "error" => Ok(Self::Error),
                _ => Err(format!(
                    "unknown rule level '{}', expected off, warn or error",
                    name
                )),
            },
            LevelRepr::Code(n) => Err(format!("unknown rule level {}, expected 0, 1 or 2", n)),
        }
    }
}

/// Configuration of one rule.
///
/// Written either as a bare level (`all: warn`) or as a level followed by
/// the rule options (`all: [error, { includeErrorCodes: [2322] }]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SettingRepr", into = "SettingRepr")]
pub struct RuleSetting {
    /// Configured level; `None` means the rule's default severity.
    pub level: Option<RuleLevel>,
    /// Rule options; `None` means the rule's defaults.
    pub options: Option<Value>,
}

impl RuleSetting {
    /// A setting with only a level.
    pub fn level(level: RuleLevel) -> Self {
        Self {
            level: Some(level),
            options: None,
        }
    }

    /// A setting with a level and options.
    pub fn with_options(level: RuleLevel, options: Value) -> Self {
        Self {
            level: Some(level),
            options: Some(options),
        }
    }

    /// Severity for a rule whose default is `default`.
    pub fn severity(&self, default: Severity) -> Option<Severity> {
        match self.level {
            Some(level) => level.severity(),
            None => Some(default),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SettingRepr {
    Level(RuleLevel),
    LevelOnly((RuleLevel,)),
    WithOptions(RuleLevel, Value),
    OptionsOnly(BTreeMap<String, Value>),
}

impl From<SettingRepr> for RuleSetting {
    fn from(repr: SettingRepr) -> Self {
        match repr {
            SettingRepr::Level(level) | SettingRepr::LevelOnly((level,)) => Self::level(level),
            SettingRepr::WithOptions(level, options) => Self::with_options(level, options),
            SettingRepr::OptionsOnly(options) => Self {
                level: None,
                options: Some(Value::Object(options.into_iter().collect())),
            },
        }
    }
}

impl From<RuleSetting> for SettingRepr {
    fn from(setting: RuleSetting) -> Self {
        match (setting.level, setting.options) {
            (Some(level), None) => SettingRepr::Level(level),
            (Some(level), Some(options)) => SettingRepr::WithOptions(level, options),
            (None, Some(Value::Object(map))) => SettingRepr::OptionsOnly(map.into_iter().collect()),
            (None, Some(options)) => SettingRepr::WithOptions(RuleLevel::Warn, options),
            (None, None) => SettingRepr::OptionsOnly(BTreeMap::new()),
        }
    }
}
