//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, and iterating over them.

use std::collections::BTreeMap;

use super::rule::{LintRule, RuleId};
use super::rules::TypeScriptErrorsRule;

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: BTreeMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TypeScriptErrorsRule));
        registry
    }

    /// Register a lint rule, replacing any rule with the same ID.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules, ordered by ID.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::lint::{RuleContext, Severity};

    struct MockRule {
        id: RuleId,
    }

    impl LintRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            "Mock Rule"
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn messages(&self) -> &'static [(&'static str, &'static str)] {
            &[]
        }
        fn check(&self, _ctx: &mut RuleContext<'_>) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        let rule = MockRule {
            id: RuleId::new("mock"),
        };

        registry.register(Box::new(rule));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registry_iteration_is_ordered() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("rule2"),
        }));
        registry.register(Box::new(MockRule {
            id: RuleId::new("rule1"),
        }));

        let ids: Vec<_> = registry.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![RuleId::new("rule1"), RuleId::new("rule2")]);
    }

    #[test]
    fn registering_same_id_replaces() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("dup"),
        }));
        registry.register(Box::new(MockRule {
            id: RuleId::new("dup"),
        }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_default_is_empty() {
        let registry = RuleRegistry::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_with_builtins_has_typescript_rule() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&RuleId::new("all")).is_some());
    }
}
