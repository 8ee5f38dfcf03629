//! Rule set registry for load-time selection.
//!
//! The `RuleSetRegistry` maps rule set names to shared instances. A
//! loader registers whatever rule sets it has (built-in or supplied from
//! outside) and the controller is built from one by name, so a new game
//! can be swapped in without touching the engine.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{ConnectFour, Othello, PushUpFour};
use crate::core::GameError;
use crate::rules::RuleSet;

/// Registry of rule sets keyed by `RuleSet::name`.
///
/// ## Example
///
/// ```
/// use npmm::games::RuleSetRegistry;
///
/// let registry = RuleSetRegistry::with_builtin();
/// let rules = registry.get("push_up_four").unwrap();
/// assert_eq!(rules.name(), "push_up_four");
/// assert!(registry.get("chess").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleSetRegistry {
    rule_sets: FxHashMap<String, Arc<dyn RuleSet>>,
}

impl RuleSetRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in rule sets.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PushUpFour::default()));
        registry.register(Arc::new(ConnectFour::default()));
        registry.register(Arc::new(Othello));
        registry
    }

    /// Register a rule set under its own name.
    ///
    /// A rule set already registered under that name is replaced and
    /// returned; games already running keep the instance they hold.
    pub fn register(&mut self, rule_set: Arc<dyn RuleSet>) -> Option<Arc<dyn RuleSet>> {
        let name = rule_set.name().to_string();
        debug!(rule_set = %name, "rule set registered");
        self.rule_sets.insert(name, rule_set)
    }

    /// Look up a rule set by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn RuleSet>, GameError> {
        self.rule_sets
            .get(name)
            .cloned()
            .ok_or_else(|| GameError::UnknownRuleSet(name.to_string()))
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.rule_sets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rule_sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rule_sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = RuleSetRegistry::with_builtin();
        assert_eq!(registry.names(), vec!["connect_four", "othello", "push_up_four"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_unknown_name() {
        let registry = RuleSetRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.get("go").unwrap_err(),
            GameError::UnknownRuleSet("go".to_string())
        );
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = RuleSetRegistry::with_builtin();
        let previous = registry.register(Arc::new(PushUpFour::new(5)));
        assert!(previous.is_some());
        assert_eq!(registry.len(), 3);
    }
}
