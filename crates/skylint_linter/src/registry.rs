//! Rule registry for mapping configured rule names to rule implementations.

use std::collections::HashMap;

use skylint_config::{ConfigError, RuleSetting};

use crate::Rule;

/// Trait for rules that can be constructed from their configured settings.
pub trait FromConfig: Rule + Sized {
    /// The name this rule is configured under.
    const NAME: &'static str;

    /// Create a rule instance from its settings.
    ///
    /// Invalid options are an error, never silently ignored.
    fn from_options(setting: &RuleSetting) -> Result<Self, ConfigError>;
}

/// A factory function that creates a boxed rule from settings.
type RuleFactory = fn(&RuleSetting) -> Result<Box<dyn Rule>, ConfigError>;

/// Registry mapping rule names to rule factories.
pub struct RuleRegistry {
    factories: HashMap<&'static str, RuleFactory>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with all built-in rules registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register_builtins();
        registry
    }

    /// Register a rule type that implements FromConfig.
    pub fn register<R: FromConfig + 'static>(&mut self) {
        self.factories.insert(R::NAME, |setting| {
            R::from_options(setting).map(|rule| Box::new(rule) as Box<dyn Rule>)
        });
    }

    /// Register all built-in rules.
    fn register_builtins(&mut self) {
        use crate::rules::{ForbidComponentProps, NoJiraTodo};

        self.register::<ForbidComponentProps>();
        self.register::<NoJiraTodo>();
    }

    /// Create a rule from a name and settings.
    /// Returns None if the name is not recognized.
    pub fn create_rule(
        &self,
        name: &str,
        setting: &RuleSetting,
    ) -> Option<Result<Box<dyn Rule>, ConfigError>> {
        self.factories.get(name).map(|factory| factory(setting))
    }

    /// Check if a rule name is registered.
    pub fn has_rule(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Get all registered rule names.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
