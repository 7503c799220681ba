//! Ordered registry of check factories
//!
//! Insertion order is evaluation order. Factories are called on demand, once
//! per build, with the name they were registered under.

use super::trait_def::Check;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Builds a check from the name it is registered under
pub type CheckFactory = Arc<dyn Fn(&str) -> anyhow::Result<Box<dyn Check>> + Send + Sync>;

/// Wrap a closure as a `CheckFactory`
pub fn factory<F>(f: F) -> CheckFactory
where
  F: Fn(&str) -> anyhow::Result<Box<dyn Check>> + Send + Sync + 'static,
{
  Arc::new(f)
}

/// Ordered mapping from check name to factory
#[derive(Clone, Default)]
pub struct CheckRegistry {
  entries: IndexMap<String, CheckFactory>,
}

impl CheckRegistry {
  /// Create an empty registry
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a factory under `name`.
  ///
  /// With `prepend` the entry becomes first, moving it if the name already
  /// existed. Without it the entry is appended, or, for an existing name, its
  /// factory is replaced in place. Last write wins.
  pub fn add(&mut self, name: impl Into<String>, factory: CheckFactory, prepend: bool) {
    let name = name.into();
    if prepend {
      self.entries.shift_remove(&name);
      self.entries.shift_insert(0, name, factory);
    } else {
      self.entries.insert(name, factory);
    }
  }

  /// Remove `name` if present
  pub fn remove(&mut self, name: &str) {
    self.entries.shift_remove(name);
  }

  /// Look up a factory by name
  pub fn get(&self, name: &str) -> Option<&CheckFactory> {
    self.entries.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.entries.contains_key(name)
  }

  /// Registered names in evaluation order
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  /// Entries in evaluation order
  pub fn iter(&self) -> impl Iterator<Item = (&str, &CheckFactory)> {
    self.entries.iter().map(|(name, factory)| (name.as_str(), factory))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Copy of the ordered entries, detached from later mutation
  pub fn snapshot(&self) -> Vec<(String, CheckFactory)> {
    self
      .entries
      .iter()
      .map(|(name, factory)| (name.clone(), Arc::clone(factory)))
      .collect()
  }
}

impl fmt::Debug for CheckRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.entries.keys()).finish()
  }
}
