//! Named registry of loaded configurations
//!
//! A [`Registry`] maps names to loaded configs. Loaders publish into one when
//! `add_to_global_with_name` is set. [`global`] is the instance shared by the
//! whole process; tests and embedders can inject their own.

use crate::error::{ConfigError, Result};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

static GLOBAL: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::new()));

/// The process-wide registry.
pub fn global() -> &'static Arc<Registry> {
    &GLOBAL
}

#[derive(Debug, Default)]
pub struct Registry {
    entries: RwLock<HashMap<String, Arc<Value>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `value` under `name`, failing if the name is taken.
    ///
    /// The occupancy check and the insert happen under the same write lock.
    pub fn register(&self, name: &str, value: Value) -> Result<Arc<Value>> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.contains_key(name) {
            return Err(ConfigError::GlobalNameCollision { name: name.to_string() });
        }
        let value = Arc::new(value);
        entries.insert(name.to_string(), Arc::clone(&value));
        tracing::debug!("Registered configuration as '{}'", name);
        Ok(value)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Value>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).contains_key(name)
    }

    pub fn remove(&self, name: &str) -> Option<Arc<Value>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner).remove(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> =
            self.entries.read().unwrap_or_else(PoisonError::into_inner).keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread;

    #[test]
    fn register_then_get() {
        let registry = Registry::new();
        registry.register("APP", json!({"foo": "bar"})).expect("register");
        assert!(registry.contains("APP"));
        assert_eq!(registry.get("APP").as_deref(), Some(&json!({"foo": "bar"})));
        assert_eq!(registry.names(), vec!["APP".to_string()]);
    }

    #[test]
    fn register_rejects_occupied_name_and_keeps_first_value() {
        let registry = Registry::new();
        registry.register("APP", json!(1)).expect("first");
        let err = registry.register("APP", json!(2)).unwrap_err();
        assert!(matches!(err, ConfigError::GlobalNameCollision { ref name } if name == "APP"));
        assert_eq!(registry.get("APP").as_deref(), Some(&json!(1)));
    }

    #[test]
    fn remove_frees_the_name() {
        let registry = Registry::new();
        registry.register("APP", json!(1)).expect("register");
        assert!(registry.remove("APP").is_some());
        assert!(registry.is_empty());
        registry.register("APP", json!(2)).expect("re-register");
    }

    #[test]
    fn concurrent_registration_has_one_winner() {
        let registry = Arc::new(Registry::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.register("SHARED", json!(i)).is_ok())
            })
            .collect();
        let winners = handles.into_iter().filter_map(|h| h.join().ok()).filter(|ok| *ok).count();
        assert_eq!(winners, 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn global_is_shared() {
        let name = "registry::tests::global_is_shared";
        global().register(name, json!(true)).expect("register");
        assert!(global().contains(name));
        global().remove(name);
    }
}
