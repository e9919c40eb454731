//! Read-only lookup tables keyed by normalised names.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use cre_core::{ClusterGeometry, CreError, Engine, Environment, ErrorInfo};
use tracing::warn;

use crate::{clusters, engines, environments};

/// Normalises a lookup key: trimmed, lowercase, spaces replaced by `_`.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Name-keyed table of records of one kind.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    kind: &'static str,
    entries: BTreeMap<String, T>,
}

impl<T> Registry<T> {
    /// Builds a registry from `(key, record)` pairs; keys are normalised.
    pub fn new<K: AsRef<str>>(kind: &'static str, entries: impl IntoIterator<Item = (K, T)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (normalize_key(key.as_ref()), value))
            .collect();
        Self { kind, entries }
    }

    /// Record kind, e.g. `"engine"`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Looks up a record; unknown names list every available key.
    pub fn get(&self, name: &str) -> Result<&T, CreError> {
        let key = normalize_key(name);
        self.entries.get(&key).ok_or_else(|| {
            let available = self.names().join(", ");
            warn!(kind = self.kind, name, "registry miss");
            CreError::NotFound(
                ErrorInfo::new(
                    format!("unknown_{}", self.kind),
                    format!("unknown {} '{}'. Available: {}", self.kind, name, available),
                )
                .with_context("name", name)
                .with_context("available", &available),
            )
        })
    }

    /// Returns true when `name` resolves to a record.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_key(name))
    }

    /// Sorted registry keys.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Inserts or replaces a record under the normalised key.
    pub fn insert(&mut self, name: &str, value: T) -> Option<T> {
        self.entries.insert(normalize_key(name), value)
    }

    /// Iterates records in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

static ENGINES: OnceLock<Registry<Engine>> = OnceLock::new();
static CLUSTERS: OnceLock<Registry<ClusterGeometry>> = OnceLock::new();
static ENVIRONMENTS: OnceLock<Registry<Environment>> = OnceLock::new();

/// Built-in engine registry.
pub fn engine_registry() -> &'static Registry<Engine> {
    ENGINES.get_or_init(|| Registry::new("engine", engines::builtin()))
}

/// Built-in cluster registry.
pub fn cluster_registry() -> &'static Registry<ClusterGeometry> {
    CLUSTERS.get_or_init(|| Registry::new("cluster", clusters::builtin()))
}

/// Built-in environment registry.
pub fn environment_registry() -> &'static Registry<Environment> {
    ENVIRONMENTS.get_or_init(|| Registry::new("environment", environments::builtin()))
}

/// Looks up a built-in engine, e.g. `engine("Raptor 2")`.
pub fn engine(name: &str) -> Result<&'static Engine, CreError> {
    engine_registry().get(name)
}

/// Looks up a built-in cluster.
pub fn cluster(name: &str) -> Result<&'static ClusterGeometry, CreError> {
    cluster_registry().get(name)
}

/// Looks up a built-in environment.
pub fn environment(name: &str) -> Result<&'static Environment, CreError> {
    environment_registry().get(name)
}

/// Sorted built-in engine keys.
pub fn engine_names() -> Vec<String> {
    engine_registry().names()
}

/// Sorted built-in cluster keys.
pub fn cluster_names() -> Vec<String> {
    cluster_registry().names()
}

/// Sorted built-in environment keys.
pub fn environment_names() -> Vec<String> {
    environment_registry().names()
}
