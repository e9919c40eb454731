//! YAML study files and the per-run catalogue they produce.

use std::fs;
use std::path::Path;

use cre_core::{ClusterGeometry, CreError, DampingParameters, Engine, Environment, ErrorInfo};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::registry::{cluster_registry, engine_registry, environment_registry, Registry};

fn study_error(code: &str, err: impl ToString) -> CreError {
    CreError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// User supplied overrides for a single run.
///
/// Every section is optional; an empty file yields the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Damping coefficients; missing fields keep their defaults.
    #[serde(default)]
    pub damping: DampingParameters,
    /// Extra or replacement environments keyed by their `name`.
    #[serde(default)]
    pub environments: Vec<Environment>,
    /// Extra or replacement engines keyed by their `name`.
    #[serde(default)]
    pub engines: Vec<Engine>,
}

impl StudyConfig {
    /// Validates every record of the study.
    pub fn validate(&self) -> Result<(), CreError> {
        self.damping.validate()?;
        for env in &self.environments {
            env.validate()?;
        }
        for engine in &self.engines {
            engine.validate()?;
        }
        Ok(())
    }
}

/// Parses and validates a study from YAML bytes.
pub fn parse_study(data: &[u8]) -> Result<StudyConfig, CreError> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(StudyConfig::default());
    }
    let study: StudyConfig =
        serde_yaml::from_slice(data).map_err(|err| study_error("study_yaml", err))?;
    study.validate()?;
    Ok(study)
}

/// Loads a study file from disk.
pub fn load_study<P: AsRef<Path>>(path: P) -> Result<StudyConfig, CreError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| {
        CreError::Serde(
            ErrorInfo::new("study_read", err.to_string()).with_context("path", path.display()),
        )
    })?;
    let study = parse_study(&bytes)?;
    info!(
        path = %path.display(),
        engines = study.engines.len(),
        environments = study.environments.len(),
        "loaded study"
    );
    Ok(study)
}

/// Serializes a study back to YAML.
pub fn to_yaml_string(study: &StudyConfig) -> Result<String, CreError> {
    serde_yaml::to_string(study).map_err(|err| study_error("study_yaml_write", err))
}

/// Built-in registries merged with the overrides of a study.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Engines available to the run.
    pub engines: Registry<Engine>,
    /// Clusters available to the run.
    pub clusters: Registry<ClusterGeometry>,
    /// Environments available to the run.
    pub environments: Registry<Environment>,
    /// Damping coefficients of the run.
    pub damping: DampingParameters,
}

impl Catalog {
    /// Built-in records with default damping.
    pub fn builtin() -> Self {
        Self {
            engines: engine_registry().clone(),
            clusters: cluster_registry().clone(),
            environments: environment_registry().clone(),
            damping: DampingParameters::default(),
        }
    }

    /// Built-in records overlaid with a study.
    pub fn with_study(study: &StudyConfig) -> Self {
        let mut catalog = Self::builtin();
        catalog.damping = study.damping;
        for env in &study.environments {
            if catalog.environments.insert(&env.name, env.clone()).is_some() {
                debug!(name = %env.name, "study replaces built-in environment");
            }
        }
        for engine in &study.engines {
            if catalog.engines.insert(&engine.name, engine.clone()).is_some() {
                debug!(name = %engine.name, "study replaces built-in engine");
            }
        }
        catalog
    }

    /// Loads an optional study path; `None` yields the built-in catalogue.
    pub fn load(path: Option<&Path>) -> Result<Self, CreError> {
        match path {
            Some(path) => Ok(Self::with_study(&load_study(path)?)),
            None => Ok(Self::builtin()),
        }
    }

    /// Resolves a cluster together with the engine fitted to it.
    pub fn cluster_with_engine(&self, name: &str) -> Result<(&ClusterGeometry, &Engine), CreError> {
        let cluster = self.clusters.get(name)?;
        let engine = self.engines.get(&cluster.engine_name)?;
        Ok((cluster, engine))
    }
}
