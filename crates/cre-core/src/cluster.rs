//! Cluster geometry: concentric rings of engines.

use serde::{Deserialize, Serialize};

use crate::errors::{require_engine_count, require_non_negative, CreError, ErrorInfo};

/// A single concentric ring of engines.
///
/// Rings are analysed independently; no coupling between rings is modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    /// Number of engines N in the ring.
    pub n_engines: usize,
    /// Ring radius from the vehicle centerline [m].
    pub radius: f64,
    /// Free-form symmetry label, e.g. `"C20"` or `"D8"`.
    pub symmetry_group: String,
    /// Whether the engines of this ring gimbal.
    pub gimbaling: bool,
}

impl Ring {
    /// Creates a validated ring.
    pub fn new(
        n_engines: usize,
        radius: f64,
        symmetry_group: impl Into<String>,
        gimbaling: bool,
    ) -> Result<Self, CreError> {
        let ring = Self {
            n_engines,
            radius,
            symmetry_group: symmetry_group.into(),
            gimbaling,
        };
        ring.validate()?;
        Ok(ring)
    }

    /// Checks the engine count and radius.
    pub fn validate(&self) -> Result<(), CreError> {
        require_engine_count("ring_engine_count", self.n_engines)?;
        require_non_negative("ring_radius", "radius", self.radius)
    }
}

/// Multi-engine layout of a vehicle stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterGeometry {
    /// Display name, e.g. `"Super Heavy"`.
    pub name: String,
    /// Registry key of the engine fitted to every ring.
    pub engine_name: String,
    /// Total engine count of the vehicle.
    ///
    /// Informational only: multi-booster vehicles list fewer ring engines
    /// than they carry, and the two are deliberately not reconciled.
    pub total_engines: usize,
    /// Concentric ring definitions, innermost first.
    pub rings: Vec<Ring>,
    /// Vehicle base diameter [m].
    pub base_diameter: f64,
}

impl ClusterGeometry {
    /// Validates every ring and the base diameter.
    pub fn validate(&self) -> Result<(), CreError> {
        require_non_negative("cluster_base_diameter", "base_diameter", self.base_diameter)?;
        for ring in &self.rings {
            ring.validate()?;
        }
        Ok(())
    }

    /// Returns the ring at `index`.
    pub fn ring(&self, index: usize) -> Result<&Ring, CreError> {
        self.rings.get(index).ok_or_else(|| {
            CreError::InvalidInput(
                ErrorInfo::new("cluster_ring_index", "ring index out of range")
                    .with_context("cluster", &self.name)
                    .with_context("index", index)
                    .with_context("rings", self.rings.len()),
            )
        })
    }

    /// Sum of the per-ring engine counts.
    pub fn ring_engine_count(&self) -> usize {
        self.rings.iter().map(|ring| ring.n_engines).sum()
    }

    /// Base cavity radius [m].
    pub fn base_radius(&self) -> f64 {
        self.base_diameter / 2.0
    }
}
