//! Service status returned by `GET /`.

use crate::scalar;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Readiness markers the service uses for a loaded model.
const LOADED_MARKERS: [&str; 2] = ["✅", "Loaded"];

/// Liveness report with per-model readiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Overall status label
    #[serde(deserialize_with = "scalar::any_text")]
    pub status: String,
    /// Model name to readiness description
    #[serde(default, deserialize_with = "scalar::text_map")]
    pub models: BTreeMap<String, String>,
}

impl ServiceStatus {
    /// Whether a readiness description means the model is loaded.
    #[must_use]
    pub fn is_loaded(readiness: &str) -> bool {
        LOADED_MARKERS.iter().any(|marker| readiness.contains(marker))
    }

    /// Names of models that are not reported as loaded.
    #[must_use]
    pub fn unloaded_models(&self) -> Vec<&str> {
        self.models
            .iter()
            .filter(|(_, readiness)| !Self::is_loaded(readiness))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Whether every model is loaded. Vacuously true with no models.
    #[must_use]
    pub fn all_models_loaded(&self) -> bool {
        self.unloaded_models().is_empty()
    }
}
