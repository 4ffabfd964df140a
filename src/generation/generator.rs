//! Generator trait shared by the live client and the offline demo path.

use crate::generation::types::{GenerationOutcome, GenerationRequest};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Generator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// The live Veo client.
    Veo,
    /// The offline demo generator.
    Demo,
}

impl std::fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Veo => write!(f, "veo"),
            Self::Demo => write!(f, "demo"),
        }
    }
}

/// Trait for anything that turns a [`GenerationRequest`] into a
/// [`GenerationOutcome`] and can price it up front.
///
/// The UI layer switches between implementations: [`crate::VeoClient`] for
/// real generations, [`crate::DemoGenerator`] when no credential is
/// configured. Failures never escape as errors; they come back as
/// [`GenerationOutcome::Failed`] values.
#[async_trait]
pub trait VideoGenerator: Send + Sync {
    /// Runs one generation attempt.
    async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome;

    /// Prices a request under this generator's cost model.
    fn estimate_cost(&self, request: &GenerationRequest) -> f64;

    /// Returns the kind of this generator.
    fn kind(&self) -> GeneratorKind;

    /// Returns the name of this generator for display.
    fn name(&self) -> &str {
        match self.kind() {
            GeneratorKind::Veo => "Veo (Google)",
            GeneratorKind::Demo => "Offline demo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(GeneratorKind::Veo.to_string(), "veo");
        assert_eq!(GeneratorKind::Demo.to_string(), "demo");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(GeneratorKind::Demo).unwrap(),
            serde_json::json!("demo")
        );
    }
}
