//! Offline demo generation with simulated progress.
//!
//! When no credential is configured the UI still wants the full generate
//! flow: a progress bar that fills, then a playable result. This module
//! fakes both. The progress sequence is a cosmetic timer with no relation
//! to real work, and the result is a canned sample clip.

use crate::config::calculate_cost;
use crate::generation::generator::{GeneratorKind, VideoGenerator};
use crate::generation::types::{local_generation_id, GenerationOutcome, GenerationRequest};
use async_trait::async_trait;
use std::time::Duration;

/// A canned sample clip served by the demo path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleVideo {
    /// Video URL.
    pub url: &'static str,
    /// Thumbnail URL.
    pub thumbnail_url: &'static str,
    /// The kind of prompt this sample stands in for.
    pub prompt: &'static str,
}

/// Sample clips available without a credential.
pub const SAMPLE_VIDEOS: &[SampleVideo] = &[
    SampleVideo {
        url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
        thumbnail_url: "https://peach.blender.org/wp-content/uploads/title_anouncement.jpg",
        prompt: "An animated rabbit in a colorful landscape",
    },
    SampleVideo {
        url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
        thumbnail_url: "https://orange.blender.org/wp-content/uploads/2006/05/teaser.jpg",
        prompt: "A futuristic landscape with surreal elements",
    },
];

/// Progress increment per simulated step.
pub const PROGRESS_STEP_PERCENT: u8 = 10;

const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(300);

/// Simulated generator for the no-credential demo path.
#[derive(Debug, Clone)]
pub struct DemoGenerator {
    step_delay: Duration,
}

impl Default for DemoGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoGenerator {
    /// Creates a demo generator with the default step delay.
    pub fn new() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
        }
    }

    /// Overrides the delay between progress steps. Tests use
    /// `Duration::ZERO` to run the sequence instantly.
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Runs a simulated generation, reporting each progress step.
    ///
    /// Progress moves through equally spaced increments from 0 to 100, one
    /// step per delay tick, then the request resolves to a sample clip
    /// priced from the flat table.
    pub async fn generate_with_progress<F>(
        &self,
        request: &GenerationRequest,
        mut on_progress: F,
    ) -> GenerationOutcome
    where
        F: FnMut(u8) + Send,
    {
        for percent in (0..=100).step_by(PROGRESS_STEP_PERCENT as usize) {
            tokio::time::sleep(self.step_delay).await;
            on_progress(percent as u8);
        }

        let sample = &SAMPLE_VIDEOS[0];
        tracing::debug!(url = sample.url, "demo generation complete");

        GenerationOutcome::Completed {
            video_url: sample.url.to_string(),
            thumbnail_url: sample.thumbnail_url.to_string(),
            generation_id: local_generation_id(),
            estimated_cost: calculate_cost(&request.config),
        }
    }
}

#[async_trait]
impl VideoGenerator for DemoGenerator {
    async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        self.generate_with_progress(request, |_| {}).await
    }

    /// Demo pricing comes from the flat table; the demo path has no tiers.
    fn estimate_cost(&self, request: &GenerationRequest) -> f64 {
        calculate_cost(&request.config)
    }

    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Demo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AspectRatio, ClipDuration, Resolution, VideoConfig};
    use crate::generation::types::GenerationTier;

    fn instant_demo() -> DemoGenerator {
        DemoGenerator::new().with_step_delay(Duration::ZERO)
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new(
            "A paper boat drifting down a rainy street",
            VideoConfig::new(
                ClipDuration::Secs10,
                AspectRatio::Landscape,
                Resolution::Hd720,
            ),
        )
    }

    #[tokio::test]
    async fn test_progress_steps_are_evenly_spaced() {
        let mut steps = Vec::new();
        let outcome = instant_demo()
            .generate_with_progress(&request(), |percent| steps.push(percent))
            .await;

        assert_eq!(steps, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert!(outcome.is_completed());
    }

    #[tokio::test]
    async fn test_demo_outcome_uses_sample_and_flat_price() {
        let outcome = instant_demo().generate(&request()).await;
        match outcome {
            GenerationOutcome::Completed {
                video_url,
                thumbnail_url,
                generation_id,
                estimated_cost,
            } => {
                assert_eq!(video_url, SAMPLE_VIDEOS[0].url);
                assert_eq!(thumbnail_url, SAMPLE_VIDEOS[0].thumbnail_url);
                assert!(!generation_id.is_empty());
                assert_eq!(estimated_cost, 7.5);
            }
            other => panic!("expected Completed, got {other:?}"),
        }
    }

    #[test]
    fn test_demo_cost_ignores_tier() {
        let demo = DemoGenerator::new();
        let standard = request();
        let fast = request().with_tier(GenerationTier::Fast);
        assert_eq!(demo.estimate_cost(&standard), 7.5);
        assert_eq!(demo.estimate_cost(&fast), 7.5);
    }

    #[test]
    fn test_sample_catalog_is_nonempty() {
        assert!(!SAMPLE_VIDEOS.is_empty());
        for sample in SAMPLE_VIDEOS {
            assert!(sample.url.starts_with("https://"));
            assert!(sample.thumbnail_url.starts_with("https://"));
        }
    }
}
