//! Request and outcome types for video generation.

use crate::config::{AspectRatio, Resolution, VideoConfig};
use serde::{Deserialize, Serialize};

/// Cost multiplier for 1080p output. The remote service renders natively at
/// 720p; 1080p is a costed upscale.
const UPSCALE_1080P_MULTIPLIER: f64 = 1.5;

/// Veo service tier for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationTier {
    /// The full-quality model.
    #[default]
    Standard,
    /// The cheaper, quicker model variant.
    Fast,
}

impl GenerationTier {
    /// Returns the remote model identifier for this tier.
    pub fn model_id(&self) -> &'static str {
        match self {
            Self::Standard => "veo-3.0-generate-001",
            Self::Fast => "veo-3.0-fast-generate-001",
        }
    }

    /// Returns the per-second rate in currency units.
    pub fn per_second_rate(&self) -> f64 {
        match self {
            Self::Standard => 0.75,
            Self::Fast => 0.40,
        }
    }

    /// Estimated cost for a config on this tier:
    /// `duration_secs * per_second_rate * resolution_multiplier`.
    ///
    /// This is the remote service's pricing model. It is independent of the
    /// flat table in [`crate::config::flat_price`] and authoritative once a
    /// credential is configured.
    pub fn estimate_cost(&self, config: &VideoConfig) -> f64 {
        let multiplier = match config.resolution {
            Resolution::FullHd1080 => UPSCALE_1080P_MULTIPLIER,
            _ => 1.0,
        };
        f64::from(config.duration.seconds()) * self.per_second_rate() * multiplier
    }
}

impl std::fmt::Display for GenerationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Fast => write!(f, "fast"),
        }
    }
}

/// A request to generate one video. Constructed once per attempt and not
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The text prompt describing the desired video.
    pub prompt: String,
    /// Output configuration.
    pub config: VideoConfig,
    /// Service tier to run on.
    #[serde(default)]
    pub tier: GenerationTier,
}

impl GenerationRequest {
    /// Creates a standard-tier request.
    pub fn new(prompt: impl Into<String>, config: VideoConfig) -> Self {
        Self {
            prompt: prompt.into(),
            config,
            tier: GenerationTier::default(),
        }
    }

    /// Sets the service tier.
    pub fn with_tier(mut self, tier: GenerationTier) -> Self {
        self.tier = tier;
        self
    }

    /// Estimated cost of this request on its tier.
    pub fn estimated_cost(&self) -> f64 {
        self.tier.estimate_cost(&self.config)
    }
}

/// The outcome of one generation attempt.
///
/// Both variants carry the estimated cost: it is deterministic from config
/// and tier, so it is knowable even when the remote call fails and the
/// caller can always display what the attempt cost (or would have cost).
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// The video was generated and is ready to stream or download.
    Completed {
        /// URL of the generated video.
        video_url: String,
        /// URL of a preview thumbnail.
        thumbnail_url: String,
        /// Remote generation id, or a locally generated fallback.
        generation_id: String,
        /// Cost of the generation.
        estimated_cost: f64,
    },
    /// The generation failed.
    Failed {
        /// Human-readable failure message.
        error: String,
        /// What the attempt would have cost.
        estimated_cost: f64,
    },
}

impl GenerationOutcome {
    /// Returns the estimated cost, present on both variants.
    pub fn estimated_cost(&self) -> f64 {
        match self {
            Self::Completed { estimated_cost, .. } | Self::Failed { estimated_cost, .. } => {
                *estimated_cost
            }
        }
    }

    /// Returns true for a completed generation.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Returns the video URL for a completed generation.
    pub fn video_url(&self) -> Option<&str> {
        match self {
            Self::Completed { video_url, .. } => Some(video_url),
            Self::Failed { .. } => None,
        }
    }

    /// Returns the failure message for a failed generation.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Completed { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}

/// Locally generated timestamp-based id, used when the remote response
/// omits one and for demo generations.
pub(crate) fn local_generation_id() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .to_string()
}

/// Known constraints of the remote service, for caller-side guardrails.
///
/// Informational only; nothing in this crate enforces them.
#[derive(Debug, Clone, Copy)]
pub struct ApiLimits {
    /// Maximum generation requests per minute.
    pub max_videos_per_minute: u32,
    /// Maximum clip length the service accepts, in seconds.
    pub max_video_length_secs: u32,
    /// Maximum videos per request.
    pub max_videos_per_request: u32,
    /// Resolutions the service can return.
    pub supported_resolutions: &'static [Resolution],
    /// Aspect ratios the service accepts.
    pub supported_aspect_ratios: &'static [AspectRatio],
    /// Container formats the service returns.
    pub supported_formats: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClipDuration;

    fn config(duration: ClipDuration, resolution: Resolution) -> VideoConfig {
        VideoConfig::new(duration, AspectRatio::Landscape, resolution)
    }

    #[test]
    fn test_tier_model_ids() {
        assert_eq!(GenerationTier::Standard.model_id(), "veo-3.0-generate-001");
        assert_eq!(GenerationTier::Fast.model_id(), "veo-3.0-fast-generate-001");
    }

    #[test]
    fn test_tier_cost_standard_1080p() {
        let cost = GenerationTier::Standard
            .estimate_cost(&config(ClipDuration::Secs10, Resolution::FullHd1080));
        assert_eq!(cost, 11.25);
    }

    #[test]
    fn test_tier_cost_fast_1080p() {
        let cost =
            GenerationTier::Fast.estimate_cost(&config(ClipDuration::Secs10, Resolution::FullHd1080));
        assert_eq!(cost, 6.0);
    }

    #[test]
    fn test_tier_cost_standard_720p() {
        let cost =
            GenerationTier::Standard.estimate_cost(&config(ClipDuration::Secs5, Resolution::Hd720));
        assert_eq!(cost, 3.75);
    }

    #[test]
    fn test_tier_cost_480p_has_no_upscale_multiplier() {
        let cost =
            GenerationTier::Standard.estimate_cost(&config(ClipDuration::Secs10, Resolution::Sd480));
        assert_eq!(cost, 7.5);
    }

    #[test]
    fn test_request_defaults_to_standard_tier() {
        let request = GenerationRequest::new("Ocean waves", VideoConfig::default());
        assert_eq!(request.tier, GenerationTier::Standard);
        assert_eq!(request.estimated_cost(), 7.5);
    }

    #[test]
    fn test_request_with_fast_tier() {
        let request = GenerationRequest::new("Ocean waves", VideoConfig::default())
            .with_tier(GenerationTier::Fast);
        assert_eq!(request.estimated_cost(), 4.0);
    }

    #[test]
    fn test_local_generation_id_is_numeric() {
        let id = local_generation_id();
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_outcome_cost_present_on_both_variants() {
        let completed = GenerationOutcome::Completed {
            video_url: "https://example.com/v.mp4".into(),
            thumbnail_url: "https://example.com/t.jpg".into(),
            generation_id: "gen-1".into(),
            estimated_cost: 7.5,
        };
        let failed = GenerationOutcome::Failed {
            error: "quota exceeded".into(),
            estimated_cost: 7.5,
        };

        assert_eq!(completed.estimated_cost(), 7.5);
        assert_eq!(failed.estimated_cost(), 7.5);
        assert!(completed.is_completed());
        assert!(!failed.is_completed());
        assert_eq!(completed.video_url(), Some("https://example.com/v.mp4"));
        assert_eq!(failed.error(), Some("quota exceeded"));
        assert_eq!(failed.video_url(), None);
    }
}
