//! Video output configuration and flat demo pricing.

use serde::{Deserialize, Serialize};

/// Supported clip durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClipDuration {
    /// 5 second clip.
    #[serde(rename = "5")]
    Secs5,
    /// 10 second clip.
    #[default]
    #[serde(rename = "10")]
    Secs10,
    /// 15 second clip.
    #[serde(rename = "15")]
    Secs15,
}

impl ClipDuration {
    /// Returns the duration in seconds.
    pub fn seconds(&self) -> u32 {
        match self {
            Self::Secs5 => 5,
            Self::Secs10 => 10,
            Self::Secs15 => 15,
        }
    }

    /// Returns a pluralized label for display (e.g. "10 seconds").
    pub fn label(&self) -> String {
        format_duration(self.seconds())
    }
}

impl std::fmt::Display for ClipDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.seconds())
    }
}

/// Supported aspect ratios for video output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 4:3 classic landscape.
    #[serde(rename = "4:3")]
    Standard,
    /// 3:4 classic portrait.
    #[serde(rename = "3:4")]
    StandardPortrait,
    /// 16:9 widescreen.
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    /// 1:1 square.
    #[serde(rename = "1:1")]
    Square,
    /// 9:16 vertical, used by stories and reels.
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    /// Returns the aspect ratio as a string (e.g. "16:9").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "4:3",
            Self::StandardPortrait => "3:4",
            Self::Landscape => "16:9",
            Self::Square => "1:1",
            Self::Portrait => "9:16",
        }
    }

    /// Returns a human-readable label for pickers.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Standard => "Classic (4:3)",
            Self::StandardPortrait => "Vertical (3:4)",
            Self::Landscape => "Widescreen (16:9)",
            Self::Square => "Square (1:1)",
            Self::Portrait => "Stories/Reels (9:16)",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported output resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Resolution {
    /// 480p, available only in the offline demo path.
    #[serde(rename = "480p")]
    Sd480,
    /// 720p, the remote service's native resolution.
    #[default]
    #[serde(rename = "720p")]
    Hd720,
    /// 1080p, rendered as a costed upscale from 720p.
    #[serde(rename = "1080p")]
    FullHd1080,
}

impl Resolution {
    /// Returns the resolution as a string (e.g. "720p").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sd480 => "480p",
            Self::Hd720 => "720p",
            Self::FullHd1080 => "1080p",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output configuration for one generation attempt.
///
/// An immutable value type: two configs with equal fields are
/// interchangeable, and a config fully determines both the price and the
/// remote request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Clip duration.
    pub duration: ClipDuration,
    /// Output aspect ratio.
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: AspectRatio,
    /// Output resolution.
    pub resolution: Resolution,
}

impl VideoConfig {
    /// Creates a config from its three parts.
    pub fn new(duration: ClipDuration, aspect_ratio: AspectRatio, resolution: Resolution) -> Self {
        Self {
            duration,
            aspect_ratio,
            resolution,
        }
    }
}

/// A partial configuration suggested from prompt keywords.
///
/// Fields the recommendation does not set are `None`; merging with
/// [`RecommendedConfig::apply_to`] leaves the caller's existing choices for
/// those fields intact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendedConfig {
    /// Suggested duration, if any.
    pub duration: Option<ClipDuration>,
    /// Suggested aspect ratio, if any.
    pub aspect_ratio: Option<AspectRatio>,
    /// Suggested resolution, if any.
    pub resolution: Option<Resolution>,
}

impl RecommendedConfig {
    /// Merges this recommendation onto an existing config, keeping the
    /// existing value wherever the recommendation is silent.
    pub fn apply_to(&self, config: VideoConfig) -> VideoConfig {
        VideoConfig {
            duration: self.duration.unwrap_or(config.duration),
            aspect_ratio: self.aspect_ratio.unwrap_or(config.aspect_ratio),
            resolution: self.resolution.unwrap_or(config.resolution),
        }
    }
}

/// Flat price for one clip, keyed by duration and resolution.
///
/// Aspect ratio does not affect price. This is the offline/demo pricing
/// model; once a credential is configured the per-second tier formula in
/// [`crate::generation::GenerationTier::estimate_cost`] is authoritative.
pub fn flat_price(duration: ClipDuration, resolution: Resolution) -> f64 {
    use ClipDuration::*;
    use Resolution::*;

    match (duration, resolution) {
        (Secs5, Sd480) => 2.5,
        (Secs5, Hd720) => 4.0,
        (Secs5, FullHd1080) => 6.5,
        (Secs10, Sd480) => 4.5,
        (Secs10, Hd720) => 7.5,
        (Secs10, FullHd1080) => 12.0,
        (Secs15, Sd480) => 6.5,
        (Secs15, Hd720) => 11.0,
        (Secs15, FullHd1080) => 18.0,
    }
}

/// Flat price for a full config. See [`flat_price`].
pub fn calculate_cost(config: &VideoConfig) -> f64 {
    flat_price(config.duration, config.resolution)
}

/// Formats a duration in seconds with a pluralized unit label.
pub fn format_duration(seconds: u32) -> String {
    if seconds == 1 {
        "1 second".to_string()
    } else {
        format!("{seconds} seconds")
    }
}
