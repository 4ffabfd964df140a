//! Prompt validation, stylistic enrichment, and configuration hints.

use crate::config::{AspectRatio, ClipDuration, RecommendedConfig, Resolution};
use rand::seq::SliceRandom;

/// Minimum prompt length in characters.
pub const MIN_PROMPT_CHARS: usize = 10;
/// Maximum prompt length in characters.
pub const MAX_PROMPT_CHARS: usize = 500;

/// Number of stylistic terms appended by [`optimize_prompt`].
const STYLE_TERM_COUNT: usize = 3;

const CINEMATIC_TERMS: [&str; 5] = [
    "professional cinematography",
    "dynamic lighting",
    "fluid camera movement",
    "artistic composition",
    "cinematic framing",
];

const QUALITY_TERMS: [&str; 5] = [
    "high visual quality",
    "vibrant colors",
    "sharp details",
    "realistic textures",
    "depth of field",
];

const STYLE_TERMS: [&str; 5] = [
    "epic style",
    "dramatic atmosphere",
    "professional lighting",
    "high-budget production",
    "studio quality",
];

/// A prompt that failed local validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    /// The trimmed prompt has zero length.
    #[error("prompt must not be empty")]
    Empty,
    /// The prompt is shorter than [`MIN_PROMPT_CHARS`].
    #[error("prompt must be at least {MIN_PROMPT_CHARS} characters, got {0}")]
    TooShort(usize),
    /// The prompt is longer than [`MAX_PROMPT_CHARS`].
    #[error("prompt must be at most {MAX_PROMPT_CHARS} characters, got {0}")]
    TooLong(usize),
}

/// Validates a raw user prompt.
///
/// Whitespace-only prompts count as empty; the length bounds apply to the
/// prompt as typed.
pub fn validate_prompt(prompt: &str) -> Result<(), PromptError> {
    if prompt.trim().is_empty() {
        return Err(PromptError::Empty);
    }

    let len = prompt.chars().count();
    if len < MIN_PROMPT_CHARS {
        return Err(PromptError::TooShort(len));
    }
    if len > MAX_PROMPT_CHARS {
        return Err(PromptError::TooLong(len));
    }
    Ok(())
}

/// Enriches a prompt with stylistic qualifiers for better generations.
///
/// Appends three distinct terms sampled from the cinematic, quality, and
/// style pools, followed by a fixed quality suffix. Selection is random, so
/// repeated calls over the same prompt vary.
pub fn optimize_prompt(prompt: &str) -> String {
    let pool: Vec<&str> = CINEMATIC_TERMS
        .iter()
        .chain(QUALITY_TERMS.iter())
        .chain(STYLE_TERMS.iter())
        .copied()
        .collect();

    let mut rng = rand::thread_rng();
    let selected: Vec<&str> = pool
        .choose_multiple(&mut rng, STYLE_TERM_COUNT)
        .copied()
        .collect();

    format!(
        "{prompt}, {}, 4K ultra HD, photorealistic",
        selected.join(", ")
    )
}

/// Suggests an output configuration from prompt keywords.
///
/// Rules apply in priority order, and the order is load-bearing: a prompt
/// mentioning "instagram story" lands in the short-form vertical rule, not
/// the instagram-post rule. Fields a rule does not set are left for the
/// caller's existing configuration.
pub fn recommended_config(prompt: &str) -> RecommendedConfig {
    let lower = prompt.to_lowercase();

    // Short-form vertical platforms (stories, reels, TikTok).
    if lower.contains("story") || lower.contains("reel") || lower.contains("tiktok") {
        return RecommendedConfig {
            duration: Some(ClipDuration::Secs10),
            aspect_ratio: Some(AspectRatio::Portrait),
            resolution: None,
        };
    }

    // Long-form widescreen platforms.
    if lower.contains("youtube") || lower.contains("vlog") {
        return RecommendedConfig {
            duration: Some(ClipDuration::Secs15),
            aspect_ratio: Some(AspectRatio::Landscape),
            resolution: None,
        };
    }

    // Instagram feed posts. Story prompts never reach this rule.
    if lower.contains("instagram") {
        return RecommendedConfig {
            duration: Some(ClipDuration::Secs10),
            aspect_ratio: Some(AspectRatio::Square),
            resolution: None,
        };
    }

    RecommendedConfig {
        duration: Some(ClipDuration::Secs10),
        aspect_ratio: Some(AspectRatio::Landscape),
        resolution: Some(Resolution::Hd720),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_prompt() {
        assert_eq!(validate_prompt(""), Err(PromptError::Empty));
        assert_eq!(validate_prompt("   "), Err(PromptError::Empty));
    }

    #[test]
    fn test_validate_too_short() {
        assert_eq!(validate_prompt("short"), Err(PromptError::TooShort(5)));
    }

    #[test]
    fn test_validate_too_long() {
        let prompt = "x".repeat(501);
        assert_eq!(validate_prompt(&prompt), Err(PromptError::TooLong(501)));
    }

    #[test]
    fn test_validate_boundaries() {
        assert!(validate_prompt(&"x".repeat(10)).is_ok());
        assert!(validate_prompt(&"x".repeat(500)).is_ok());
    }

    #[test]
    fn test_validate_reasonable_prompt() {
        assert!(validate_prompt("A drone shot over a misty mountain lake at dawn").is_ok());
    }

    #[test]
    fn test_optimize_appends_terms_and_suffix() {
        let original = "A red fox running through snow";
        let optimized = optimize_prompt(original);

        let rest = optimized
            .strip_prefix(&format!("{original}, "))
            .expect("optimized prompt keeps the original as prefix");
        let terms = rest
            .strip_suffix(", 4K ultra HD, photorealistic")
            .expect("optimized prompt ends with the fixed suffix");

        let selected: Vec<&str> = terms.split(", ").collect();
        assert_eq!(selected.len(), 3);

        let pool: Vec<&str> = CINEMATIC_TERMS
            .iter()
            .chain(QUALITY_TERMS.iter())
            .chain(STYLE_TERMS.iter())
            .copied()
            .collect();
        for term in &selected {
            assert!(pool.contains(term), "unexpected term: {term}");
        }
    }

    #[test]
    fn test_optimize_terms_are_distinct() {
        // Sampling is without replacement, so the three terms never repeat.
        for _ in 0..50 {
            let optimized = optimize_prompt("A city street at night");
            let rest = optimized.strip_prefix("A city street at night, ").unwrap();
            let terms: Vec<&str> = rest
                .strip_suffix(", 4K ultra HD, photorealistic")
                .unwrap()
                .split(", ")
                .collect();
            assert_eq!(terms.len(), 3);
            assert_ne!(terms[0], terms[1]);
            assert_ne!(terms[1], terms[2]);
            assert_ne!(terms[0], terms[2]);
        }
    }

    #[test]
    fn test_recommendation_short_form_vertical() {
        let rec = recommended_config("make me a tiktok video");
        assert_eq!(rec.aspect_ratio, Some(AspectRatio::Portrait));
        assert_eq!(rec.duration, Some(ClipDuration::Secs10));
        assert_eq!(rec.resolution, None);
    }

    #[test]
    fn test_recommendation_youtube() {
        let rec = recommended_config("youtube vlog intro");
        assert_eq!(rec.aspect_ratio, Some(AspectRatio::Landscape));
        assert_eq!(rec.duration, Some(ClipDuration::Secs15));
        assert_eq!(rec.resolution, None);
    }

    #[test]
    fn test_recommendation_instagram_post() {
        let rec = recommended_config("an Instagram clip of my coffee shop");
        assert_eq!(rec.aspect_ratio, Some(AspectRatio::Square));
        assert_eq!(rec.duration, Some(ClipDuration::Secs10));
    }

    #[test]
    fn test_recommendation_instagram_story_hits_vertical_rule() {
        // "story" wins over "instagram": rule order is part of the contract.
        let rec = recommended_config("instagram story");
        assert_eq!(rec.aspect_ratio, Some(AspectRatio::Portrait));
        assert_eq!(rec.duration, Some(ClipDuration::Secs10));
    }

    #[test]
    fn test_recommendation_default() {
        let rec = recommended_config("a sailboat crossing a calm bay");
        assert_eq!(rec.aspect_ratio, Some(AspectRatio::Landscape));
        assert_eq!(rec.duration, Some(ClipDuration::Secs10));
        assert_eq!(rec.resolution, Some(Resolution::Hd720));
    }

    #[test]
    fn test_recommendation_is_case_insensitive() {
        let rec = recommended_config("A TikTok Reel");
        assert_eq!(rec.aspect_ratio, Some(AspectRatio::Portrait));
    }
}
