#![warn(missing_docs)]
//! veogen - text-to-video generation with Google's Veo models.
//!
//! This crate wraps the Veo text-to-video service behind a small client and
//! bundles the prompt tooling around it: validation, stylistic enrichment,
//! keyword-based configuration hints, and cost estimation.
//!
//! # Quick Start
//!
//! ```no_run
//! use veogen::{GenerationRequest, VeoClient, VideoConfig, VideoGenerator};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut client = VeoClient::new();
//!     client.set_api_key("your-api-key");
//!
//!     let prompt = veogen::optimize_prompt("A drone shot over a misty mountain lake");
//!     let request = GenerationRequest::new(prompt, VideoConfig::default());
//!
//!     let outcome = client.generate(&request).await;
//!     match outcome.video_url() {
//!         Some(url) => println!("video ready: {url}"),
//!         None => eprintln!("failed: {}", outcome.error().unwrap_or("unknown")),
//!     }
//! }
//! ```
//!
//! # Demo mode
//!
//! Without a credential, [`DemoGenerator`] runs the same flow locally with
//! simulated progress and a sample clip, so callers can exercise the full
//! generate path offline:
//!
//! ```no_run
//! use veogen::{DemoGenerator, GenerationRequest, VideoConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let demo = DemoGenerator::new();
//!     let request = GenerationRequest::new("A cat playing with a ball", VideoConfig::default());
//!     let outcome = demo
//!         .generate_with_progress(&request, |percent| println!("{percent}%"))
//!         .await;
//!     assert!(outcome.is_completed());
//! }
//! ```

pub mod config;
mod error;
pub mod generation;
pub mod prompt;

// Re-export error types at crate root
pub use error::{Result, VeoGenError};

// Re-export commonly used configuration types
pub use config::{
    calculate_cost, flat_price, format_duration, AspectRatio, ClipDuration, RecommendedConfig,
    Resolution, VideoConfig,
};

// Re-export prompt utilities
pub use prompt::{
    optimize_prompt, recommended_config, validate_prompt, PromptError, MAX_PROMPT_CHARS,
    MIN_PROMPT_CHARS,
};

// Re-export generation types
pub use generation::{
    ApiLimits, DemoGenerator, GenerationOutcome, GenerationRequest, GenerationTier, GeneratorKind,
    SampleVideo, VeoClient, VeoClientBuilder, VideoGenerator, SAMPLE_VIDEOS,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{AspectRatio, ClipDuration, Resolution, VideoConfig};
    pub use crate::error::{Result, VeoGenError};
    pub use crate::generation::{
        DemoGenerator, GenerationOutcome, GenerationRequest, GenerationTier, VeoClient,
        VideoGenerator,
    };
    pub use crate::prompt::{optimize_prompt, recommended_config, validate_prompt};
}
