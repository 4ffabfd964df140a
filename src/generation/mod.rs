//! Video generation: the live Veo client and the offline demo path.

mod demo;
mod generator;
mod types;
mod veo;

pub use demo::{DemoGenerator, SampleVideo, PROGRESS_STEP_PERCENT, SAMPLE_VIDEOS};
pub use generator::{GeneratorKind, VideoGenerator};
pub use types::{ApiLimits, GenerationOutcome, GenerationRequest, GenerationTier};
pub use veo::{VeoClient, VeoClientBuilder};
