//! End-to-end generation example.
//!
//! Run with: `cargo run --example generate`
//!
//! Requires the `GOOGLE_API_KEY` environment variable.

use veogen::{
    optimize_prompt, recommended_config, validate_prompt, GenerationOutcome, GenerationRequest,
    VeoClient, VideoConfig, VideoGenerator,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let raw = "A drone shot over a misty mountain lake at dawn for my youtube vlog";
    if let Err(e) = validate_prompt(raw) {
        eprintln!("invalid prompt: {e}");
        return;
    }

    let config = recommended_config(raw).apply_to(VideoConfig::default());
    let request = GenerationRequest::new(optimize_prompt(raw), config);

    let client = VeoClient::builder().build();
    if !client.is_configured() {
        eprintln!("set GOOGLE_API_KEY to run this example");
        return;
    }

    println!("Prompt: {}", request.prompt);
    println!("Estimated cost: ${:.2}", request.estimated_cost());
    println!("Generating video (this may take a few minutes)...");

    match client.generate(&request).await {
        GenerationOutcome::Completed {
            video_url,
            thumbnail_url,
            generation_id,
            estimated_cost,
        } => {
            println!("Generated video {generation_id}: {video_url}");
            println!("Thumbnail: {thumbnail_url}");
            println!("Cost: ${estimated_cost:.2}");
        }
        GenerationOutcome::Failed {
            error,
            estimated_cost,
        } => {
            println!("Generation failed (would have cost ${estimated_cost:.2}): {error}");
        }
    }
}
