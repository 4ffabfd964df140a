//! Offline demo generation example. No credential required.
//!
//! Run with: `cargo run --example demo_mode`

use veogen::{DemoGenerator, GenerationRequest, VideoConfig};

#[tokio::main]
async fn main() {
    let demo = DemoGenerator::new();
    let request = GenerationRequest::new(
        "An animated rabbit hopping through a colorful landscape",
        VideoConfig::default(),
    );

    let outcome = demo
        .generate_with_progress(&request, |percent| println!("progress: {percent}%"))
        .await;

    match outcome.video_url() {
        Some(url) => println!("sample video ready: {url}"),
        None => println!("demo failed: {}", outcome.error().unwrap_or("unknown")),
    }
    println!("cost shown to the user: ${:.2}", outcome.estimated_cost());
}
