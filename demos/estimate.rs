//! Cost estimation example: flat demo pricing next to live tier pricing.
//!
//! Run with: `cargo run --example estimate`

use veogen::{
    calculate_cost, AspectRatio, ClipDuration, GenerationTier, Resolution, VideoConfig,
};

fn main() {
    let durations = [
        ClipDuration::Secs5,
        ClipDuration::Secs10,
        ClipDuration::Secs15,
    ];
    let resolutions = [Resolution::Sd480, Resolution::Hd720, Resolution::FullHd1080];

    println!("{:>4} {:>6} {:>8} {:>10} {:>8}", "dur", "res", "demo", "standard", "fast");
    for duration in durations {
        for resolution in resolutions {
            let config = VideoConfig::new(duration, AspectRatio::Landscape, resolution);
            println!(
                "{:>3}s {:>6} {:>8.2} {:>10.2} {:>8.2}",
                duration.seconds(),
                resolution.as_str(),
                calculate_cost(&config),
                GenerationTier::Standard.estimate_cost(&config),
                GenerationTier::Fast.estimate_cost(&config),
            );
        }
    }
}
