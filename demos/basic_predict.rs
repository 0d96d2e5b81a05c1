//! Basic usage: classify one scan against a running prediction service.
//!
//! The service URL is read from SCANIX_API_URL (default http://localhost:5000).
//!
//! Usage:
//!   cargo run --example basic_predict -- path/to/scan.jpg

use scanix_client::{ClientConfig, PredictionClient, PredictionResult, UploadCandidate, UploadPolicy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: basic_predict <image>")?;

    let candidate = UploadCandidate::from_path(&path)?;
    UploadPolicy::default().check(&candidate)?;

    let client = PredictionClient::from_config(&ClientConfig::from_env())?;
    match client.predict(&candidate).await {
        PredictionResult::Success(p) => {
            println!("{} ({})", p.label().unwrap_or("?"), p.confidence_percent().unwrap_or_default());
            for (label, prob) in p.ranked_probabilities() {
                println!("  {label}: {:.3}", prob);
            }
        }
        PredictionResult::Failure { message } => eprintln!("Analysis failed: {message}"),
    }

    Ok(())
}
