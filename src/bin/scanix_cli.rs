//! scanix-cli: submit a brain MRI scan to the prediction service from the terminal.
//!
//! Usage:
//!   scanix-cli predict <image> [--url <base>] [--json] [--max-size-mb <n>]
//!   scanix-cli health [--url <base>]
//!   scanix-cli version

use anyhow::Context;
use scanix_client::{
    ClientConfig, Prediction, PredictionClient, PredictionResult, UploadCandidate, UploadPolicy,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let outcome = match args[1].as_str() {
        "predict" => cmd_predict(&args[2..]).await,
        "health" => cmd_health(&args[2..]).await,
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(true)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(true)
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"scanix-cli - brain MRI classification client

USAGE:
    scanix-cli <COMMAND> [OPTIONS]

COMMANDS:
    predict <image>             Upload a JPEG/PNG scan and print the prediction
        --url <base>            Prediction service base URL
        --json                  Print the raw result as JSON
        --max-size-mb <n>       Local upload limit (default 5)
    health [--url <base>]       Check that the prediction service is up
    version                     Show version information
    help                        Show this help message

ENVIRONMENT:
    SCANIX_API_URL              Prediction service base URL (default http://localhost:5000)
    VITE_API_URL                Fallback base URL
    SCANIX_PROXY_URL            Optional HTTP proxy
    RUST_LOG                    Log filter (default warn)"#
    );
}

fn cmd_version() {
    println!("scanix-cli {}", env!("CARGO_PKG_VERSION"));
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn build_client(args: &[String]) -> anyhow::Result<PredictionClient> {
    let mut config = ClientConfig::from_env();
    if let Some(url) = flag_value(args, "--url") {
        config.base_url = url.to_string();
    }
    Ok(PredictionClient::from_config(&config)?)
}

async fn cmd_predict(args: &[String]) -> anyhow::Result<bool> {
    let path = args
        .first()
        .filter(|a| !a.starts_with("--"))
        .context("predict needs an image path")?;

    let mut policy = UploadPolicy::default();
    if let Some(mb) = flag_value(args, "--max-size-mb") {
        let mb: f64 = mb.parse().context("--max-size-mb must be a number")?;
        policy = policy.with_max_size((mb * 1024.0 * 1024.0) as u64);
    }

    let candidate =
        UploadCandidate::from_path(path).with_context(|| format!("cannot read {path}"))?;
    if let Err(violation) = policy.check(&candidate) {
        eprintln!("{violation}");
        return Ok(false);
    }

    let client = build_client(args)?;
    eprintln!(
        "Analyzing {} ({} MB) via {} ...",
        candidate.filename(),
        candidate.size_mb(),
        client.predict_endpoint()
    );
    let result = client.predict(&candidate).await;

    if has_flag(args, "--json") {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result.is_success());
    }

    match &result {
        PredictionResult::Success(p) => print_prediction(p),
        PredictionResult::Failure { message } => {
            println!("Analysis Failed");
            println!("  {message}");
        }
    }
    Ok(result.is_success())
}

fn print_prediction(p: &Prediction) {
    println!("Analysis Complete");
    println!("  Prediction: {}", p.label().unwrap_or("(none)"));
    if let Some(pct) = p.confidence_percent() {
        println!("  Confidence: {pct}");
    }
    let ranked = p.ranked_probabilities();
    if !ranked.is_empty() {
        println!("  Detailed Analysis:");
        let width = ranked.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        for (label, prob) in ranked {
            let bar = "#".repeat((prob.clamp(0.0, 1.0) * 30.0).round() as usize);
            println!("    {label:<width$} {:>5.1}% {bar}", prob * 100.0);
        }
    }
    println!(
        "  Request: {} (api {}, at {})",
        p.metadata.request_id, p.metadata.api_version, p.metadata.processing_time
    );
}

async fn cmd_health(args: &[String]) -> anyhow::Result<bool> {
    let client = build_client(args)?;
    match client.health().await {
        Ok(h) => {
            println!("{}: {}", client.base_url(), h.status);
            Ok(h.is_healthy())
        }
        Err(e) => {
            println!("{}: {}", client.base_url(), e.user_message());
            Ok(false)
        }
    }
}
