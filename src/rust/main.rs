use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use goemotions::gauge::GaugeSpec;
use goemotions::{gauge, ColorMap, Dashboard, DashboardConfig, Submission, PRESETS};
use log::info;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to analyze
    #[arg(short, long, conflicts_with = "preset")]
    text: Option<String>,

    /// Analyze one of the example sentences (1-based, see --list-presets)
    #[arg(short, long)]
    preset: Option<usize>,

    /// Print the example sentences and exit
    #[arg(long)]
    list_presets: bool,

    /// Skip the hate-speech classifier
    #[arg(long)]
    no_hate: bool,

    /// Print each submission as JSON instead of gauges
    #[arg(long)]
    json: bool,

    /// Per-call timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[derive(Serialize)]
struct Report<'a> {
    submission: &'a Submission,
    gauges: Vec<GaugeSpec>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the key may come from the real environment.
    let _ = dotenvy::dotenv();
    goemotions::init_logger();
    let args = Args::parse();

    if args.list_presets {
        for (i, preset) in PRESETS.iter().enumerate() {
            println!("{}. {}", i + 1, preset);
        }
        return Ok(());
    }

    let mut config = DashboardConfig::from_env();
    if args.no_hate {
        config = config.with_hate_speech(false);
    }
    if let Some(secs) = args.timeout_secs {
        if secs == 0 {
            bail!("--timeout-secs must be greater than zero");
        }
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let dashboard = Dashboard::new(config).context("Failed to set up dashboard")?;
    let settings = dashboard.config();
    info!("Emotion endpoint: {}", settings.emotion.url);
    if settings.hate_speech {
        info!("Hate-speech endpoint: {}", settings.hate.url);
    }

    let single = match (args.text, args.preset) {
        (Some(text), _) => Some(text),
        (None, Some(n)) => {
            let preset = n
                .checked_sub(1)
                .and_then(|i| PRESETS.get(i))
                .with_context(|| format!("Preset must be between 1 and {}", PRESETS.len()))?;
            Some(preset.to_string())
        }
        (None, None) => None,
    };

    if let Some(text) = single {
        return process_input(&dashboard, &text, args.json).await;
    }

    info!("=== Reading submissions from stdin ===");
    eprintln!("Enter text to analyze emotions (one submission per line, Ctrl-D to quit).");
    eprintln!("Try: {}", PRESETS[0]);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        // A failed submission is reported and the next line is still served.
        if let Err(e) = process_input(&dashboard, &line, args.json).await {
            eprintln!("\nError processing text: {:#}", e);
        }
    }

    Ok(())
}

async fn process_input(dashboard: &Dashboard, text: &str, json: bool) -> Result<()> {
    let start = Instant::now();
    let submission = dashboard.submit(text).await?;
    info!("Submission completed in {:.2?}", start.elapsed());

    if json {
        let gauges = gauge::layout(&submission.emotions, ColorMap::builtin());
        let report = Report {
            submission: &submission,
            gauges,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n{}", gauge::render_submission(&submission, ColorMap::builtin()));
    }

    Ok(())
}
