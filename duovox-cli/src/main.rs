use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use duovox_core::config::Config;
use duovox_core::pipeline;
use duovox_core::script::parser::ContinuationPolicy;
use duovox_core::tts::gemini::GeminiSynthesizer;

#[derive(Parser, Debug)]
#[command(name = "duovox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Synthesize a two-speaker dialogue script into a WAV file")]
struct Args {
    /// Path to the script file (`Name: utterance` per line, exactly two
    /// distinct speakers)
    script_path: PathBuf,

    /// Output filename; `.wav` is appended if missing. Defaults to a name
    /// derived from the two speakers.
    #[arg(short, long, value_name = "NAME")]
    output: Option<String>,
}

fn main() -> Result<()> {
    setup_tracing();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    // The credential check comes before the script file is touched.
    let config = Config::from_env()?;

    let script_text = std::fs::read_to_string(&args.script_path)
        .with_context(|| format!("failed to read script file {}", args.script_path.display()))?;

    info!(script = %args.script_path.display(), "starting synthesis run");

    let synthesizer = GeminiSynthesizer::new(&config)?;
    let path = pipeline::run(
        &script_text,
        args.output.as_deref(),
        ContinuationPolicy::Append,
        &synthesizer,
        &config,
    )
    .await?;

    println!("{}", path.display());
    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
