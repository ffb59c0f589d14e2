use clap::Parser;
use pageviews::{FetchStrategy, Pageviews};
use pageviews_demos::common::{RangeArgs, get_connector};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Debug, Parser)]
#[command(about = "Run one comparison with tracing spans printed to stderr")]
struct Cli {
    #[arg(long, default_value = "https://en.wikipedia.org/wiki/Rust_(programming_language)")]
    url1: String,
    #[arg(long, default_value = "https://en.wikipedia.org/wiki/Python_(programming_language)")]
    url2: String,
    #[command(flatten)]
    range: RangeArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,pageviews=trace,pageviews_wikimedia=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    // Create connector (mock in CI when PAGEVIEWS_DEMOS_USE_MOCK is set) and build the orchestrator
    let pv = Pageviews::builder()
        .with_connector(get_connector()?)
        .fetch_strategy(FetchStrategy::Concurrent)
        .build()?;

    let cmp = pv.compare(&cli.url1, &cli.url2, &cli.range.range()).await?;
    tracing::info!(rows = cmp.series.len(), warnings = cmp.warnings.len(), "comparison done");
    println!("{} rows compared.", cmp.series.len());

    Ok(())
}
