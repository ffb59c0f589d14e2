use clap::Parser;
use pageviews::{Pageviews, PageviewsError};
use pageviews_demos::common::{RangeArgs, get_connector};
use pageviews_demos::render;

#[derive(Debug, Parser)]
#[command(about = "Compare daily pageviews of two Wikipedia articles")]
struct Cli {
    /// First article URL.
    #[arg(long, default_value = "https://en.wikipedia.org/wiki/Python_(programming_language)")]
    url1: String,
    /// Second article URL.
    #[arg(long, default_value = "https://en.wikipedia.org/wiki/Java_(programming_language)")]
    url2: String,
    #[command(flatten)]
    range: RangeArgs,
    /// Seed for the simulated share columns.
    #[arg(long, default_value_t = pageviews_core::DEFAULT_SHARE_SEED)]
    seed: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let pv = Pageviews::builder()
        .with_connector(get_connector()?)
        .share_seed(cli.seed)
        .build()?;

    println!("Starting analysis...");
    if let (Some(a), Some(b)) = (pv.extract_title(&cli.url1), pv.extract_title(&cli.url2)) {
        println!("\nFetching data for '{a}' and '{b}' ...");
    }

    match pv.compare(&cli.url1, &cli.url2, &cli.range.range()).await {
        Ok(cmp) => {
            for w in &cmp.warnings {
                println!("warning: {w}");
            }
            println!("\nMerged table (Pageviews & Simulated Shares):");
            print!("{}", render::table(&cmp.series));
            print!("{}", render::charts(&cmp.series));
            println!("\nNote: share counts are simulated, not real data.");
        }
        // Both are expected outcomes of bad URLs or empty ranges, not failures of the demo.
        Err(e @ PageviewsError::BadInput { .. }) => {
            println!("Error: Could not extract page title from one or both URLs.");
            println!("  {e}");
        }
        Err(e @ PageviewsError::NoData { .. }) => {
            println!("No data available for one or both pages. Check your URLs or date range.");
            for w in e.flatten() {
                println!("  {w}");
            }
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
