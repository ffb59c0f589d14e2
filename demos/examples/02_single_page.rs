use clap::Parser;
use pageviews::Pageviews;
use pageviews_demos::common::{RangeArgs, get_connector};
use pageviews_demos::render;

#[derive(Debug, Parser)]
#[command(about = "Fetch and print the daily pageviews of one article")]
struct Cli {
    /// Article URL.
    #[arg(long, default_value = "https://en.wikipedia.org/wiki/Rust_(programming_language)")]
    url: String,
    #[command(flatten)]
    range: RangeArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let pv = Pageviews::builder().with_connector(get_connector()?).build()?;

    let Some(title) = pv.extract_title(&cli.url) else {
        println!("Error: Could not extract page title from {}", cli.url);
        return Ok(());
    };

    let report = pv.pageviews(&title, &cli.range.range()).await;
    for w in &report.warnings {
        println!("warning: {w}");
    }
    if report.is_empty() {
        println!("No data available for {title}.");
        return Ok(());
    }

    println!("## {title}");
    println!("{:<12} | {:>10}", "date", "views");
    println!("{:-<13}|{:-<11}", "", "");
    for r in &report.series.records {
        println!("{:<12} | {:>10}", r.date.format("%Y-%m-%d").to_string(), r.views);
    }
    let views: Vec<Option<u64>> = report.series.records.iter().map(|r| Some(r.views)).collect();
    println!("\n{}", render::sparkline(&views));

    Ok(())
}
