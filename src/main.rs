use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use paperscout::output::write_csv;
use paperscout::{PaperRecord, PubMedClient};

/// Result cap for the ESearch call
const MAX_RESULTS: usize = 100;

#[derive(Parser)]
#[command(
    name = "paperscout",
    about = "Find PubMed papers with at least one author from a non-academic institution",
    long_about = "Fetches PubMed papers for QUERY, classifies author affiliations, and \
                  outputs the papers that have at least one non-academic author as CSV"
)]
struct Cli {
    /// Search query (PubMed query syntax)
    #[arg(value_name = "QUERY")]
    query: String,

    /// Filename to save results as CSV; prints to stdout if not provided
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Print debug information during execution
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let client = PubMedClient::new();

    debug!(query = %cli.query, "Fetching PubMed IDs");
    let pmids = client.search(&cli.query, MAX_RESULTS).await?;

    debug!(id_count = pmids.len(), "Found PubMed IDs, fetching details");
    let articles = client.fetch_details(&pmids).await?;

    let papers: Vec<PaperRecord> = articles
        .into_iter()
        .map(PaperRecord::from_article)
        .filter(PaperRecord::has_industry_author)
        .collect();
    debug!(
        paper_count = papers.len(),
        "Filtered to papers with non-academic authors"
    );

    match &cli.file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_csv(file, &papers)?;
            println!("Results saved to {}", path.display());
        }
        None => {
            write_csv(std::io::stdout(), &papers)?;
        }
    }

    Ok(())
}
