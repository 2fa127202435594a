//! # paperscout
//!
//! Find PubMed papers with at least one author affiliated with a
//! non-academic (commercial) institution.
//!
//! The crate queries the NCBI E-utilities API in two sequential steps
//! (ESearch for PMIDs, EFetch for article metadata), runs a heuristic
//! affiliation classifier over every author, and keeps only the papers
//! with at least one non-academic author.
//!
//! ## Quick start
//!
//! ```no_run
//! use paperscout::{PaperRecord, PubMedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::new();
//!
//!     let pmids = client.search("cancer immunotherapy", 100).await?;
//!     let articles = client.fetch_details(&pmids).await?;
//!
//!     let papers: Vec<PaperRecord> = articles
//!         .into_iter()
//!         .map(PaperRecord::from_article)
//!         .filter(PaperRecord::has_industry_author)
//!         .collect();
//!
//!     for paper in papers {
//!         println!("{}: {}", paper.pmid, paper.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod output;
pub mod paper;
pub mod pubmed;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{Result, RetrievalError};
pub use paper::PaperRecord;
pub use pubmed::{PubMedClient, RawArticle, RawAuthor};
