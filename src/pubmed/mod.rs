//! PubMed retrieval adapter
//!
//! Issues the ESearch (query to PMIDs) and EFetch (PMIDs to article
//! metadata) calls against the NCBI E-utilities API and parses the XML
//! responses into raw article records.

pub mod client;
pub mod models;
pub(crate) mod parser;

// Re-export public types
pub use client::PubMedClient;
pub use models::{RawArticle, RawAuthor};
