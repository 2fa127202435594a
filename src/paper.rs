//! Classified paper records
//!
//! Applies the affiliation classifier to each author of a raw article and
//! aggregates the results into one immutable record per paper.

use serde::Serialize;

use crate::classify::{extract_company, extract_email, is_non_academic};
use crate::pubmed::RawArticle;

/// A paper whose authors have been run through the affiliation classifier
///
/// Immutable once constructed. Author and company lists preserve author
/// order; the company list may contain duplicates when several authors share
/// an affiliation.
#[derive(Debug, Serialize, Clone)]
pub struct PaperRecord {
    /// PubMed ID
    pub pmid: String,
    /// Article title
    pub title: String,
    /// Publication year
    pub pub_date: String,
    /// Display names of authors classified non-academic
    pub non_academic_authors: Vec<String>,
    /// Company names extracted from non-academic affiliations
    pub company_affiliations: Vec<String>,
    /// First email address found across all authors, in author order
    pub corresponding_email: Option<String>,
}

impl PaperRecord {
    /// Classify every author of `article` and aggregate the results
    pub fn from_article(article: RawArticle) -> Self {
        let mut non_academic_authors = Vec::new();
        let mut company_affiliations = Vec::new();
        let mut corresponding_email = None;

        for author in &article.authors {
            let affiliation = author.affiliation.as_deref().unwrap_or("");

            if is_non_academic(affiliation) {
                non_academic_authors.push(author.display_name());
                if let Some(company) = extract_company(affiliation) {
                    company_affiliations.push(company);
                }
            }

            // First email across all authors wins, regardless of the
            // academic check above
            if corresponding_email.is_none() {
                corresponding_email = extract_email(affiliation);
            }
        }

        Self {
            pmid: article.pmid,
            title: article.title,
            pub_date: article.pub_date,
            non_academic_authors,
            company_affiliations,
            corresponding_email,
        }
    }

    /// True when at least one author was classified non-academic
    ///
    /// Only records for which this holds are emitted in the final output.
    pub fn has_industry_author(&self) -> bool {
        !self.non_academic_authors.is_empty()
    }
}
