//! CSV output for filtered paper records

use std::io::Write;

use serde::Serialize;

use crate::paper::PaperRecord;

/// One CSV row; field order and renames define the output schema
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "PubmedID")]
    pubmed_id: &'a str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Publication Date")]
    publication_date: &'a str,
    #[serde(rename = "Non-academic Author(s)")]
    non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    corresponding_email: &'a str,
}

impl<'a> From<&'a PaperRecord> for CsvRow<'a> {
    fn from(paper: &'a PaperRecord) -> Self {
        Self {
            pubmed_id: &paper.pmid,
            title: &paper.title,
            publication_date: &paper.pub_date,
            non_academic_authors: paper.non_academic_authors.join(", "),
            company_affiliations: paper.company_affiliations.join(", "),
            corresponding_email: paper.corresponding_email.as_deref().unwrap_or(""),
        }
    }
}

/// Write `papers` as CSV to `writer`, header row first
pub fn write_csv<W: Write>(writer: W, papers: &[PaperRecord]) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for paper in papers {
        csv_writer.serialize(CsvRow::from(paper))?;
    }
    csv_writer.flush()?;
    Ok(())
}
