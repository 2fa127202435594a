use serde::Serialize;

/// One author entry as parsed from an EFetch response
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct RawAuthor {
    /// Author fore name (given name)
    pub fore_name: Option<String>,
    /// Author last name (family name)
    pub last_name: Option<String>,
    /// Free-text affiliation, first one listed for this author
    pub affiliation: Option<String>,
}

impl RawAuthor {
    /// Display name: fore name and last name joined by a single space,
    /// omitting either part when absent. Empty string when both are absent.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.fore_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();
        parts.join(" ")
    }
}

/// One article as returned by EFetch, before classification
///
/// Fields missing from the source XML default to empty strings. Instances
/// are ephemeral: constructed per fetch response and consumed immediately
/// into [`PaperRecord`](crate::paper::PaperRecord).
#[derive(Debug, Serialize, Clone, Default)]
pub struct RawArticle {
    /// PubMed ID
    pub pmid: String,
    /// Article title
    pub title: String,
    /// Publication year
    pub pub_date: String,
    /// Authors in document order
    pub authors: Vec<RawAuthor>,
}
