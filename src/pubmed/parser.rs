//! Event-driven parsers for E-utilities XML responses

use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::BufReader;

use crate::error::{Result, RetrievalError};

use super::models::{RawArticle, RawAuthor};

/// Parse an ESearch response, extracting every `<Id>` text in document order
pub(crate) fn parse_pmids_from_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(BufReader::new(xml.as_bytes()));
    reader.config_mut().trim_text(true);

    let mut pmids = Vec::new();
    let mut buf = Vec::new();
    let mut in_id = false;
    let mut current = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"Id" => {
                in_id = true;
                current.clear();
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"Id" => {
                if in_id {
                    pmids.push(std::mem::take(&mut current));
                    in_id = false;
                }
            }
            Ok(Event::Text(e)) if in_id => {
                current.push_str(&unescape_text(&e)?);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(RetrievalError::XmlError {
                    message: format!("XML parsing error: {}", e),
                });
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(pmids)
}

/// Parse an EFetch response into one [`RawArticle`] per `<PubmedArticle>`
///
/// PMID, title, and publication year are each taken from the first matching
/// element within the article subtree; later occurrences (e.g. PMIDs inside
/// `<CommentsCorrections>`) are ignored. Each `<Author>` contributes one
/// entry, with the affiliation taken from the first `<Affiliation>` inside
/// that author. Missing fields degrade to empty defaults, never errors.
pub(crate) fn parse_articles_from_xml(xml: &str) -> Result<Vec<RawArticle>> {
    let mut reader = Reader::from_reader(BufReader::new(xml.as_bytes()));
    reader.config_mut().trim_text(true);

    let mut articles = Vec::new();
    let mut buf = Vec::new();

    let mut article = RawArticle::default();
    let mut author: Option<RawAuthor> = None;

    let mut in_article = false;
    let mut in_pmid = false;
    let mut in_title = false;
    let mut in_pub_date = false;
    let mut in_year = false;
    let mut in_fore_name = false;
    let mut in_last_name = false;
    let mut in_affiliation = false;

    // First-match-wins flags, reset per article
    let mut pmid_seen = false;
    let mut title_seen = false;
    let mut year_seen = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"PubmedArticle" => {
                    in_article = true;
                    article = RawArticle::default();
                    pmid_seen = false;
                    title_seen = false;
                    year_seen = false;
                }
                b"PMID" if in_article && !pmid_seen => in_pmid = true,
                b"ArticleTitle" if in_article && !title_seen => in_title = true,
                b"PubDate" if in_article => in_pub_date = true,
                b"Year" if in_pub_date && !year_seen => in_year = true,
                b"Author" if in_article => author = Some(RawAuthor::default()),
                b"ForeName" if author.is_some() => in_fore_name = true,
                b"LastName" if author.is_some() => in_last_name = true,
                b"Affiliation" => {
                    // Only the first affiliation of each author is kept
                    if author.as_ref().is_some_and(|a| a.affiliation.is_none()) {
                        in_affiliation = true;
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"PubmedArticle" => {
                    if in_article {
                        articles.push(std::mem::take(&mut article));
                        in_article = false;
                    }
                }
                b"PMID" => {
                    if in_pmid {
                        in_pmid = false;
                        pmid_seen = true;
                    }
                }
                b"ArticleTitle" => {
                    if in_title {
                        in_title = false;
                        title_seen = true;
                    }
                }
                b"PubDate" => in_pub_date = false,
                b"Year" => {
                    if in_year {
                        in_year = false;
                        year_seen = true;
                    }
                }
                b"Author" => {
                    if let Some(done) = author.take() {
                        article.authors.push(done);
                    }
                }
                b"ForeName" => in_fore_name = false,
                b"LastName" => in_last_name = false,
                b"Affiliation" => in_affiliation = false,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                let text = unescape_text(&e)?;

                if in_pmid {
                    article.pmid.push_str(&text);
                } else if in_title {
                    article.title.push_str(&text);
                } else if in_year {
                    article.pub_date.push_str(&text);
                } else if in_fore_name {
                    if let Some(a) = author.as_mut() {
                        a.fore_name.get_or_insert_with(String::new).push_str(&text);
                    }
                } else if in_last_name {
                    if let Some(a) = author.as_mut() {
                        a.last_name.get_or_insert_with(String::new).push_str(&text);
                    }
                } else if in_affiliation {
                    if let Some(a) = author.as_mut() {
                        a.affiliation
                            .get_or_insert_with(String::new)
                            .push_str(&text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(RetrievalError::XmlError {
                    message: format!("XML parsing error: {}", e),
                });
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(articles)
}

fn unescape_text(e: &quick_xml::events::BytesText) -> Result<String> {
    e.unescape()
        .map(|text| text.into_owned())
        .map_err(|_| RetrievalError::XmlError {
            message: "Failed to decode XML text".to_string(),
        })
}
