use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{Result, RetrievalError};

use super::models::RawArticle;
use super::parser::{parse_articles_from_xml, parse_pmids_from_xml};

/// Client for the PubMed E-utilities API
///
/// Issues the two retrieval calls the tool needs: an ESearch request that
/// returns PMIDs for a query, and an EFetch request that returns article
/// metadata for a list of PMIDs. Calls are strictly sequential; there is no
/// retry, caching, or rate limiting.
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
}

impl PubMedClient {
    /// Create a new client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use paperscout::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use paperscout::{ClientConfig, PubMedClient};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::new().with_timeout(Duration::from_secs(10));
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.effective_base_url().to_string(),
        }
    }

    /// Create a new client with a custom HTTP client and the default base URL
    pub fn with_client(client: Client) -> Self {
        let config = ClientConfig::new();
        Self {
            client,
            base_url: config.effective_base_url().to_string(),
        }
    }

    /// Search PubMed for articles matching `query`
    ///
    /// Returns at most `max_results` PMIDs in the order the API lists them.
    ///
    /// # Errors
    ///
    /// * [`RetrievalError::RequestError`] - the HTTP call failed
    /// * [`RetrievalError::ApiError`] - the API returned a non-2xx status
    /// * [`RetrievalError::XmlError`] - the response XML could not be parsed
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paperscout::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let pmids = client.search("cancer immunotherapy", 100).await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, max_results = max_results))]
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=xml",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        debug!("Making ESearch API request");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(
                "Search request failed with status: {}",
                response.status()
            );
            return Err(RetrievalError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        let xml = response.text().await?;
        let pmids = parse_pmids_from_xml(&xml)?;

        info!(results_found = pmids.len(), "Search completed");

        Ok(pmids)
    }

    /// Fetch article metadata for the given PMIDs
    ///
    /// An empty PMID list returns an empty vector without making a network
    /// call. Articles are returned in document order; fields missing from
    /// the response degrade to empty defaults.
    ///
    /// # Errors
    ///
    /// Same as [`search`](Self::search).
    #[instrument(skip(self, pmids), fields(id_count = pmids.len()))]
    pub async fn fetch_details(&self, pmids: &[String]) -> Result<Vec<RawArticle>> {
        if pmids.is_empty() {
            debug!("No PMIDs provided, skipping EFetch request");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url,
            pmids.join(",")
        );

        debug!("Making EFetch API request");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(
                "Fetch request failed with status: {}",
                response.status()
            );
            return Err(RetrievalError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        let xml = response.text().await?;
        let articles = parse_articles_from_xml(&xml)?;

        info!(articles_parsed = articles.len(), "Fetch completed");

        Ok(articles)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
