//! Integration tests for the PubMed client using mocked HTTP responses
//!
//! These tests verify the ESearch and EFetch request handling without making
//! real API calls. They use wiremock to simulate NCBI E-utilities responses.

use paperscout::{ClientConfig, PubMedClient, RetrievalError};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a client pointing at a mock server
fn create_mock_client(mock_server: &MockServer) -> PubMedClient {
    let config = ClientConfig::new().with_base_url(mock_server.uri());
    PubMedClient::with_config(config)
}

fn xml_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/xml")
}

#[tokio::test]
#[traced_test]
async fn test_search_returns_pmids_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "cancer immunotherapy"))
        .and(query_param("retmax", "100"))
        .and(query_param("retmode", "xml"))
        .respond_with(xml_response(
            r#"<eSearchResult>
                 <Count>3</Count>
                 <IdList>
                   <Id>31978945</Id>
                   <Id>33515491</Id>
                   <Id>25760099</Id>
                 </IdList>
               </eSearchResult>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);

    let pmids = client
        .search("cancer immunotherapy", 100)
        .await
        .expect("Search should succeed");

    assert_eq!(pmids, vec!["31978945", "33515491", "25760099"]);
}

#[tokio::test]
#[traced_test]
async fn test_search_non_success_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);

    let result = client.search("anything", 10).await;

    match result {
        Err(RetrievalError::ApiError { status, .. }) => assert_eq!(status, 500),
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_parses_articles() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", "31978945,33515491"))
        .and(query_param("retmode", "xml"))
        .respond_with(xml_response(
            r#"<PubmedArticleSet>
                 <PubmedArticle>
                   <MedlineCitation>
                     <PMID>31978945</PMID>
                     <Article>
                       <Journal>
                         <JournalIssue><PubDate><Year>2020</Year></PubDate></JournalIssue>
                       </Journal>
                       <ArticleTitle>Industry-sponsored trial</ArticleTitle>
                       <AuthorList>
                         <Author>
                           <LastName>Lee</LastName>
                           <ForeName>Carol</ForeName>
                           <AffiliationInfo>
                             <Affiliation>Pfizer Inc., New York, NY, USA</Affiliation>
                           </AffiliationInfo>
                         </Author>
                       </AuthorList>
                     </Article>
                   </MedlineCitation>
                 </PubmedArticle>
                 <PubmedArticle>
                   <MedlineCitation>
                     <PMID>33515491</PMID>
                     <Article>
                       <ArticleTitle>Academic study</ArticleTitle>
                     </Article>
                   </MedlineCitation>
                 </PubmedArticle>
               </PubmedArticleSet>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);

    let pmids = vec!["31978945".to_string(), "33515491".to_string()];
    let articles = client
        .fetch_details(&pmids)
        .await
        .expect("Fetch should succeed");

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].pmid, "31978945");
    assert_eq!(articles[0].title, "Industry-sponsored trial");
    assert_eq!(articles[0].pub_date, "2020");
    assert_eq!(articles[0].authors.len(), 1);
    assert_eq!(articles[1].pmid, "33515491");
    assert_eq!(articles[1].pub_date, "");
    assert!(articles[1].authors.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_empty_input_makes_no_request() {
    let mock_server = MockServer::start().await;

    // Any request reaching the server fails the test on drop
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);

    let articles = client
        .fetch_details(&[])
        .await
        .expect("Empty fetch should succeed");

    assert!(articles.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_non_success_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);

    let pmids = vec!["31978945".to_string()];
    let result = client.fetch_details(&pmids).await;

    match result {
        Err(RetrievalError::ApiError { status, .. }) => assert_eq!(status, 503),
        other => panic!("Expected ApiError, got {other:?}"),
    }
}
