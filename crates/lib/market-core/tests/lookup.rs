use market_core::client::{LookupError, OverviewClient};
use market_core::config::ProviderConfig;
use mockito::Matcher;

fn client_for(base_url: &str) -> OverviewClient {
    OverviewClient::new(ProviderConfig::new(base_url, "demo"))
}

fn overview_query(symbol: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("function".into(), "OVERVIEW".into()),
        Matcher::UrlEncoded("symbol".into(), symbol.into()),
        Matcher::UrlEncoded("apikey".into(), "demo".into()),
    ])
}

#[tokio::test]
async fn lookup_returns_fields_present_in_the_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/query")
        .match_query(overview_query("IBM"))
        .with_status(200)
        .with_body(r#"{"Symbol":"IBM","Name":"International Business Machines","Sector":"TECHNOLOGY"}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let overview = client.lookup("ibm").await.expect("lookup should succeed");

    assert_eq!(overview.symbol, "IBM");
    assert_eq!(overview.name, "International Business Machines");
    assert_eq!(overview.sector, "TECHNOLOGY");
    assert_eq!(overview.exchange, "");
    assert_eq!(overview.pe_ratio, "");
    assert_eq!(overview.dividend_date, "");
    mock.assert_async().await;
}

#[tokio::test]
async fn lookup_uppercases_the_symbol_before_querying() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/query")
        .match_query(overview_query("AAPL"))
        .with_status(200)
        .with_body("{}")
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server.url());
    client.lookup("aapl").await.expect("lowercase lookup should succeed");
    client.lookup("AAPL").await.expect("uppercase lookup should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn lookup_surfaces_non_success_status_codes() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/query")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"error":"internal"}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client.lookup("ibm").await.expect_err("lookup should fail");

    assert!(matches!(err, LookupError::UpstreamStatus { code: 500 }));
    assert_eq!(err.to_string(), "unexpected status code: 500");
}

#[tokio::test]
async fn lookup_rejects_bodies_that_are_not_json() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/query")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("service temporarily unavail")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client.lookup("ibm").await.expect_err("lookup should fail");

    assert!(matches!(err, LookupError::Decode(_)));
}

#[tokio::test]
async fn lookup_reports_unreachable_hosts_as_transport_errors() {
    let client = client_for("http://127.0.0.1:1");
    let err = client.lookup("ibm").await.expect_err("lookup should fail");

    assert!(matches!(err, LookupError::Transport(_)));
}
