use std::net::TcpListener;
use std::time::Duration;

use fmp_api::types::{Interval, Period};
use fmp_api::{
    Client, ClientConfig, DateRange, Error, Method, NewsQuery, Params, Query, ScreenerQuery, StatementQuery,
    SymbolPlacement,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), "test-key").unwrap()
}

async fn only_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

#[tokio::test]
async fn quote_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/quote"))
        .and(query_param("symbol", "AAPL"))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("quote.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let quotes = client(&mock_server).market().quote("AAPL").await.unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].symbol, "AAPL");
    assert_eq!(quotes[0].price, 150.0);
    assert_eq!(quotes[0].volume, Some(52164534));
}

#[tokio::test]
async fn execute_returns_payload_unmodified() {
    let mock_server = MockServer::start().await;
    let body = json!([{"symbol": "AAPL", "price": 150.0, "extra": {"nested": true}}]);

    Mock::given(method("GET"))
        .and(path("/quote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let value = client
        .gateway()
        .execute(Method::GET, "quote", Params::new().with("symbol", "AAPL"))
        .await
        .unwrap();
    assert_eq!(value, body);
}

#[tokio::test]
async fn crypto_intraday_derives_prices_from_bars() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/historical-chart/5min"))
        .and(query_param("symbol", "BTCUSD"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("chart_5min.json")))
        .mount(&mock_server)
        .await;

    let prices = client(&mock_server)
        .crypto()
        .crypto_intraday("BTCUSD", Interval::FiveMin, &DateRange::new())
        .await
        .unwrap();
    assert_eq!(prices.len(), 1);
    assert_eq!(prices[0].symbol, "BTCUSD");
    assert_eq!(prices[0].price, 42000.0);
    assert_eq!(prices[0].volume, Some(10.0));
    assert_eq!(prices[0].date, "2024-01-02 10:05:00");
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = Client::with_base_url(&format!("http://127.0.0.1:{}", port), "secret-key").unwrap();

    let err = client.market().quote("AAPL").await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert!(!err.is_api_error());
    let chain = format!("{:?}", err);
    assert!(!chain.contains("secret-key"));
}

#[tokio::test]
async fn timeout_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/quote"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("quote.json"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new("test-key")
        .with_base_url(&mock_server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = Client::with_config(config).unwrap();

    let err = client.market().quote("AAPL").await.unwrap_err();
    match err {
        Error::Network(source) => assert!(source.is_timeout()),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn unauthorized_is_authentication_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).company().profile("AAPL").await.unwrap_err();
    assert!(matches!(err, Error::Authentication { status: 401, .. }));
    assert!(err.is_api_error());
    assert_eq!(err.message(), Some("Invalid API key"));
}

#[tokio::test]
async fn forbidden_is_authentication_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Premium endpoint"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).market().quote("AAPL").await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(
        err.message(),
        Some("Access forbidden - check your API key permissions")
    );
}

#[tokio::test]
async fn server_error_carries_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/quote"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).market().quote("AAPL").await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, Some(500));
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn in_band_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"Error Message": "Limit Reach"})),
        )
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).market().quote("AAPL").await.unwrap_err();
    assert!(matches!(err, Error::Api { .. }));
    assert_eq!(err.message(), Some("Limit Reach"));
}

#[tokio::test]
async fn malformed_json_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).market().quote("AAPL").await.unwrap_err();
    assert!(matches!(err, Error::Json { status: 200, .. }));
}

#[tokio::test]
async fn list_validation_fails_fast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("malformed_quotes.json")),
        )
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).market().quote("AAPL").await.unwrap_err();
    match err {
        Error::Schema(schema) => {
            // The second item's string price is reported, not the third's missing one.
            assert_eq!(schema.field(), Some("price"));
            assert!(schema.to_string().contains("expected float, found string"));
        }
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[tokio::test]
async fn object_where_list_expected_is_schema_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"symbol": "AAPL"})))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).company().profile("AAPL").await.unwrap_err();
    assert!(matches!(err, Error::Schema(_)));
}

#[tokio::test]
async fn screener_serializes_booleans_and_omits_unset_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company-screener"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("screener.json")))
        .mount(&mock_server)
        .await;

    let query = ScreenerQuery::default()
        .with_sector("Technology")
        .with_is_etf(false)
        .with_is_actively_trading(true)
        .with_limit(5);
    let results = client(&mock_server)
        .company()
        .screen_stocks(&query)
        .await
        .unwrap();
    assert_eq!(results[0].company_name, "Microsoft Corporation");
    assert_eq!(results[0].last_annual_dividend, Some(3.0));

    let request = only_request(&mock_server).await;
    assert_eq!(
        request.url.query(),
        Some("sector=Technology&isEtf=false&isActivelyTrading=true&limit=5&apikey=test-key")
    );
}

#[tokio::test]
async fn caller_apikey_is_replaced_by_configured_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stock/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let params = Params::new().with("apikey", "attacker").with("exchange", "NYSE");
    client.gateway().get("/stock/list", params).await.unwrap();

    let request = only_request(&mock_server).await;
    let keys: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
    assert_eq!(
        keys,
        vec![
            ("exchange".to_string(), "NYSE".to_string()),
            ("apikey".to_string(), "test-key".to_string()),
        ]
    );
}

#[tokio::test]
async fn income_statement_symbol_in_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/income-statement/AAPL"))
        .and(query_param("period", "annual"))
        .and(query_param("limit", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("income_statement.json")),
        )
        .mount(&mock_server)
        .await;

    let query = StatementQuery::new("AAPL").with_limit(2);
    let statements = client(&mock_server)
        .financials()
        .income_statement(&query)
        .await
        .unwrap();
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].eps_diluted, Some(6.13));
    assert_eq!(statements[1].ebitda_ratio, None);
    assert_eq!(statements[1].calendar_year.as_deref(), Some("2022"));
}

#[tokio::test]
async fn balance_sheet_symbol_in_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance-sheet-statement"))
        .and(query_param("symbol", "MSFT"))
        .and(query_param("period", "quarter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let query = StatementQuery::new("MSFT")
        .with_period(Period::Quarter)
        .with_placement(SymbolPlacement::Query);
    let sheets = client(&mock_server)
        .financials()
        .balance_sheet(&query)
        .await
        .unwrap();
    assert!(sheets.is_empty());
}

#[tokio::test]
async fn crypto_news_search_defaults_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/news/crypto"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("crypto_news.json")))
        .mount(&mock_server)
        .await;

    let news = client(&mock_server)
        .crypto()
        .search_crypto_news(&NewsQuery::for_symbols("BTCUSD"))
        .await
        .unwrap();
    assert_eq!(news.len(), 2);
    assert_eq!(news[1].image, None);

    let request = only_request(&mock_server).await;
    assert_eq!(
        request.url.query(),
        Some("symbols=BTCUSD&page=0&limit=20&apikey=test-key")
    );
}

#[tokio::test]
async fn stock_news_leaves_pagination_to_the_api() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/news/stock"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    client(&mock_server)
        .company()
        .search_stock_news(&NewsQuery::for_symbols("AAPL"))
        .await
        .unwrap();

    let request = only_request(&mock_server).await;
    assert_eq!(request.url.query(), Some("symbols=AAPL&apikey=test-key"));
}

#[tokio::test]
async fn cik_search_keeps_path_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cik_search/0000320193"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"cik": "0000320193"}])))
        .mount(&mock_server)
        .await;

    let value = client(&mock_server)
        .company()
        .search_by_cik("0000320193")
        .await
        .unwrap();
    assert_eq!(value[0]["cik"], "0000320193");
}

#[tokio::test]
async fn cik_search_escapes_reserved_characters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    client(&mock_server)
        .company()
        .search_by_cik("123?apikey=x")
        .await
        .unwrap();

    let request = only_request(&mock_server).await;
    assert_eq!(request.url.path(), "/cik_search/123%3Fapikey%3Dx");
    assert_eq!(request.url.query(), Some("apikey=test-key"));
}

#[tokio::test]
async fn calls_after_close_fail() {
    let mock_server = MockServer::start().await;
    let client = client(&mock_server);

    client.close();
    let err = client.market().quote("AAPL").await.unwrap_err();
    assert!(matches!(err, Error::Closed));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
