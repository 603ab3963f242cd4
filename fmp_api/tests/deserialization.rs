use fmp_api::schema::{parse_records, Record};
use fmp_api::types::{CompanyProfile, CryptoNews, IncomeStatement, Quote};
use fmp_api::SchemaValidationError;
use serde_json::{json, Value};

fn load_fixture(name: &str) -> Value {
    let raw = std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn deserialize_profile_full() {
    let profiles: Vec<CompanyProfile> = parse_records(&load_fixture("profile.json")).unwrap();
    assert_eq!(profiles.len(), 1);

    let profile = &profiles[0];
    assert_eq!(profile.symbol, "AAPL");
    assert_eq!(profile.company_name, "Apple Inc.");
    assert_eq!(profile.vol_avg, Some(58405568));
    assert_eq!(profile.mkt_cap, Some(2794144143933.0));
    assert_eq!(profile.full_time_employees.as_deref(), Some("164000"));
    assert_eq!(profile.ceo.as_deref(), Some("Mr. Timothy D. Cook"));
    assert_eq!(profile.is_etf, Some(false));
    assert_eq!(profile.is_actively_trading, Some(true));
}

#[test]
fn deserialize_quote_minimal() {
    let quotes: Vec<Quote> = parse_records(&json!([{"symbol": "AAPL", "price": 150}])).unwrap();
    assert_eq!(quotes[0].price, 150.0);
    assert_eq!(quotes[0].name, None);
    assert_eq!(quotes[0].market_cap, None);
}

#[test]
fn deserialize_income_statements() {
    let statements: Vec<IncomeStatement> =
        parse_records(&load_fixture("income_statement.json")).unwrap();
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].revenue, Some(383285000000.0));
    assert_eq!(statements[0].accepted_date, "2023-11-02 18:08:27");
    assert_eq!(statements[1].cost_of_revenue, None);
}

#[test]
fn deserialize_crypto_news_with_null_image() {
    let news: Vec<CryptoNews> = parse_records(&load_fixture("crypto_news.json")).unwrap();
    assert_eq!(news[0].publisher, "CoinDesk");
    assert_eq!(news[1].image, None);
}

#[test]
fn wire_object_reads_back_through_canonical_fields() {
    let value = json!({"symbol": "BTCUSD", "name": "Bitcoin USD", "price": 42000.5, "volume": 1234});
    let quote = Quote::from_json(&value).unwrap();
    for (wire, expected) in value.as_object().unwrap() {
        let canonical = Quote::schema().canonical_name(wire).unwrap();
        let serialized = serde_json::to_value(&quote).unwrap();
        assert_eq!(&serialized[canonical], expected);
    }
}

#[test]
fn missing_required_field_is_named() {
    let err = Quote::from_json(&json!({"price": 1.0})).unwrap_err();
    assert_eq!(
        err,
        SchemaValidationError::MissingField {
            entity: "Quote",
            field: "symbol",
            wire: "symbol",
        }
    );
}

#[test]
fn non_array_payload_is_rejected() {
    let err = parse_records::<Quote>(&json!({"symbol": "AAPL"})).unwrap_err();
    assert!(matches!(err, SchemaValidationError::UnexpectedShape { .. }));
}
