//! Behaviour tests for the service layer against a recording transport.
//!
//! Each test checks the request that reaches the wire (path, query, auth) and
//! how the canned response is decoded.

mod support;

use std::sync::Arc;

use chrono::Timelike;
use support::{client_with, RecordingHttpClient, TEST_BASE_URL};
use ticktape_core::{
    AggregatesRange, AggregatesRequest, ApiErrorKind, ContractsRequest, OptionTicker, OptionType,
    SortOrder, Symbol, TickersRequest, Timespan, ValidationError,
};
use time::macros::date;

const AGGS_BODY: &str = r#"{
    "ticker": "AAPL", "queryCount": 1, "resultsCount": 1, "adjusted": true,
    "results": [{"v": 70790813, "vw": 131.6292, "o": 130.465, "c": 130.15, "h": 133.41,
                 "l": 129.89, "t": 1673272800000, "n": 645365}],
    "status": "OK", "request_id": "req-1", "count": 1
}"#;

const CONTRACT_BODY: &str = r#"{
    "request_id": "req-2", "status": "OK",
    "results": {"cfi": "OCASPS", "contract_type": "call", "exercise_style": "american",
                "expiration_date": "2025-12-19", "primary_exchange": "BATO",
                "shares_per_contract": 100, "strike_price": 650,
                "ticker": "O:SPY251219C00650000", "underlying_ticker": "SPY"}
}"#;

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

// =============================================================================
// Stocks
// =============================================================================

#[tokio::test]
async fn aggregates_request_shapes_path_query_and_auth() {
    // Given: a client over a transport returning one bar
    let transport = Arc::new(RecordingHttpClient::json(AGGS_BODY));
    let client = client_with(transport.clone());
    let from = date!(2023 - 01 - 09);
    let range = AggregatesRange::new(1, Timespan::Hour, from, date!(2023 - 01 - 10))
        .expect("valid range")
        .with_sort(SortOrder::Desc)
        .with_limit(120)
        .expect("valid limit");

    // When: aggregates are requested
    let response = client
        .stocks()
        .aggregates(&AggregatesRequest::new(symbol("aapl"), range))
        .await
        .expect("aggregates should decode");

    // Then: the wire request carries the range in the path and options in the query
    let request = transport.last_request();
    assert_eq!(
        request.url,
        format!("{TEST_BASE_URL}/v2/aggs/ticker/AAPL/range/1/hour/2023-01-09/2023-01-10")
    );
    assert_eq!(request.query_value("sort"), Some("desc"));
    assert_eq!(request.query_value("limit"), Some("120"));
    assert_eq!(request.query_value("adjusted"), Some("true"));
    assert_eq!(
        request.headers.get("authorization").map(String::as_str),
        Some("Bearer test-key")
    );
    assert!(!request.full_url().contains("test-key"));

    // And: the bar exposes New York wall time (14:00Z is 09:00 EST)
    let bar = &response.results[0];
    let local = bar.market_time().expect("in range");
    assert_eq!((local.hour(), local.minute()), (9, 0));
}

#[tokio::test]
async fn previous_close_and_open_close_hit_their_endpoints() {
    let transport = Arc::new(RecordingHttpClient::json(AGGS_BODY));
    let client = client_with(transport.clone());

    client
        .stocks()
        .previous_close(&symbol("AAPL"), false)
        .await
        .expect("prev close should decode");
    let request = transport.last_request();
    assert_eq!(request.url, format!("{TEST_BASE_URL}/v2/aggs/ticker/AAPL/prev"));
    assert_eq!(request.query_value("adjusted"), Some("false"));

    let open_close = Arc::new(RecordingHttpClient::json(
        r#"{"close":325.12,"from":"2023-01-09","high":326.2,"low":322.3,"open":324.66,
            "status":"OK","symbol":"AAPL","volume":26122646}"#,
    ));
    let day = client_with(open_close.clone())
        .stocks()
        .daily_open_close(&symbol("AAPL"), date!(2023 - 01 - 09), true)
        .await
        .expect("open/close should decode");
    assert_eq!(day.close, 325.12);
    assert_eq!(
        open_close.last_request().url,
        format!("{TEST_BASE_URL}/v1/open-close/AAPL/2023-01-09")
    );
}

#[tokio::test]
async fn last_trade_unwraps_results() {
    let transport = Arc::new(RecordingHttpClient::json(
        r#"{"status":"OK","request_id":"r","results":{"T":"MSFT","p":402.5,"s":100,
            "t":1719840600000000000,"x":4}}"#,
    ));
    let trade = client_with(transport.clone())
        .stocks()
        .last_trade(&symbol("MSFT"))
        .await
        .expect("trade should decode");

    assert_eq!(trade.ticker, "MSFT");
    assert_eq!(trade.sip_market_time().hour(), 9);
    assert_eq!(
        transport.last_request().url,
        format!("{TEST_BASE_URL}/v2/last/trade/MSFT")
    );
}

// =============================================================================
// Options
// =============================================================================

#[tokio::test]
async fn contract_lookup_uses_canonical_symbol_in_path() {
    let transport = Arc::new(RecordingHttpClient::json(CONTRACT_BODY));
    let client = client_with(transport.clone());
    let ticker = OptionTicker::parse("O:SPY251219C00650000").expect("valid");

    let contract = client.options().contract(&ticker).await.expect("contract");

    assert_eq!(contract.ticker, ticker);
    assert_eq!(contract.shares_per_contract, Some(100));
    assert_eq!(
        transport.last_request().url,
        format!("{TEST_BASE_URL}/v3/reference/options/contracts/O:SPY251219C00650000")
    );
}

#[tokio::test]
async fn component_call_builds_ticker_before_requesting() {
    // Given: contract terms instead of a symbol
    let transport = Arc::new(RecordingHttpClient::json(CONTRACT_BODY));
    let client = client_with(transport.clone());

    // When: the component-based convenience call is used
    let contract = client
        .options()
        .contract_for("spy", date!(2025 - 12 - 19), OptionType::Call, 650.0)
        .await
        .expect("contract");

    // Then: the same canonical symbol reaches the wire
    assert_eq!(contract.underlying_ticker, "SPY");
    assert!(transport
        .last_request()
        .url
        .ends_with("/v3/reference/options/contracts/O:SPY251219C00650000"));
}

#[tokio::test]
async fn component_call_with_bad_terms_sends_nothing() {
    let transport = Arc::new(RecordingHttpClient::json(CONTRACT_BODY));
    let client = client_with(transport.clone());

    let error = client
        .options()
        .snapshot_for("TOOLONGX", date!(2025 - 12 - 19), OptionType::Put, 650.0)
        .await
        .expect_err("invalid underlying");

    assert_eq!(error.kind(), ApiErrorKind::InvalidRequest);
    assert!(transport.recorded_requests().is_empty());
}

#[tokio::test]
async fn previous_close_for_terms_uses_option_symbol() {
    let transport = Arc::new(RecordingHttpClient::json(AGGS_BODY));
    let client = client_with(transport.clone());

    client
        .options()
        .previous_close_for("f", date!(2025 - 01 - 17), OptionType::Put, 12.5)
        .await
        .expect("prev close");

    let request = transport.last_request();
    assert_eq!(
        request.url,
        format!("{TEST_BASE_URL}/v2/aggs/ticker/O:F250117P00012500/prev")
    );
    assert!(request.query.is_empty());
}

#[tokio::test]
async fn snapshot_path_includes_underlying_and_contract() {
    let transport = Arc::new(RecordingHttpClient::json(
        r#"{"status":"OK","request_id":"r","results":{
            "details":{"contract_type":"call","expiration_date":"2025-12-19","strike_price":650,
                       "ticker":"O:SPY251219C00650000"},
            "greeks":{"delta":0.55,"gamma":0.007,"theta":-0.018,"vega":0.72},
            "implied_volatility":0.18,"open_interest":8921,
            "underlying_asset":{"ticker":"SPY","price":601.2}}}"#,
    ));
    let client = client_with(transport.clone());
    let ticker = OptionTicker::parse("O:SPY251219C00650000").expect("valid");

    let snapshot = client.options().snapshot(&ticker).await.expect("snapshot");

    assert_eq!(snapshot.greeks.delta, Some(0.55));
    assert_eq!(snapshot.open_interest, Some(8921));
    assert_eq!(
        transport.last_request().url,
        format!("{TEST_BASE_URL}/v3/snapshot/options/SPY/O:SPY251219C00650000")
    );
}

#[tokio::test]
async fn contracts_listing_passes_filters_and_reports_pagination() {
    let transport = Arc::new(RecordingHttpClient::json(&format!(
        r#"{{"status":"OK","request_id":"r","results":[{}],
            "next_url":"https://api.polygon.io/v3/reference/options/contracts?cursor=abc"}}"#,
        r#"{"contract_type":"call","expiration_date":"2025-12-19","strike_price":650,
            "ticker":"O:SPY251219C00650000","underlying_ticker":"SPY"}"#
    )));
    let client = client_with(transport.clone());
    let request = ContractsRequest::for_underlying(symbol("SPY"))
        .with_contract_type(OptionType::Call)
        .with_expiration_date(date!(2025 - 12 - 19))
        .with_limit(250)
        .expect("valid limit");

    let page = client.options().contracts(&request).await.expect("page");

    assert_eq!(page.results.len(), 1);
    assert!(page.has_next_page());
    let wire = transport.last_request();
    assert_eq!(wire.query_value("underlying_ticker"), Some("SPY"));
    assert_eq!(wire.query_value("contract_type"), Some("call"));
    assert_eq!(wire.query_value("expiration_date"), Some("2025-12-19"));
    assert_eq!(wire.query_value("limit"), Some("250"));
}

#[tokio::test]
async fn option_aggregates_reuse_stock_endpoint_with_option_symbol() {
    let transport = Arc::new(RecordingHttpClient::json(AGGS_BODY));
    let client = client_with(transport.clone());
    let ticker = OptionTicker::parse("O:SPY251219C00650000").expect("valid");
    let range =
        AggregatesRange::daily(date!(2025 - 06 - 02), date!(2025 - 06 - 06)).expect("range");

    client
        .options()
        .aggregates(&ticker, &range)
        .await
        .expect("aggregates");

    assert_eq!(
        transport.last_request().url,
        format!("{TEST_BASE_URL}/v2/aggs/ticker/O:SPY251219C00650000/range/1/day/2025-06-02/2025-06-06")
    );
}

// =============================================================================
// Reference
// =============================================================================

#[tokio::test]
async fn ticker_search_encodes_query() {
    let transport = Arc::new(RecordingHttpClient::json(
        r#"{"status":"OK","request_id":"r","count":1,"results":[
            {"ticker":"AAPL","name":"Apple Inc.","market":"stocks","type":"CS","active":true}]}"#,
    ));
    let client = client_with(transport.clone());
    let request = TickersRequest::search("apple inc")
        .expect("valid search")
        .with_market("Stocks");

    let page = client.reference().tickers(&request).await.expect("tickers");

    assert_eq!(page.results[0].name, "Apple Inc.");
    let wire = transport.last_request();
    assert_eq!(wire.query_value("market"), Some("stocks"));
    assert!(wire.full_url().contains("search=apple%20inc"));
}

#[tokio::test]
async fn ticker_details_unwraps_results() {
    let transport = Arc::new(RecordingHttpClient::json(
        r#"{"status":"OK","request_id":"r","results":{"ticker":"BRK.B",
            "name":"Berkshire Hathaway Inc.","market":"stocks","type":"CS","active":true,
            "total_employees":396500,"address":{"city":"OMAHA","state":"NE"}}}"#,
    ));
    let details = client_with(transport.clone())
        .reference()
        .ticker_details(&symbol("brk.b"))
        .await
        .expect("details");

    assert_eq!(details.total_employees, Some(396_500));
    assert_eq!(
        details.address.and_then(|address| address.city).as_deref(),
        Some("OMAHA")
    );
    assert_eq!(
        transport.last_request().url,
        format!("{TEST_BASE_URL}/v3/reference/tickers/BRK.B")
    );
}

#[tokio::test]
async fn market_calendar_endpoints_decode() {
    let status_transport = Arc::new(RecordingHttpClient::json(
        r#"{"market":"open","serverTime":"2024-07-01T10:00:00-04:00","afterHours":false,
            "earlyHours":false,"exchanges":{"nyse":"open"}}"#,
    ));
    let status = client_with(status_transport)
        .reference()
        .market_status()
        .await
        .expect("status");
    assert!(status.is_open());

    let holidays_transport = Arc::new(RecordingHttpClient::json(
        r#"[{"exchange":"NYSE","name":"Christmas","date":"2025-12-25","status":"closed"}]"#,
    ));
    let holidays = client_with(holidays_transport.clone())
        .reference()
        .market_holidays()
        .await
        .expect("holidays");
    assert_eq!(holidays[0].date, date!(2025 - 12 - 25));
    assert_eq!(
        holidays_transport.last_request().url,
        format!("{TEST_BASE_URL}/v1/marketstatus/upcoming")
    );
}

// =============================================================================
// Request bounds
// =============================================================================

#[tokio::test]
async fn out_of_range_limits_never_reach_the_wire() {
    // Given: requests whose limits are pushed past their bounds
    let range = AggregatesRange::daily(date!(2024 - 01 - 02), date!(2024 - 01 - 05))
        .expect("valid range");
    let tickers = TickersRequest::search("apple").expect("valid search");
    let contracts = ContractsRequest::for_underlying(symbol("SPY"));

    // When / Then: each setter refuses the value
    assert_eq!(
        range.clone().with_limit(0),
        Err(ValidationError::LimitOutOfRange { value: 0, max: 50_000 })
    );
    assert_eq!(
        tickers.clone().with_limit(999_999),
        Err(ValidationError::LimitOutOfRange {
            value: 999_999,
            max: 1_000
        })
    );
    assert!(contracts.clone().with_limit(1_001).is_err());

    // And: what is sent keeps the validated defaults
    let transport = Arc::new(RecordingHttpClient::json(AGGS_BODY));
    let client = client_with(transport.clone());
    client
        .stocks()
        .aggregates(&AggregatesRequest::new(symbol("AAPL"), range.clone()))
        .await
        .expect("aggregates");
    let wire = transport.last_request();
    assert_eq!(wire.query_value("limit"), Some("5000"));
    assert!(wire.url.ends_with("/range/1/day/2024-01-02/2024-01-05"));
    assert_eq!(range.multiplier(), 1);
    assert!(range.from_date() <= range.to_date());
    assert_eq!(tickers.limit(), 100);
    assert_eq!(contracts.limit(), 100);
}
