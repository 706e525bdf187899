//! End-to-end tests: chat command → both provider clients (against
//! `wiremock`) → merged report.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use abvcheck_scraper::{BordershopClient, SystembolagetClient};
use abvcheck_search::{
    handle_message, Aggregator, Requester, SearchRateLimiter, HELP_TEXT, NO_RESULTS_MESSAGE,
    THROTTLED_MESSAGE,
};

const TEST_UA: &str = "Mozilla/5.0 (abvcheck-test)";

type TestAggregator = Aggregator<BordershopClient, SystembolagetClient>;

fn aggregator(server: &MockServer, min_interval: Duration) -> TestAggregator {
    let bordershop =
        BordershopClient::new(&format!("{}/bordershop/search?", server.uri()), 5, TEST_UA)
            .expect("failed to build BordershopClient");
    let systembolaget = SystembolagetClient::new(
        &format!("{}/systembolaget/search", server.uri()),
        "test-key",
        5,
        TEST_UA,
    )
    .expect("failed to build SystembolagetClient");

    Aggregator::new(
        bordershop,
        systembolaget,
        Arc::new(SearchRateLimiter::new(min_interval)),
    )
}

fn requester() -> Requester {
    Requester {
        username: Some("olsen".to_owned()),
        first_name: Some("Egon".to_owned()),
    }
}

async fn mount_bordershop(server: &MockServer, term: &str, names: &[&str]) {
    let products: Vec<_> = names.iter().map(|n| json!({ "displayName": n })).collect();
    Mock::given(method("GET"))
        .and(path("/bordershop/search"))
        .and(query_param("term", term))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "products": products })))
        .mount(server)
        .await;
}

async fn mount_systembolaget(server: &MockServer, term: &str, products: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/systembolaget/search"))
        .and(query_param("textQuery", term))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "products": products })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn tuborg_scenario_renders_one_line_per_provider() {
    let server = MockServer::start().await;
    mount_bordershop(&server, "Tuborg", &["Tuborg Grøn 5,2%"]).await;
    mount_systembolaget(
        &server,
        "Tuborg",
        json!([{
            "productNameBold": "Tuborg",
            "productNameThin": "Grøn",
            "categoryLevel1": "Öl",
            "alcoholPercentage": 5.2
        }]),
    )
    .await;

    let agg = aggregator(&server, Duration::ZERO);
    let reply = handle_message(&agg, "/search Tuborg", &requester()).await;

    assert_eq!(
        reply.as_deref(),
        Some(
            "\u{2705} Tuborg Grøn 5,2% (source Bordershop)\n\
             \u{2705} Tuborg Grøn 5.2% (source Systembolaget)\n"
        )
    );
}

#[tokio::test]
async fn failing_provider_yields_partial_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bordershop/search"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;
    mount_systembolaget(
        &server,
        "Pripps",
        json!([
            { "productNameBold": "Pripps", "productNameThin": "Blå", "categoryLevel1": "Öl", "alcoholPercentage": 3.5 },
            { "productNameBold": "Pripps", "productNameThin": "Cider", "categoryLevel1": "Cider & blanddrycker", "alcoholPercentage": 4.5 }
        ]),
    )
    .await;

    let agg = aggregator(&server, Duration::ZERO);
    let reply = handle_message(&agg, "/search Pripps", &requester())
        .await
        .expect("command should produce a reply");

    assert_eq!(reply, "\u{274C} Pripps Blå 3.5% (source Systembolaget)\n");
}

#[tokio::test]
async fn both_providers_down_yields_no_results_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let agg = aggregator(&server, Duration::ZERO);
    let reply = handle_message(&agg, "/search Tuborg", &requester()).await;
    assert_eq!(reply.as_deref(), Some(NO_RESULTS_MESSAGE));
}

#[tokio::test]
async fn empty_search_uses_requester_username() {
    let server = MockServer::start().await;
    mount_bordershop(&server, "olsen", &["Olsen Bryg 6,0%"]).await;
    mount_systembolaget(&server, "olsen", json!([])).await;

    let agg = aggregator(&server, Duration::ZERO);
    let reply = handle_message(&agg, "/search", &requester()).await;
    assert_eq!(
        reply.as_deref(),
        Some("\u{2705} Olsen Bryg 6,0% (source Bordershop)\n")
    );
}

#[tokio::test]
async fn second_search_within_interval_is_throttled() {
    let server = MockServer::start().await;
    mount_bordershop(&server, "Tuborg", &["Tuborg Grøn 5,2%"]).await;
    mount_systembolaget(&server, "Tuborg", json!([])).await;

    let agg = aggregator(&server, Duration::from_secs(60));
    let first = handle_message(&agg, "/search Tuborg", &requester()).await;
    assert!(first.is_some_and(|r| r.contains("Tuborg Grøn")));

    let second = handle_message(&agg, "/search Tuborg", &requester()).await;
    assert_eq!(second.as_deref(), Some(THROTTLED_MESSAGE));

    let received = server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), 2, "throttled search must not hit providers");
}

#[tokio::test]
async fn help_and_unknown_commands_skip_providers() {
    let server = MockServer::start().await;
    let agg = aggregator(&server, Duration::ZERO);

    let help = handle_message(&agg, "/help", &requester()).await;
    assert_eq!(help.as_deref(), Some(HELP_TEXT));

    let unknown = handle_message(&agg, "/start", &requester()).await;
    assert_eq!(unknown.as_deref(), Some(""));

    let chatter = handle_message(&agg, "cheers", &requester()).await;
    assert!(chatter.is_none());

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}
