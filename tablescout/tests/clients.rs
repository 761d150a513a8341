//! Wire-level tests for the HTTP collaborators, against a local mock server.

use httpmock::prelude::*;
use serde_json::json;
use tablescout::clients::{
    HttpPageFetcher, IpApiLocator, OpenAiCompatClient, TavilySearch, BROWSER_USER_AGENT,
};
use tablescout_core::{
    ChatModel, ChatRequest, LocationResolver, Message, PageFetcher, ScoutError, SearchProvider,
};

#[tokio::test]
async fn chat_client_maps_a_completion() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer test-key")
            .json_body_partial(r#"{"model": "gpt-4o-mini", "stream": false}"#);
        then.status(200).json_body(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "A short friendly question"}}
            ]
        }));
    });

    let client = OpenAiCompatClient::builder("test-key")
        .base_url(server.base_url())
        .build()
        .expect("client");

    let response = client
        .complete(ChatRequest::new(vec![Message::user("hi")]))
        .await
        .expect("complete");

    assert_eq!(response.content, "A short friendly question");
    mock.assert();
}

#[tokio::test]
async fn chat_client_surfaces_api_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(401).json_body(json!({
            "error": {"message": "Incorrect API key provided"}
        }));
    });

    let client = OpenAiCompatClient::builder("bad-key")
        .base_url(server.base_url())
        .build()
        .expect("client");

    let err = client
        .complete(ChatRequest::new(vec![Message::user("hi")]))
        .await
        .expect_err("must fail");

    match err {
        ScoutError::ChatModel(detail) => {
            assert!(detail.contains("401"));
            assert!(detail.contains("Incorrect API key provided"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn chat_client_rejects_empty_choices() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(json!({"choices": []}));
    });

    let client = OpenAiCompatClient::builder("test-key")
        .base_url(server.base_url())
        .build()
        .expect("client");

    let err = client
        .complete(ChatRequest::new(vec![Message::user("hi")]))
        .await
        .expect_err("must fail");
    assert!(matches!(err, ScoutError::ChatModel(_)));
}

#[tokio::test]
async fn tavily_caps_results_at_five() {
    let server = MockServer::start();
    let results: Vec<_> = (1..=7)
        .map(|n| {
            json!({
                "title": format!("Result {n}"),
                "url": format!("https://maps.example/{n}"),
                "content": format!("Restaurant number {n}"),
                "score": 0.9
            })
        })
        .collect();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/search")
            .json_body_partial(r#"{"query": "best pizza", "max_results": 5}"#);
        then.status(200).json_body(json!({ "results": results }));
    });

    let client = TavilySearch::with_base_url("tavily-key", server.base_url()).expect("client");
    let hits = client.search("best pizza").await.expect("search");

    assert_eq!(hits.len(), 5);
    assert_eq!(hits[0].title, "Result 1");
    assert_eq!(hits[4].url, "https://maps.example/5");
    mock.assert();
}

#[tokio::test]
async fn tavily_reports_http_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/search");
        then.status(500);
    });

    let client = TavilySearch::with_base_url("tavily-key", server.base_url()).expect("client");
    let err = client.search("anything").await.expect_err("must fail");
    assert!(matches!(err, ScoutError::SearchProvider(_)));
}

#[tokio::test]
async fn ip_locator_formats_city_region_country() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/json/");
        then.status(200).json_body(json!({
            "city": "Curitiba",
            "region": "PR",
            "countryCode": "BR"
        }));
    });

    let locator = IpApiLocator::with_base_url(server.base_url()).expect("locator");
    let location = locator.resolve().await.expect("resolve");

    assert_eq!(location, "Curitiba, PR (BR)");
    mock.assert();
}

#[tokio::test]
async fn fetcher_sends_a_browser_identity_and_strips_markup() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/menu")
            .header("user-agent", BROWSER_USER_AGENT);
        then.status(200)
            .header("content-type", "text/html")
            .body(
                "<html><head><script>var t = 'beacon';</script></head>\
                 <body><h1>Nonna Mia</h1><p>Fresh pasta daily.</p></body></html>",
            );
    });

    let fetcher = HttpPageFetcher::new().expect("fetcher");
    let text = fetcher
        .fetch(&server.url("/menu"))
        .await
        .expect("fetch");

    assert!(text.contains("Nonna Mia"));
    assert!(text.contains("Fresh pasta daily."));
    assert!(!text.contains("beacon"));
    mock.assert();
}

#[tokio::test]
async fn fetcher_reports_http_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/menu");
        then.status(403);
    });

    let fetcher = HttpPageFetcher::new().expect("fetcher");
    let err = fetcher
        .fetch(&server.url("/menu"))
        .await
        .expect_err("must fail");
    assert!(err.to_string().contains("403"));
}
