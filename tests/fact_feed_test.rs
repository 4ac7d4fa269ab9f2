//! Integration tests for the cat fact feed
//!
//! Drives the full action: trigger → background service → response handler,
//! with a scripted transport in place of the network.

mod common;

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Notify;

use common::MockTransport;
use fetchdeck::api::DEFAULT_FACT_URL;
use fetchdeck::handlers::{handle_api_response, trigger_fact};
use fetchdeck::logic::errors::FetchError;
use fetchdeck::logic::formatting::MISSING_FACT_TEXT;
use fetchdeck::model::Model;
use fetchdeck::services::api::spawn_api_service;

/// Test: A successful fetch renders the fact text and puts it above older facts
#[tokio::test]
async fn test_fact_is_prepended() {
    let transport = MockTransport::new();
    transport.reply(
        DEFAULT_FACT_URL,
        r#"{"fact":"Cats have five toes on their front paws.","length":40}"#,
    );
    transport.reply(
        DEFAULT_FACT_URL,
        r#"{"fact":"A group of cats is called a clowder.","length":36}"#,
    );

    let (tx, mut rx) = spawn_api_service(common::client(transport.clone()));
    let mut model = Model::default();

    trigger_fact(&mut model, &tx);
    handle_api_response(&mut model, rx.recv().await.unwrap());
    trigger_fact(&mut model, &tx);
    handle_api_response(&mut model, rx.recv().await.unwrap());

    let texts: Vec<&str> = model.feed.nodes().map(|n| n.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "A group of cats is called a clowder.",
            "Cats have five toes on their front paws."
        ]
    );
    assert_eq!(transport.calls(), vec![DEFAULT_FACT_URL, DEFAULT_FACT_URL]);
    assert_eq!(model.ui.in_flight, 0);
}

/// Test: The node keeps the fact byte for byte, whitespace included
#[tokio::test]
async fn test_fact_text_is_stored_verbatim() {
    let transport = MockTransport::new();
    transport.reply(DEFAULT_FACT_URL, r#"{"fact":"Cats  have\nwhiskers."}"#);

    let (tx, mut rx) = spawn_api_service(common::client(transport));
    let mut model = Model::default();

    trigger_fact(&mut model, &tx);
    handle_api_response(&mut model, rx.recv().await.unwrap());

    let node = model.feed.newest().expect("a node for the fact");
    assert!(!node.missing);
    assert_eq!(node.text, "Cats  have\nwhiskers.");
}

/// Test: Two triggers before either response arrives both render, in arrival order
#[tokio::test]
async fn test_double_trigger_renders_both_responses() {
    let transport = MockTransport::new();
    let gate = Arc::new(Notify::new());
    transport.reply_after(DEFAULT_FACT_URL, r#"{"fact":"slow fact"}"#, gate.clone());
    transport.reply(DEFAULT_FACT_URL, r#"{"fact":"fast fact"}"#);

    let (tx, mut rx) = spawn_api_service(common::client(transport));
    let mut model = Model::default();

    let first = trigger_fact(&mut model, &tx).unwrap();
    let second = trigger_fact(&mut model, &tx).unwrap();
    assert_ne!(first, second);
    assert_eq!(model.ui.in_flight, 2);

    // Only the ungated reply can arrive now
    let early = rx.recv().await.unwrap();
    handle_api_response(&mut model, early);
    assert_eq!(model.feed.len(), 1);

    gate.notify_one();
    let late = rx.recv().await.unwrap();
    let late_seq = late.seq();
    handle_api_response(&mut model, late);

    assert_eq!(model.feed.len(), 2);
    assert_eq!(model.feed.newest().map(|n| n.seq), Some(late_seq));
    let texts: HashSet<&str> = model.feed.nodes().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, HashSet::from(["slow fact", "fast fact"]));
    assert_eq!(model.ui.in_flight, 0);
}

/// Test: A payload without `fact` renders a visible placeholder instead of crashing
#[tokio::test]
async fn test_missing_fact_field_renders_placeholder() {
    let transport = MockTransport::new();
    transport.reply(DEFAULT_FACT_URL, "{}");

    let (tx, mut rx) = spawn_api_service(common::client(transport));
    let mut model = Model::default();

    trigger_fact(&mut model, &tx);
    handle_api_response(&mut model, rx.recv().await.unwrap());

    let node = model.feed.newest().expect("a node for the empty answer");
    assert!(node.missing);
    assert_eq!(node.text, MISSING_FACT_TEXT);
}

/// Test: A network failure leaves the feed untouched and surfaces a toast
#[tokio::test]
async fn test_network_failure_is_contained() {
    let transport = MockTransport::new();
    transport.fail(DEFAULT_FACT_URL, FetchError::network("dns lookup failed"));

    let (tx, mut rx) = spawn_api_service(common::client(transport));
    let mut model = Model::default();

    trigger_fact(&mut model, &tx);
    handle_api_response(&mut model, rx.recv().await.unwrap());

    assert!(model.feed.is_empty());
    let (toast, _) = model.ui.toast_message.as_ref().expect("toast shown");
    assert!(toast.starts_with("Error:"));
    assert!(model.ui.last_error.is_some());
}

/// Test: Non-JSON bodies count as malformed, not as network errors
#[tokio::test]
async fn test_html_body_is_malformed() {
    let transport = MockTransport::new();
    transport.reply(DEFAULT_FACT_URL, "<html>502 Bad Gateway</html>");

    let (tx, mut rx) = spawn_api_service(common::client(transport));
    let mut model = Model::default();

    trigger_fact(&mut model, &tx);
    let response = rx.recv().await.unwrap();
    assert!(response.error().is_some_and(FetchError::is_malformed));
    handle_api_response(&mut model, response);
    assert_eq!(model.feed.len(), 1);
}
