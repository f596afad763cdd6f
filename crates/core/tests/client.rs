//! Tests for the request orchestrator and the two-stage markup wrap.

use anyhow::Result;
use lantern_core::{
    API_KEY, Choice, Client, Completions, CompletionRequest, CompletionResponse, MAX_TOKEN, MODEL,
    Prompter, Reply, Settings, Store,
};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct MemStore(Arc<Mutex<BTreeMap<String, String>>>);

impl MemStore {
    fn with_key() -> Self {
        let store = Self::default();
        store.set(API_KEY, "sk-test");
        store
    }

    fn set(&self, key: &str, value: &str) {
        self.0
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
    }
}

impl Store for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.lock().unwrap().get(key).cloned()
    }

    fn update(&self, key: &str, value: &str) {
        self.set(key, value);
    }
}

/// Never answers; a prompt here would mean key resolution leaked.
#[derive(Clone, Copy)]
struct Silent;

impl Prompter for Silent {
    fn prompt_text(&self, _message: &str) -> Option<String> {
        None
    }
}

/// Echoes each prompt back as the completion text and records the
/// requests it saw.
#[derive(Clone, Default)]
struct Echo {
    seen: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl Completions for Echo {
    async fn complete(
        &self,
        _api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(CompletionResponse {
            choices: vec![Choice {
                text: Value::String(request.prompt.clone()),
            }],
        })
    }
}

/// Always answers with the same first-choice text value.
#[derive(Clone)]
struct Fixed {
    text: Value,
}

impl Completions for Fixed {
    async fn complete(
        &self,
        _api_key: &str,
        _request: &CompletionRequest,
    ) -> Result<CompletionResponse> {
        Ok(CompletionResponse {
            choices: vec![Choice {
                text: self.text.clone(),
            }],
        })
    }
}

/// Answers with no choices at all.
#[derive(Clone, Copy)]
struct Empty;

impl Completions for Empty {
    async fn complete(
        &self,
        _api_key: &str,
        _request: &CompletionRequest,
    ) -> Result<CompletionResponse> {
        Ok(CompletionResponse::default())
    }
}

#[derive(Clone, Copy)]
struct Failing;

impl Completions for Failing {
    async fn complete(
        &self,
        _api_key: &str,
        _request: &CompletionRequest,
    ) -> Result<CompletionResponse> {
        anyhow::bail!("connection refused")
    }
}

fn client<L: Completions>(provider: L, store: MemStore) -> Client<L, MemStore, Silent> {
    Client::new(provider, Settings::new(store, Silent))
}

#[tokio::test]
async fn empty_prompt_returns_sentinel() {
    let client = client(Echo::default(), MemStore::with_key());
    let reply = client.request("").await;
    assert_eq!(reply, Reply::EmptyPrompt);
    assert_eq!(reply.into_message(), "typeof prompt === 'undefined'");
}

#[tokio::test]
async fn request_uses_configured_model_and_limit() {
    let store = MemStore::with_key();
    store.set(MODEL, "davinci");
    store.set(MAX_TOKEN, "512");
    let echo = Echo::default();
    let client = client(echo.clone(), store);

    let reply = client.request("explain this").await;
    assert_eq!(reply, Reply::Text("explain this".to_owned()));

    let seen = echo.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].model, "davinci");
    assert_eq!(seen[0].max_tokens, 512);
    assert_eq!(seen[0].temperature, 0);
    assert_eq!(seen[0].prompt, "explain this");
}

#[tokio::test]
async fn request_falls_back_to_defaults() {
    let echo = Echo::default();
    let client = client(echo.clone(), MemStore::with_key());

    client.request("hi").await;

    let seen = echo.seen.lock().unwrap();
    assert_eq!(seen[0].model, "gpt-3.5-turbo");
    assert_eq!(seen[0].max_tokens, 1000);
}

#[tokio::test]
async fn model_override_beats_stored_model() {
    let store = MemStore::with_key();
    store.set(MODEL, "davinci");
    let echo = Echo::default();
    let client = client(echo.clone(), store);

    client.request_with("hi", Some("gpt-4")).await;

    assert_eq!(echo.seen.lock().unwrap()[0].model, "gpt-4");
}

#[tokio::test]
async fn missing_key_aborts_before_the_provider() {
    let echo = Echo::default();
    let client = client(echo.clone(), MemStore::default());

    let reply = client.request("hi").await;
    assert_eq!(reply, Reply::MissingKey);
    assert!(echo.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn non_string_text_returns_sentinel() {
    let client = client(Fixed { text: json!(42) }, MemStore::with_key());

    let reply = client.request("hi").await;
    assert_eq!(reply, Reply::NotText);
    assert_eq!(
        reply.into_message(),
        "returned response from Open AI's API was not a string"
    );
}

#[tokio::test]
async fn missing_choices_return_sentinel() {
    let client = client(Empty, MemStore::with_key());
    assert_eq!(client.request("hi").await, Reply::NotText);
}

#[tokio::test]
async fn transport_failure_is_reported_not_raised() {
    let client = client(Failing, MemStore::with_key());

    match client.request("hi").await {
        Reply::Transport(message) => assert!(message.contains("connection refused")),
        other => panic!("expected transport reply, got {other:?}"),
    }
}

#[tokio::test]
async fn wrap_issues_exactly_two_sequential_calls() {
    let echo = Echo::default();
    let client = client(echo.clone(), MemStore::with_key());

    let wrapped = client.wrap_in_markup("some text").await;

    let seen = echo.seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    // Stage one carries the input text; stage two embeds stage
    // one's full output, so it cannot have been built earlier.
    assert!(seen[0].prompt.contains("some text"));
    assert!(seen[1].prompt.contains(&seen[0].prompt));
    // Stage one's output leads, stage two's follows.
    assert!(wrapped.starts_with(seen[0].prompt.as_str()));
    assert!(wrapped.ends_with(seen[1].prompt.as_str()));
}

#[tokio::test]
async fn wrap_output_carries_the_fixed_background() {
    let client = client(Echo::default(), MemStore::with_key());

    let wrapped = client.wrap_in_markup("anything").await;
    assert!(wrapped.contains("background-color: #000000;"));
}
