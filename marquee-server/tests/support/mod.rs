#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum_test::TestServer;
use marquee_config::{Config, ConfigMetadata, EnvConfig, compose_config};
use marquee_core::{
    MediaKind, MetadataProvider, ProviderReply, TransportError,
    providers::{RawDetails, RawSearchPage},
};
use marquee_server::{AppState, create_router};
use serde_json::{Value, json};

/// What the stub answers with.
#[derive(Debug, Clone)]
pub enum Scripted {
    Body(Value),
    Timeout,
    HttpStatus(u16),
}

impl Scripted {
    fn reply<T: serde::de::DeserializeOwned>(
        &self,
    ) -> Result<ProviderReply<T>, TransportError> {
        match self {
            Scripted::Body(value) => ProviderReply::from_value(value.clone()),
            Scripted::Timeout => Err(TransportError::Timeout),
            Scripted::HttpStatus(code) => Err(TransportError::Status(*code)),
        }
    }
}

#[derive(Debug)]
pub struct StubProvider {
    search: Scripted,
    details: Scripted,
    calls: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self {
            search: Scripted::Body(json!({ "page": 1, "total_pages": 1, "results": [] })),
            details: Scripted::Body(json!({})),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_search(mut self, search: Scripted) -> Self {
        self.search = search;
        self
    }

    pub fn with_details(mut self, details: Scripted) -> Self {
        self.details = details;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataProvider for StubProvider {
    async fn search(
        &self,
        kind: MediaKind,
        query: &str,
        page: u32,
    ) -> Result<ProviderReply<RawSearchPage>, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("search {kind} {query} {page}"));
        self.search.reply()
    }

    async fn details(
        &self,
        kind: MediaKind,
        id: u64,
    ) -> Result<ProviderReply<RawDetails>, TransportError> {
        self.calls.lock().unwrap().push(format!("details {kind} {id}"));
        self.details.reply()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

pub fn test_config() -> Result<Config> {
    let env = EnvConfig {
        tmdb_api_key: Some("test-token".into()),
        server_host: Some("127.0.0.1".into()),
        server_port: Some("0".into()),
        ..Default::default()
    };
    Ok(compose_config(None, env, ConfigMetadata::default())?.config)
}

pub fn build_server(provider: Arc<StubProvider>) -> Result<TestServer> {
    build_server_with_config(provider, test_config()?)
}

pub fn build_server_with_config(
    provider: Arc<StubProvider>,
    config: Config,
) -> Result<TestServer> {
    let state = AppState::with_provider(config, provider);
    let router = create_router(state);
    TestServer::builder()
        .http_transport()
        .build(router.into_make_service())
        .map_err(|err| anyhow!(err.to_string()))
}

/// Three Batman movies across five pages, deliberately unsorted.
pub fn batman_page() -> Value {
    json!({
        "page": 1,
        "total_pages": 5,
        "total_results": 97,
        "results": [
            {
                "id": 268,
                "original_title": "Batman",
                "release_date": "1989-06-23",
                "popularity": 40.1,
                "vote_average": 7.2
            },
            {
                "id": 414906,
                "original_title": "The Batman",
                "release_date": "2022-03-01",
                "popularity": 95.5,
                "vote_average": 7.7
            },
            {
                "id": 2661,
                "original_title": "Batman: The Movie",
                "release_date": null,
                "popularity": null,
                "vote_average": 6.3
            }
        ]
    })
}

pub fn invalid_key_envelope() -> Value {
    json!({
        "status_code": 46,
        "status_message": "Invalid API key",
        "success": false
    })
}
