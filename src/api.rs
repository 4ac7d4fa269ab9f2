use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::logic::errors::FetchError;

pub const DEFAULT_FACT_URL: &str = "https://catfact.ninja/fact";
pub const DEFAULT_GENDERIZE_URL: &str = "https://api.genderize.io/";
pub const DEFAULT_MESSAGES_URL: &str = "http://localhost:8000/api/messages/";

/// Response of the random-fact service
///
/// Only `fact` is rendered; the service's `length` is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatFact {
    pub fact: String,
}

/// Response of the name-gender-inference service
///
/// `gender` is `null` when the service has never seen the name. The echoed
/// `name` and the sample `count` are not displayed, so they are not decoded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenderGuess {
    #[serde(default)]
    pub gender: Option<String>,
    pub probability: f64,
}

/// Message ids are integers on the Django side but nothing guarantees it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MessageId {
    Int(i64),
    Text(String),
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageId::Int(id) => write!(f, "{}", id),
            MessageId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// One entry of the local message list
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
}

/// The three endpoints queried by the actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub fact_url: String,
    pub genderize_url: String,
    pub messages_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            fact_url: DEFAULT_FACT_URL.to_string(),
            genderize_url: DEFAULT_GENDERIZE_URL.to_string(),
            messages_url: DEFAULT_MESSAGES_URL.to_string(),
        }
    }
}

/// Performs a single GET and hands back the body of a 2xx response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Production transport backed by reqwest
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

/// Decode a response body into an endpoint schema
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Builds request URLs and decodes responses for each endpoint
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn genderize_url(&self, name: &str) -> String {
        let base = &self.endpoints.genderize_url;
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{}{}name={}", base, separator, urlencoding::encode(name))
    }

    pub async fn fetch_fact(&self) -> Result<CatFact, FetchError> {
        let body = self.transport.get(&self.endpoints.fact_url).await?;
        decode(&body)
    }

    pub async fn genderize(&self, name: &str) -> Result<GenderGuess, FetchError> {
        let body = self.transport.get(&self.genderize_url(name)).await?;
        decode(&body)
    }

    pub async fn list_messages(&self) -> Result<Vec<Message>, FetchError> {
        let body = self.transport.get(&self.endpoints.messages_url).await?;
        decode(&body)
    }
}
