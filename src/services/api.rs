use tokio::sync::mpsc;

use crate::api::{ApiClient, CatFact, GenderGuess, Message};
use crate::logic::errors::FetchError;
use crate::utils::log_debug;

/// One outbound GET, constructed at trigger time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Random cat fact for the feed
    FetchFact { seq: u64 },

    /// Gender inference for an already-validated name
    Genderize { seq: u64, name: String },

    /// Full message list for the board
    ListMessages { seq: u64 },
}

impl ApiRequest {
    pub fn seq(&self) -> u64 {
        match self {
            ApiRequest::FetchFact { seq }
            | ApiRequest::Genderize { seq, .. }
            | ApiRequest::ListMessages { seq } => *seq,
        }
    }
}

/// Outcome of one request, delivered back to the UI loop
#[derive(Debug, Clone)]
pub enum ApiResponse {
    FactResult {
        seq: u64,
        fact: Result<CatFact, FetchError>,
    },

    GenderResult {
        seq: u64,
        name: String,
        guess: Result<GenderGuess, FetchError>,
    },

    MessagesResult {
        seq: u64,
        messages: Result<Vec<Message>, FetchError>,
    },
}

impl ApiResponse {
    pub fn seq(&self) -> u64 {
        match self {
            ApiResponse::FactResult { seq, .. }
            | ApiResponse::GenderResult { seq, .. }
            | ApiResponse::MessagesResult { seq, .. } => *seq,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            ApiResponse::FactResult { fact, .. } => fact.as_ref().err(),
            ApiResponse::GenderResult { guess, .. } => guess.as_ref().err(),
            ApiResponse::MessagesResult { messages, .. } => messages.as_ref().err(),
        }
    }
}

/// API service worker
///
/// Every request gets its own task: nothing is queued behind a slow
/// response, nothing is de-duplicated, and responses come back in arrival
/// order.
pub struct ApiService {
    client: ApiClient,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
}

impl ApiService {
    pub fn new(client: ApiClient, response_tx: mpsc::UnboundedSender<ApiResponse>) -> Self {
        Self {
            client,
            response_tx,
        }
    }

    /// Start one request in the background
    pub fn dispatch(&self, request: ApiRequest) {
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();

        tokio::spawn(async move {
            let response = execute_request(&client, request).await;
            // The receiver only goes away on shutdown
            let _ = response_tx.send(response);
        });
    }
}

/// Execute an API request and return the response
pub async fn execute_request(client: &ApiClient, request: ApiRequest) -> ApiResponse {
    log_debug(&format!("DEBUG [API Service]: START {:?}", request));

    let response = match request {
        ApiRequest::FetchFact { seq } => ApiResponse::FactResult {
            seq,
            fact: client.fetch_fact().await,
        },

        ApiRequest::Genderize { seq, name } => {
            let guess = client.genderize(&name).await;
            ApiResponse::GenderResult { seq, name, guess }
        }

        ApiRequest::ListMessages { seq } => ApiResponse::MessagesResult {
            seq,
            messages: client.list_messages().await,
        },
    };

    match response.error() {
        Some(e) => log_debug(&format!(
            "DEBUG [API Service]: END seq={} error={}",
            response.seq(),
            e
        )),
        None => log_debug(&format!("DEBUG [API Service]: END seq={} ok", response.seq())),
    }

    response
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: ApiClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        let service = ApiService::new(client, response_tx);
        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }
        log_debug("DEBUG [API Service]: request channel closed, worker exiting");
    });

    (request_tx, response_rx)
}
