//! In-memory fakes for exercising the client without a network.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::ApiClient;
use crate::navigation::Navigator;
use crate::storage::MemoryTokenStore;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

pub const BASE_URL: &str = "http://api.test/api";

type Reply = Result<HttpResponse, TransportError>;

/// Replays queued replies per `(method, path)` and records every request.
/// Unrouted requests get a 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn reply(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.push(method, path, Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn reply_empty(&self, method: Method, path: &str, status: u16) {
        self.push(method, path, Ok(HttpResponse { status, body: String::new() }));
    }

    pub fn fail(&self, method: Method, path: &str, error: TransportError) {
        self.push(method, path, Err(error));
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(reply);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests whose URL path (without base and query) equals `path`.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && path_of(&r.url) == path)
            .collect()
    }
}

fn path_of(url: &str) -> String {
    let rest = url.strip_prefix(BASE_URL).unwrap_or(url);
    rest.split('?').next().unwrap_or_default().to_owned()
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let key = (request.method, path_of(&request.url));
        self.requests.lock().unwrap().push(request);
        // Let sibling futures in a join! reach the transport before any reply.
        tokio::task::yield_now().await;
        let reply = self
            .routes
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);
        reply.unwrap_or_else(|| Ok(HttpResponse { status: 404, body: r#"{"detail":"Not Found"}"#.to_owned() }))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}

pub struct Harness {
    pub client: ApiClient,
    pub transport: Arc<FakeTransport>,
    pub tokens: Arc<MemoryTokenStore>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn harness() -> Harness {
    let transport = Arc::new(FakeTransport::default());
    let tokens = Arc::new(MemoryTokenStore::new());
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(BASE_URL, transport.clone(), tokens.clone(), navigator.clone());
    Harness { client, transport, tokens, navigator }
}

pub fn user_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "username": "zhangwei",
        "email": "user@x.com",
        "full_name": "Zhang Wei",
        "department": "R&D",
        "role": "user",
        "points_total": 1250
    })
}
