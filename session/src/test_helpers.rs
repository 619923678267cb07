//! Recording doubles for the transport and navigator seams.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::request::{ApiRequest, Method};
use crate::storage::MemoryStorage;
use crate::store::{LocalCell, Navigator, Session};
use crate::transport::{ApiResponse, Transport};

type Reply = Result<ApiResponse, String>;

/// Scripted transport. The last reply queued for a route repeats.
#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Rc<RefCell<HashMap<(Method, String), VecDeque<Reply>>>>,
    sent: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) -> &Self {
        self.push(method, path, Ok(ApiResponse::new(status, body.to_string())))
    }

    pub fn fail(&self, method: Method, path: &str, message: &str) -> &Self {
        self.push(method, path, Err(message.to_owned()))
    }

    fn push(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.routes
            .borrow_mut()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub fn sent_to(&self, path: &str) -> Vec<ApiRequest> {
        self.sent.borrow().iter().filter(|r| r.path == path).cloned().collect()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let key = (request.method, request.path.clone());
        self.sent.borrow_mut().push(request);

        let mut routes = self.routes.borrow_mut();
        let Some(queue) = routes.get_mut(&key) else {
            return Ok(ApiResponse::new(404, r#"{"detail":"Not Found"}"#));
        };
        let reply = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        match reply {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ApiError::Transport(message)),
            None => Ok(ApiResponse::new(404, "")),
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator(Rc<RefCell<Vec<String>>>);

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.0.borrow_mut().push(path.to_owned());
    }
}

pub type TestSession = Session<MockTransport, MemoryStorage, RecordingNavigator, LocalCell>;

pub fn session_with(storage: MemoryStorage) -> (TestSession, MockTransport, RecordingNavigator) {
    let transport = MockTransport::default();
    let navigator = RecordingNavigator::default();
    let session = Session::new(
        ApiClient::new(transport.clone()),
        storage,
        navigator.clone(),
        LocalCell::default(),
    );
    (session, transport, navigator)
}

pub fn token_response(token: &str) -> serde_json::Value {
    serde_json::json!({ "access_token": token, "token_type": "bearer" })
}
