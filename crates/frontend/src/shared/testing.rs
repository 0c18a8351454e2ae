//! In-memory fakes for controller tests

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use contracts::domain::EntityId;
use serde::{Deserialize, Serialize};

use crate::shared::api::{ApiClient, ApiError, ApiRequest, Envelope, Method};
use crate::shared::feedback::{AlertLevel, Confirmer, Notifier};
use crate::shared::list::{Cell, ListEntity, RowAction};
use crate::system::auth::guard::Navigator;

#[derive(Default)]
struct MockState {
    routes: HashMap<(Method, String), VecDeque<Result<Envelope, ApiError>>>,
    requests: Vec<ApiRequest>,
}

/// Canned backend keyed by method and route (path without query).
///
/// Queued answers are consumed in order; the last one keeps answering.
#[derive(Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<MockState>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, route: &str, envelope: Envelope) {
        self.push(method, route, Ok(envelope));
    }

    pub fn fail(&self, method: Method, route: &str, error: ApiError) {
        self.push(method, route, Err(error));
    }

    fn push(&self, method: Method, route: &str, answer: Result<Envelope, ApiError>) {
        self.inner
            .lock()
            .unwrap()
            .routes
            .entry((method, route.to_string()))
            .or_default()
            .push_back(answer);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn requests_with(&self, method: Method) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }
}

impl ApiClient for MockApi {
    async fn send(&self, request: ApiRequest) -> Result<Envelope, ApiError> {
        let mut state = self.inner.lock().unwrap();
        state.requests.push(request.clone());
        let key = (request.method, request.route().to_string());
        match state.routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => Err(ApiError::Transport(format!(
                "No response for {:?} {}",
                request.method, request.path
            ))),
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<(AlertLevel, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(AlertLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<(AlertLevel, String)> {
        self.messages().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: AlertLevel, message: String) {
        self.messages.lock().unwrap().push((level, message));
    }
}

pub struct FixedConfirm {
    answer: bool,
    prompts: RefCell<Vec<String>>,
}

impl FixedConfirm {
    pub fn accept() -> Self {
        Self {
            answer: true,
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn decline() -> Self {
        Self {
            answer: false,
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirmer for FixedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    path: Arc<Mutex<String>>,
    redirects: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        let navigator = Self::default();
        *navigator.path.lock().unwrap() = path.to_string();
        navigator
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.lock().unwrap().clone()
    }

    fn redirect(&self, path: &str) {
        self.redirects.lock().unwrap().push(path.to_string());
    }
}

// ============================================================================
// Minimal entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub widget_id: EntityId,
    pub name: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WidgetFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

impl ListEntity for Widget {
    type Filter = WidgetFilter;

    const RESOURCE: &'static str = "widgets";
    const NOUN: &'static str = "widgets";
    const PER_PAGE: u32 = 20;
    const ACTIONS: &'static [RowAction] = &[RowAction::Edit, RowAction::Delete];

    fn id(&self) -> EntityId {
        self.widget_id
    }

    fn headers() -> &'static [&'static str] {
        &["Name", "Note"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![Cell::strong(&self.name), Cell::or_na(self.note.as_deref())]
    }

    fn option_label(&self) -> String {
        self.name.clone()
    }
}

pub fn widget(id: EntityId, name: &str) -> Widget {
    Widget {
        widget_id: id,
        name: name.to_string(),
        note: None,
    }
}
