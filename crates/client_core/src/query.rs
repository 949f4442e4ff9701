//! Generic request lifecycle management shared by every query flow.

use std::fmt;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use crate::error::QueryError;

/// Lifecycle stage of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    Idle,
    Loading,
    Success,
    Error,
}

impl fmt::Display for QueryPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryPhase::Idle => "idle",
            QueryPhase::Loading => "loading",
            QueryPhase::Success => "success",
            QueryPhase::Error => "error",
        };
        f.write_str(name)
    }
}

/// State of one query flow. Data and error message are mutually exclusive
/// and only ever present in their matching phase.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> QueryState<T> {
    pub fn phase(&self) -> QueryPhase {
        match self {
            QueryState::Idle => QueryPhase::Idle,
            QueryState::Loading => QueryPhase::Loading,
            QueryState::Success(_) => QueryPhase::Success,
            QueryState::Error(_) => QueryPhase::Error,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            QueryState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }
}

/// Per-flow wording for each failure kind surfaced to the user.
#[derive(Debug, Clone, Copy)]
pub struct FailureMessages {
    pub not_found: &'static str,
    pub backend: &'static str,
    pub transport: &'static str,
    pub parse: &'static str,
}

/// Manages the lifecycle of a single in-flight query of result type `T`.
///
/// Every invocation gets a generation token when it starts; a result is only
/// published if its token still matches the current generation, so a slow
/// response from an older request resolving after a newer one began is
/// dropped instead of applied.
pub struct QueryController<T> {
    generation: Mutex<u64>,
    state: watch::Sender<QueryState<T>>,
    messages: FailureMessages,
}

impl<T: Clone> QueryController<T> {
    pub fn new(messages: FailureMessages) -> Self {
        let (state, _) = watch::channel(QueryState::Idle);
        Self {
            generation: Mutex::new(0),
            state,
            messages,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> QueryState<T> {
        self.state.borrow().clone()
    }

    /// Observe state transitions; the receiver always holds the latest value.
    pub fn subscribe(&self) -> watch::Receiver<QueryState<T>> {
        self.state.subscribe()
    }

    /// Local-validation short circuit: publishes the error phase without any
    /// network activity and invalidates whatever is still in flight.
    pub async fn reject(&self, message: impl Into<String>) -> QueryState<T> {
        let err = QueryError::Validation(message.into());
        let mut generation = self.generation.lock().await;
        *generation += 1;
        let state = QueryState::Error(err.to_string());
        self.state.send_replace(state.clone());
        state
    }

    /// Run one query: enter `Loading`, send the request described by
    /// `build`, then resolve to exactly one terminal phase. The wire body is
    /// deserialized as `R` and shaped into `T` by `validate`.
    pub async fn run<R, B, V>(&self, http: &Client, build: B, validate: V) -> QueryState<T>
    where
        R: DeserializeOwned,
        B: FnOnce(&Client) -> RequestBuilder,
        V: FnOnce(R) -> Result<T, QueryError>,
    {
        let token = {
            let mut generation = self.generation.lock().await;
            *generation += 1;
            self.state.send_replace(QueryState::Loading);
            *generation
        };

        let outcome = self.execute(build(http), validate).await;

        let generation = self.generation.lock().await;
        if *generation != token {
            debug!(token, current = *generation, "dropping stale query result");
            return self.state.borrow().clone();
        }
        let state = match outcome {
            Ok(data) => QueryState::Success(data),
            Err(err) => QueryState::Error(err.to_string()),
        };
        self.state.send_replace(state.clone());
        state
    }

    async fn execute<R, V>(&self, request: RequestBuilder, validate: V) -> Result<T, QueryError>
    where
        R: DeserializeOwned,
        V: FnOnce(R) -> Result<T, QueryError>,
    {
        let response = request.send().await.map_err(|err| {
            warn!(error = %err, "transport failure");
            QueryError::Transport(self.messages.transport.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("backend reported not found");
            return Err(QueryError::NotFound(self.messages.not_found.to_string()));
        }
        if !status.is_success() {
            warn!(status = status.as_u16(), "backend returned failure status");
            return Err(QueryError::Backend {
                status: status.as_u16(),
                message: self.messages.backend.to_string(),
            });
        }

        let raw: R = response.json().await.map_err(|err| {
            warn!(error = %err, "malformed success body");
            QueryError::Parse(self.messages.parse.to_string())
        })?;

        validate(raw)
    }
}
