//! Read-side controller: loading/data/error state around a zero-argument provider call

use super::controller::{Abandon, Settle, StateCell, NETWORK_ERROR};
use crate::provider::ProviderResult;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Boxed provider call
pub type ProviderFuture<T> = Pin<Box<dyn Future<Output = ProviderResult<T>> + Send + 'static>>;

type FetchFn<T> = Arc<dyn Fn() -> ProviderFuture<T> + Send + Sync>;

/// Observable state of a [`FetchController`]
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Never executed
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> Abandon for FetchState<T> {
    fn abandoned() -> Self {
        FetchState::Failure(NETWORK_ERROR.to_string())
    }
}

/// Wraps a read operation and tracks its latest outcome
pub struct FetchController<T> {
    cell: StateCell<FetchState<T>>,
    fetch_fn: FetchFn<T>,
    name: &'static str,
}

impl<T: Send + 'static> FetchController<T> {
    /// Create an idle controller
    pub fn new<F, Fut>(fetch_fn: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ProviderResult<T>> + Send + 'static,
    {
        let fetch_fn: FetchFn<T> = Arc::new(move || Box::pin(fetch_fn()) as ProviderFuture<T>);
        Self {
            cell: StateCell::new(FetchState::Idle),
            fetch_fn,
            name: "fetch",
        }
    }

    #[allow(dead_code)]
    /// Create a controller and immediately run it on the current runtime
    pub fn start<F, Fut>(fetch_fn: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ProviderResult<T>> + Send + 'static,
    {
        Self::new(fetch_fn).started()
    }

    /// Label used in log events
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Run the first fetch on the current runtime
    pub fn started(self) -> Self {
        self.refetch();
        self
    }

    /// Enter `Loading` now and return the future that settles the call.
    ///
    /// Only the most recently issued call may settle the controller; the
    /// future resolves to how its result was applied.
    #[must_use = "dropping the returned future abandons the call"]
    pub fn execute(&self) -> impl Future<Output = Settle> + Send + 'static {
        let ticket = self.cell.begin(FetchState::Loading);
        let call = (self.fetch_fn)();
        let name = self.name;
        debug!(controller = name, generation = ticket.generation(), "fetch started");

        async move {
            let state = match call.await {
                Ok(response) => match response.into_outcome() {
                    Ok(data) => FetchState::Success(data),
                    Err(message) => {
                        warn!(controller = name, %message, "provider reported failure");
                        FetchState::Failure(message)
                    }
                },
                Err(err) => {
                    warn!(controller = name, error = %err, "provider call failed");
                    FetchState::Failure(NETWORK_ERROR.to_string())
                }
            };
            let generation = ticket.generation();
            let outcome = ticket.settle(state);
            match outcome {
                Settle::Applied => debug!(controller = name, generation, "fetch settled"),
                _ => debug!(controller = name, generation, ?outcome, "fetch result discarded"),
            }
            outcome
        }
    }

    /// Re-run the fetch in the background (e.g. a user-triggered retry)
    pub fn refetch(&self) -> JoinHandle<Settle> {
        tokio::spawn(self.execute())
    }

    /// Inspect the current state without cloning it
    pub fn with_state<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        self.cell.read(f)
    }

    pub fn is_loading(&self) -> bool {
        self.with_state(|state| matches!(state, FetchState::Loading))
    }

    pub fn error(&self) -> Option<String> {
        self.with_state(|state| match state {
            FetchState::Failure(message) => Some(message.clone()),
            _ => None,
        })
    }
}

impl<T: Clone + Send + 'static> FetchController<T> {
    pub fn state(&self) -> FetchState<T> {
        self.with_state(Clone::clone)
    }

    #[allow(dead_code)]
    pub fn data(&self) -> Option<T> {
        self.with_state(|state| match state {
            FetchState::Success(data) => Some(data.clone()),
            _ => None,
        })
    }
}
