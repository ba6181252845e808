//! Write-side controller: pending/success/error state around a one-argument provider call

use super::controller::{Abandon, Settle, StateCell, NETWORK_ERROR};
use super::fetch::ProviderFuture;
use crate::provider::{ApiResponse, ProviderResult};
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

type MutateFn<P, R> = Arc<dyn Fn(P) -> ProviderFuture<R> + Send + Sync>;

/// Observable state of a [`MutationController`]
#[derive(Debug, Clone, PartialEq)]
pub enum MutationState<R> {
    Idle,
    Pending,
    /// Holds the whole envelope, not just its data
    Succeeded(ApiResponse<R>),
    Failed(String),
}

impl<R> Abandon for MutationState<R> {
    fn abandoned() -> Self {
        MutationState::Failed(NETWORK_ERROR.to_string())
    }
}

/// Wraps a submit operation and tracks its latest outcome
pub struct MutationController<P, R> {
    cell: StateCell<MutationState<R>>,
    mutate_fn: MutateFn<P, R>,
    name: &'static str,
}

impl<P, R> MutationController<P, R>
where
    P: Send + 'static,
    R: Send + 'static,
{
    pub fn new<F, Fut>(mutate_fn: F) -> Self
    where
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ProviderResult<R>> + Send + 'static,
    {
        let mutate_fn: MutateFn<P, R> =
            Arc::new(move |payload| Box::pin(mutate_fn(payload)) as ProviderFuture<R>);
        Self {
            cell: StateCell::new(MutationState::Idle),
            mutate_fn,
            name: "mutation",
        }
    }

    /// Label used in log events
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Enter `Pending` now and return the future that settles the call.
    ///
    /// A call superseded by a newer `mutate` or by [`reset`](Self::reset)
    /// settles without touching the state.
    #[must_use = "dropping the returned future abandons the call"]
    pub fn mutate(&self, payload: P) -> impl Future<Output = ()> + Send + 'static {
        let ticket = self.cell.begin(MutationState::Pending);
        let call = (self.mutate_fn)(payload);
        let name = self.name;
        debug!(controller = name, generation = ticket.generation(), "mutation started");

        async move {
            let state = match call.await {
                Ok(response) if response.success => MutationState::Succeeded(response),
                Ok(response) => {
                    let message = response.failure_message();
                    warn!(controller = name, %message, "provider rejected submission");
                    MutationState::Failed(message)
                }
                Err(err) => {
                    warn!(controller = name, error = %err, "submission failed");
                    MutationState::Failed(NETWORK_ERROR.to_string())
                }
            };
            let generation = ticket.generation();
            match ticket.settle(state) {
                Settle::Applied => info!(controller = name, generation, "mutation settled"),
                outcome => {
                    debug!(controller = name, generation, ?outcome, "mutation result discarded")
                }
            }
        }
    }

    /// Run [`mutate`](Self::mutate) in the background
    pub fn submit(&self, payload: P) -> JoinHandle<()> {
        tokio::spawn(self.mutate(payload))
    }

    /// Return to `Idle`, discarding any in-flight call's eventual result
    pub fn reset(&self) {
        self.cell.supersede(MutationState::Idle);
        debug!(controller = self.name, "mutation reset");
    }

    pub fn with_state<T>(&self, f: impl FnOnce(&MutationState<R>) -> T) -> T {
        self.cell.read(f)
    }

    pub fn is_pending(&self) -> bool {
        self.with_state(|state| matches!(state, MutationState::Pending))
    }

    pub fn is_success(&self) -> bool {
        self.with_state(|state| matches!(state, MutationState::Succeeded(_)))
    }

    pub fn error(&self) -> Option<String> {
        self.with_state(|state| match state {
            MutationState::Failed(message) => Some(message.clone()),
            _ => None,
        })
    }
}

impl<P, R> MutationController<P, R>
where
    P: Send + 'static,
    R: Clone + Send + 'static,
{
    pub fn state(&self) -> MutationState<R> {
        self.with_state(Clone::clone)
    }

    pub fn response(&self) -> Option<ApiResponse<R>> {
        self.with_state(|state| match state {
            MutationState::Succeeded(response) => Some(response.clone()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ProviderError, GENERIC_FAILURE};
    use crate::state::{Confirmation, FormValues};
    use pretty_assertions::assert_eq;
    use tokio::sync::oneshot;

    type Gate = oneshot::Receiver<ProviderResult<Confirmation>>;

    /// Controller whose payload is the channel its result arrives on
    fn gated() -> MutationController<Gate, Confirmation> {
        MutationController::new(|rx: Gate| async move {
            rx.await.unwrap_or_else(|_| {
                Err(ProviderError::Transport {
                    path: "/api/contact".to_string(),
                    message: "closed".to_string(),
                })
            })
        })
    }

    fn confirmation(id: &str) -> Confirmation {
        Confirmation {
            id: id.to_string(),
            status: None,
        }
    }

    #[test]
    fn test_new_is_idle() {
        let controller = gated();
        assert_eq!(controller.state(), MutationState::Idle);
        assert!(!controller.is_pending());
        assert!(!controller.is_success());
        assert!(controller.error().is_none());
        assert!(controller.response().is_none());
    }

    #[test]
    fn test_success_keeps_full_envelope() {
        let controller = MutationController::new(|_payload: FormValues| async {
            Ok(ApiResponse::ok(Confirmation {
                id: "APP-AB12CD".to_string(),
                status: Some("pending".to_string()),
            }))
        });

        tokio_test::block_on(controller.mutate(FormValues::new()));

        assert!(controller.is_success());
        assert!(!controller.is_pending());
        let response = controller.response().unwrap();
        assert!(response.success);
        assert_eq!(response.data.unwrap().id, "APP-AB12CD");
    }

    #[test]
    fn test_success_without_data_still_succeeds() {
        let controller = MutationController::<FormValues, Confirmation>::new(|_| async {
            Ok(ApiResponse {
                success: true,
                data: None,
                error: None,
            })
        });
        tokio_test::block_on(controller.mutate(FormValues::new()));

        assert!(controller.is_success());
        assert!(controller.error().is_none());
        let response = controller.response().unwrap();
        assert!(response.success);
        assert!(response.data.is_none());
    }

    #[test]
    fn test_payload_reaches_provider() {
        let controller = MutationController::new(|payload: FormValues| async move {
            Ok(ApiResponse::ok(confirmation(&payload["name"])))
        });
        let mut payload = FormValues::new();
        payload.insert("name".to_string(), "Ravi".to_string());

        tokio_test::block_on(controller.mutate(payload));
        assert_eq!(controller.response().and_then(|r| r.data), Some(confirmation("Ravi")));
    }

    #[test]
    fn test_rejection_uses_provider_message() {
        let controller = MutationController::<FormValues, Confirmation>::new(|_| async {
            Ok(ApiResponse::failure("Duplicate application."))
        });
        tokio_test::block_on(controller.mutate(FormValues::new()));
        assert_eq!(controller.error().as_deref(), Some("Duplicate application."));
        assert!(!controller.is_success());
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        let controller = MutationController::<FormValues, Confirmation>::new(|_| async {
            Ok(ApiResponse {
                success: false,
                data: None,
                error: None,
            })
        });
        tokio_test::block_on(controller.mutate(FormValues::new()));
        assert_eq!(controller.error().as_deref(), Some(GENERIC_FAILURE));
    }

    #[test]
    fn test_transport_error_is_swallowed() {
        let controller = MutationController::<FormValues, Confirmation>::new(|_| async {
            Err(ProviderError::Timeout {
                path: "/api/partnerships".to_string(),
            })
        });
        tokio_test::block_on(controller.mutate(FormValues::new()));
        assert_eq!(controller.error().as_deref(), Some(NETWORK_ERROR));
    }

    #[tokio::test]
    async fn test_pending_until_settled() {
        let controller = gated();
        let (tx, rx) = oneshot::channel();
        let handle = controller.submit(rx);
        assert!(controller.is_pending());

        tx.send(Ok(ApiResponse::ok(confirmation("PTR-000001")))).unwrap();
        handle.await.unwrap();
        assert!(!controller.is_pending());
        assert!(controller.is_success());
    }

    #[tokio::test]
    async fn test_new_call_clears_previous_outcome() {
        let controller = gated();
        let (tx, rx) = oneshot::channel();
        let first = controller.submit(rx);
        tx.send(Ok(ApiResponse::failure("Try later."))).unwrap();
        first.await.unwrap();
        assert_eq!(controller.error().as_deref(), Some("Try later."));

        let (_tx, rx) = oneshot::channel::<ProviderResult<Confirmation>>();
        let _second = controller.mutate(rx);
        assert!(controller.is_pending());
        assert!(controller.error().is_none());
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let controller = gated();
        let (tx, rx) = oneshot::channel();
        let handle = controller.submit(rx);
        tx.send(Ok(ApiResponse::ok(confirmation("TKT-AAAAAA")))).unwrap();
        handle.await.unwrap();
        assert!(controller.is_success());

        controller.reset();
        assert_eq!(controller.state(), MutationState::Idle);
        assert!(controller.response().is_none());
    }

    #[tokio::test]
    async fn test_reset_discards_in_flight_result() {
        let controller = gated();
        let (tx, rx) = oneshot::channel();
        let handle = controller.submit(rx);

        controller.reset();
        assert_eq!(controller.state(), MutationState::Idle);

        tx.send(Ok(ApiResponse::ok(confirmation("TKT-LATE01")))).unwrap();
        handle.await.unwrap();
        assert_eq!(controller.state(), MutationState::Idle);
    }

    #[tokio::test]
    async fn test_latest_submission_wins() {
        let controller = gated();
        let (tx_old, rx_old) = oneshot::channel();
        let (tx_new, rx_new) = oneshot::channel();
        let old = controller.submit(rx_old);
        let new = controller.submit(rx_new);

        tx_new.send(Ok(ApiResponse::ok(confirmation("NEW")))).unwrap();
        new.await.unwrap();
        tx_old.send(Ok(ApiResponse::failure("old"))).unwrap();
        old.await.unwrap();

        assert_eq!(
            controller.response().and_then(|r| r.data),
            Some(confirmation("NEW"))
        );
    }

    #[tokio::test]
    async fn test_abandoned_call_does_not_stay_pending() {
        let controller = gated();
        let (_tx, rx) = oneshot::channel();
        let handle = controller.submit(rx);
        handle.abort();
        let _ = handle.await;
        assert_eq!(controller.error().as_deref(), Some(NETWORK_ERROR));
    }
}
