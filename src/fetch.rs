// src/fetch.rs - Cancellable fetch slot keyed to a changing scope

//! Each data view owns one logical fetch slot. When its scope (active
//! brand, server-side filters) changes, the view begins a new ticket; the
//! previous in-flight request is cancelled cooperatively and, whatever the
//! transport does with it, its result is never applied.
//!
//! The guarantee is a generation compare at resolution time, not a timing
//! heuristic: a ticket that is no longer the newest settles as
//! [`FetchOutcome::Superseded`], and only the newest ticket's settle may
//! flip a view's `loading` flag back to false.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

#[derive(Debug)]
struct SlotState {
    generation: u64,
    token: CancellationToken,
}

/// A single logical fetch slot.
#[derive(Debug, Clone)]
pub struct FetchController {
    slot: Arc<Mutex<SlotState>>,
}

impl Default for FetchController {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchController {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(SlotState {
                generation: 0,
                token: CancellationToken::new(),
            })),
        }
    }

    /// Cancel any outstanding request and hand out the ticket for the next
    /// one.
    pub fn begin(&self) -> FetchTicket {
        let mut slot = self.slot.lock();
        slot.token.cancel();
        slot.generation += 1;
        slot.token = CancellationToken::new();
        FetchTicket {
            generation: slot.generation,
            token: slot.token.clone(),
            slot: Arc::clone(&self.slot),
        }
    }

    /// Cancel whatever is in flight without starting anything new. Called
    /// when the consuming view unmounts.
    pub fn cancel(&self) {
        let mut slot = self.slot.lock();
        slot.token.cancel();
        slot.generation += 1;
        slot.token = CancellationToken::new();
    }
}

/// How a request settled from the view's perspective.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// This was the newest request; apply the result (success or error)
    /// and clear the loading flag.
    Applied(Result<T>),
    /// A newer scope took over while this request was in flight. Discard
    /// silently; the loading flag belongs to the newer request now.
    Superseded,
}

impl<T> FetchOutcome<T> {
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}

/// The handle tying one request to the scope that issued it.
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    token: CancellationToken,
    slot: Arc<Mutex<SlotState>>,
}

impl FetchTicket {
    /// Whether this ticket still belongs to the newest request.
    pub fn is_current(&self) -> bool {
        self.slot.lock().generation == self.generation
    }

    /// Token to hand to the transport layer. Cancellation there is
    /// advisory; the application-level discard below is what matters.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Drive the request future and classify its settle. The generation is
    /// re-checked after completion, so even a request that the transport
    /// finished after supersession is discarded. Errors carrying the
    /// cancelled kind are folded into `Superseded` as well.
    pub async fn run<T>(&self, fut: impl Future<Output = Result<T>>) -> FetchOutcome<T> {
        let cancelled = self.token.cancelled();
        futures::pin_mut!(cancelled);
        futures::pin_mut!(fut);

        match futures::future::select(cancelled, fut).await {
            futures::future::Either::Left(_) => FetchOutcome::Superseded,
            futures::future::Either::Right((result, _)) => {
                if !self.is_current() {
                    return FetchOutcome::Superseded;
                }
                match result {
                    Err(e) if e.is_cancelled() => FetchOutcome::Superseded,
                    other => FetchOutcome::Applied(other),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_single_request_is_applied() {
        let controller = FetchController::new();
        let ticket = controller.begin();
        let outcome = ticket.run(async { Ok(vec![1, 2, 3]) }).await;
        match outcome {
            FetchOutcome::Applied(Ok(rows)) => assert_eq!(rows, vec![1, 2, 3]),
            other => panic!("expected applied, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_superseded_request_is_discarded() {
        let controller = FetchController::new();
        let first = controller.begin();
        let second = controller.begin();

        // the first request resolves "last" in wall-clock terms, but its
        // token was cancelled when the second scope began
        let outcome = first.run(async { Ok("stale") }).await;
        assert!(outcome.is_superseded());

        let outcome = second.run(async { Ok("fresh") }).await;
        match outcome {
            FetchOutcome::Applied(Ok(value)) => assert_eq!(value, "fresh"),
            other => panic!("expected applied, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generation_checked_at_resolution_time() {
        let controller = FetchController::new();
        let ticket = controller.begin();
        let stale_probe = controller.clone();

        // the future completes without ever observing its token, as a
        // transport that ignores advisory cancellation would
        let outcome = ticket
            .run(async move {
                stale_probe.begin();
                Ok("finished anyway")
            })
            .await;
        assert!(outcome.is_superseded());
    }

    #[tokio::test]
    async fn test_error_on_current_ticket_is_applied() {
        let controller = FetchController::new();
        let ticket = controller.begin();
        let outcome: FetchOutcome<()> = ticket
            .run(async { Err(Error::http(500, "/reviews", "boom")) })
            .await;
        match outcome {
            FetchOutcome::Applied(Err(e)) => assert_eq!(e.message, "boom"),
            other => panic!("expected applied error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cancelled_error_kind_is_folded_into_superseded() {
        let controller = FetchController::new();
        let ticket = controller.begin();
        let outcome: FetchOutcome<()> = ticket.run(async { Err(Error::cancelled()) }).await;
        assert!(outcome.is_superseded());
    }

    #[tokio::test]
    async fn test_unmount_cancels_in_flight() {
        let controller = FetchController::new();
        let ticket = controller.begin();
        controller.cancel();
        let outcome = ticket.run(async { Ok(()) }).await;
        assert!(outcome.is_superseded());
        assert!(!ticket.is_current());
    }

    #[tokio::test]
    async fn test_pending_future_loses_race_to_cancellation() {
        let controller = FetchController::new();
        let ticket = controller.begin();
        controller.begin();

        // a request that would hang forever still settles as superseded
        let outcome = ticket
            .run(async {
                futures::future::pending::<Result<()>>().await
            })
            .await;
        assert!(outcome.is_superseded());
    }
}
