//! Generation-tagged state cell shared by the async controllers
//!
//! Each call against a controller takes a [`Ticket`] stamped with the cell's
//! generation. Only the ticket of the most recent call may write the outcome,
//! and only while the owning controller is alive. A ticket dropped before it
//! settles writes the state's abandoned value instead, so the controller never
//! stays stuck in its in-flight state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Message surfaced for any transport failure
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

/// State written when a call is dropped or unwinds before it settles
pub trait Abandon {
    fn abandoned() -> Self;
}

#[derive(Debug)]
struct Slot<S> {
    state: S,
    generation: u64,
}

fn lock<S>(slot: &Arc<Mutex<Slot<S>>>) -> MutexGuard<'_, Slot<S>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Outcome of writing a settled call back to its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    Applied,
    /// A newer call or a reset took over the cell
    Superseded,
    /// The owning controller was dropped
    OwnerGone,
}

/// State owned by one controller
#[derive(Debug)]
pub struct StateCell<S> {
    slot: Arc<Mutex<Slot<S>>>,
}

impl<S: Abandon> StateCell<S> {
    pub fn new(state: S) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                state,
                generation: 0,
            })),
        }
    }

    /// Start a call: enter `state` and invalidate every earlier ticket
    pub fn begin(&self, state: S) -> Ticket<S> {
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.state = state;
        Ticket {
            slot: Arc::downgrade(&self.slot),
            generation: slot.generation,
            settled: false,
        }
    }

    /// Replace the state without starting a call, invalidating in-flight tickets
    pub fn supersede(&self, state: S) {
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.state = state;
    }

    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&lock(&self.slot).state)
    }

    #[allow(dead_code)]
    pub fn generation(&self) -> u64 {
        lock(&self.slot).generation
    }
}

/// Right to write the outcome of one call
#[derive(Debug)]
pub struct Ticket<S: Abandon> {
    slot: Weak<Mutex<Slot<S>>>,
    generation: u64,
    settled: bool,
}

impl<S: Abandon> Ticket<S> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Write `state` if this call is still current
    pub fn settle(mut self, state: S) -> Settle {
        self.settled = true;
        self.write(state)
    }

    fn write(&self, state: S) -> Settle {
        let Some(slot) = self.slot.upgrade() else {
            return Settle::OwnerGone;
        };
        let mut slot = lock(&slot);
        if slot.generation != self.generation {
            return Settle::Superseded;
        }
        slot.state = state;
        Settle::Applied
    }
}

impl<S: Abandon> Drop for Ticket<S> {
    fn drop(&mut self) {
        if !self.settled {
            let outcome = self.write(S::abandoned());
            tracing::debug!(generation = self.generation, ?outcome, "call abandoned");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Probe {
        Idle,
        Busy,
        Done(u32),
        Dropped,
    }

    impl Abandon for Probe {
        fn abandoned() -> Self {
            Probe::Dropped
        }
    }

    fn current(cell: &StateCell<Probe>) -> Probe {
        cell.read(Clone::clone)
    }

    #[test]
    fn test_begin_bumps_generation() {
        let cell = StateCell::new(Probe::Idle);
        assert_eq!(cell.generation(), 0);
        let ticket = cell.begin(Probe::Busy);
        assert_eq!(ticket.generation(), 1);
        assert_eq!(current(&cell), Probe::Busy);
        assert_eq!(ticket.settle(Probe::Done(1)), Settle::Applied);
        assert_eq!(current(&cell), Probe::Done(1));
    }

    #[test]
    fn test_stale_ticket_is_superseded() {
        let cell = StateCell::new(Probe::Idle);
        let first = cell.begin(Probe::Busy);
        let second = cell.begin(Probe::Busy);

        assert_eq!(second.settle(Probe::Done(2)), Settle::Applied);
        assert_eq!(first.settle(Probe::Done(1)), Settle::Superseded);
        assert_eq!(current(&cell), Probe::Done(2));
    }

    #[test]
    fn test_supersede_discards_in_flight_ticket() {
        let cell = StateCell::new(Probe::Idle);
        let ticket = cell.begin(Probe::Busy);
        cell.supersede(Probe::Idle);

        assert_eq!(ticket.settle(Probe::Done(7)), Settle::Superseded);
        assert_eq!(current(&cell), Probe::Idle);
    }

    #[test]
    fn test_dropped_owner_discards_result() {
        let cell = StateCell::new(Probe::Idle);
        let ticket = cell.begin(Probe::Busy);
        drop(cell);
        assert_eq!(ticket.settle(Probe::Done(3)), Settle::OwnerGone);
    }

    #[test]
    fn test_unsettled_ticket_writes_abandoned_state() {
        let cell = StateCell::new(Probe::Idle);
        let ticket = cell.begin(Probe::Busy);
        drop(ticket);
        assert_eq!(current(&cell), Probe::Dropped);
    }

    #[test]
    fn test_unsettled_stale_ticket_leaves_state_alone() {
        let cell = StateCell::new(Probe::Idle);
        let stale = cell.begin(Probe::Busy);
        let _live = cell.begin(Probe::Busy);
        drop(stale);
        assert_eq!(current(&cell), Probe::Busy);
    }

    #[test]
    fn test_settled_ticket_drop_is_noop() {
        let cell = StateCell::new(Probe::Idle);
        cell.begin(Probe::Busy).settle(Probe::Done(5));
        assert_eq!(current(&cell), Probe::Done(5));
    }
}
