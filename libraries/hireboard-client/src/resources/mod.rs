//! Resource state holders.
//!
//! Each resource wraps one backend resource: it owns its state, exposes it as
//! a snapshot or a `watch` subscription, and mutates only its own state. Reads
//! record failures in `error`; writes also return them.
//!
//! Overlapping calls to the same operation are not cancelled or deduplicated:
//! whichever response lands last wins.

mod applications;
mod jobs;
mod recruiter;

pub use applications::{Applications, ApplicationsState};
pub use jobs::{DeleteOutcome, Jobs, JobsState, DELETE_CONFIRMATION};
pub use recruiter::{Recruiter, RecruiterState};

use tokio::sync::watch;

/// Observable state slot owned by a single resource.
#[derive(Debug)]
pub(crate) struct StateCell<S> {
    tx: watch::Sender<S>,
}

impl<S: Clone> StateCell<S> {
    pub(crate) fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub(crate) fn get(&self) -> S {
        self.tx.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }

    pub(crate) fn update(&self, f: impl FnOnce(&mut S)) {
        self.tx.send_modify(f);
    }
}
