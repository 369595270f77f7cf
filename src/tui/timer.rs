//! Real-time producers for the event channel.
//!
//! The carousel only hands out dismiss tickets; this module turns the
//! pending ticket into an actual timer thread that reports back with
//! `AppEvent::DismissDue`. Only the most recent ticket ever has a live
//! timer. Dropping the cancel sender wakes the thread and it exits
//! without sending anything.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::trace;

use crate::carousel::DismissTicket;

use super::state::AppEvent;

/// Timer thread for one ticket. Dropping this cancels it.
#[derive(Debug)]
struct Armed {
    ticket: DismissTicket,
    _cancel: mpsc::Sender<()>,
}

/// Keeps at most one dismiss timer in step with the carousel.
#[derive(Debug)]
pub struct DismissTimer {
    tx: mpsc::Sender<AppEvent>,
    armed: Option<Armed>,
}

impl DismissTimer {
    pub fn new(tx: mpsc::Sender<AppEvent>) -> Self {
        Self { tx, armed: None }
    }

    /// Reconcile with the carousel's pending ticket.
    ///
    /// A new ticket replaces (and cancels) the running timer. No ticket
    /// cancels it. The same ticket leaves it alone.
    pub fn sync(&mut self, pending: Option<DismissTicket>, delay: Duration) {
        match pending {
            None => self.cancel(),
            Some(ticket) if self.armed() == Some(ticket) => {}
            Some(ticket) => {
                self.cancel();
                self.armed = Some(self.spawn(ticket, delay));
            }
        }
    }

    pub fn cancel(&mut self) {
        if let Some(armed) = self.armed.take() {
            trace!(ticket = ?armed.ticket, "dismiss timer cancelled");
        }
    }

    /// Ticket with a live timer, if any.
    pub fn armed(&self) -> Option<DismissTicket> {
        self.armed.as_ref().map(|a| a.ticket)
    }

    fn spawn(&self, ticket: DismissTicket, delay: Duration) -> Armed {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let tx = self.tx.clone();
        thread::spawn(move || {
            if let Err(RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(delay) {
                // Receiver gone means the TUI is shutting down
                let _ = tx.send(AppEvent::DismissDue(ticket));
            }
        });
        trace!(?ticket, ?delay, "dismiss timer armed");
        Armed {
            ticket,
            _cancel: cancel_tx,
        }
    }
}

/// Spawn a thread that sends `RoleTick` every `interval` until the
/// receiver is dropped.
pub fn spawn_ticker(interval: Duration, tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            thread::sleep(interval);
            if tx.send(AppEvent::RoleTick).is_err() {
                break;
            }
        }
    });
}

// ============================================================================
// TESTS
// ============================================================================
