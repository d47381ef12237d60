//! Deferred computer turns.
//!
//! The scheduler only delivers a reminder. The event loop hands the ticket
//! back to the controller, which re-checks it against the state at that
//! moment.

use std::time::Duration;

use tictactoe_core::AiTicket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Messages delivered to the event loop from background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The computer's thinking delay for this ticket has elapsed.
    ComputerTurnDue(AiTicket),
}

/// Owns at most one pending computer turn.
#[derive(Debug)]
pub struct AiScheduler {
    delay: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    pending: Option<(AiTicket, JoinHandle<()>)>,
}

impl AiScheduler {
    /// Creates a scheduler that reports due turns on `event_tx`.
    pub fn new(delay: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            delay,
            event_tx,
            pending: None,
        }
    }

    /// The ticket currently scheduled, if any.
    pub fn pending(&self) -> Option<AiTicket> {
        self.pending.as_ref().map(|(ticket, _)| *ticket)
    }

    /// Schedules `ticket`. Re-scheduling the same ticket does nothing; a
    /// different ticket replaces the outstanding one.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, ticket: AiTicket) {
        if self.pending() == Some(ticket) {
            return;
        }
        self.cancel();

        let delay = self.delay;
        let tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(?ticket, "Computer turn due");
            // The receiver is gone only when the UI has shut down.
            let _ = tx.send(AppEvent::ComputerTurnDue(ticket));
        });
        debug!(delay_ms = delay.as_millis() as u64, "Computer turn scheduled");
        self.pending = Some((ticket, handle));
    }

    /// Aborts the outstanding task, if any.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if let Some((ticket, handle)) = self.pending.take() {
            debug!(?ticket, "Computer turn cancelled");
            handle.abort();
        }
    }

    /// Brings the scheduler in line with the turn the game currently owes.
    pub fn sync(&mut self, owed: Option<AiTicket>) {
        match owed {
            Some(ticket) => self.schedule(ticket),
            None => self.cancel(),
        }
    }
}

impl Drop for AiScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
