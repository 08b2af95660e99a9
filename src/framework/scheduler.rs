//! # Delayed Effects
//!
//! The [`Scheduler`] runs "wait, then report back" work on behalf of an actor.
//!
//! Each piece of work is a Tokio task that sleeps for a delay, computes a message, and posts
//! that message into the actor's own mailbox. The actor stays the only writer of its state:
//! completions are just more messages, processed sequentially with user intents.
//!
//! ## Ownership & Cancellation
//!
//! Every task is registered under an *owner* key (e.g. the controller that asked for it).
//! [`Scheduler::cancel`] aborts all in-flight tasks of one owner. Aborting is best effort: a
//! task that already posted its message cannot be recalled, so receivers must still check
//! that the owner is current before applying a completion.
//!
//! ## Weak Mailbox
//!
//! Tasks hold a [`mpsc::WeakSender`]. A sleeping timer therefore never keeps the actor alive
//! after every client has gone away; if the mailbox is gone when the timer fires, the
//! message is silently discarded.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

pub struct Scheduler<O, M> {
    mailbox: mpsc::WeakSender<M>,
    in_flight: HashMap<O, Vec<AbortHandle>>,
}

impl<O, M> Scheduler<O, M>
where
    O: Eq + Hash + Copy + std::fmt::Display,
    M: Send + 'static,
{
    pub fn new(mailbox: mpsc::WeakSender<M>) -> Self {
        Self {
            mailbox,
            in_flight: HashMap::new(),
        }
    }

    /// Spawns `work` after `delay`; its output is posted to the mailbox.
    pub fn schedule<F>(&mut self, owner: O, delay: Duration, work: F)
    where
        F: Future<Output = M> + Send + 'static,
    {
        let mailbox = self.mailbox.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let message = work.await;
            match mailbox.upgrade() {
                Some(sender) => {
                    let _ = sender.send(message).await;
                }
                None => debug!("Mailbox closed, completion discarded"),
            }
        });

        let handles = self.in_flight.entry(owner).or_default();
        handles.retain(|h| !h.is_finished());
        handles.push(handle.abort_handle());
    }

    /// Aborts every in-flight task registered under `owner`.
    pub fn cancel(&mut self, owner: O) {
        if let Some(handles) = self.in_flight.remove(&owner) {
            let pending = handles.iter().filter(|h| !h.is_finished()).count();
            for handle in handles {
                handle.abort();
            }
            debug!(%owner, pending, "Canceled");
        }
    }

    /// Drops bookkeeping for tasks that already finished.
    pub fn prune(&mut self) {
        self.in_flight.retain(|_, handles| {
            handles.retain(|h| !h.is_finished());
            !handles.is_empty()
        });
    }

    /// Number of tasks that may still post a message.
    pub fn pending(&self) -> usize {
        self.in_flight
            .values()
            .flatten()
            .filter(|h| !h.is_finished())
            .count()
    }

    pub fn cancel_all(&mut self) {
        for (_, handles) in self.in_flight.drain() {
            for handle in handles {
                handle.abort();
            }
        }
    }
}

impl<O, M> Drop for Scheduler<O, M> {
    fn drop(&mut self) {
        for handles in self.in_flight.values() {
            for handle in handles {
                handle.abort();
            }
        }
    }
}
