//! Error types for the inventory actor.

use thiserror::Error;

/// Failures talking to the inventory actor.
///
/// Navigation itself never fails: invalid transitions and stale completions are ignored.
/// The only thing that can go wrong is that the actor is no longer there to ask.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The actor's mailbox is closed.
    #[error("Inventory actor closed")]
    ActorClosed,

    /// The actor dropped the reply channel without answering.
    #[error("Inventory actor dropped response channel")]
    ActorDropped,

    /// The actor task panicked or was aborted.
    #[error("Inventory actor task failed: {0}")]
    ActorFailed(String),
}
