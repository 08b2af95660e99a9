//! Reusable building blocks that know nothing about inventories.
//!
//! # Main Components
//!
//! - [`projection`] - Read/write views onto one variant of an optional enum
//! - [`scheduler`] - Cancelable "sleep, then post to the mailbox" tasks owned by an actor
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning the actor.

pub mod mock;
pub mod projection;
pub mod scheduler;

pub use projection::*;
pub use scheduler::Scheduler;
