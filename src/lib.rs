#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Inventory Navigation
//!
//! > **Navigation state for an editable inventory, owned by one actor.**
//!
//! Every row of the inventory shows at most one sub-screen at a time: a delete confirmation,
//! a duplicate screen, or an edit screen. Instead of one flag per screen, each row holds a
//! single `Option<RowRoute>`, so two screens can never be active together. Renderers read the
//! variant they care about through the [`framework::projection`] views.
//!
//! ## Architecture Notes
//!
//! ### 1. Pure controllers
//! [`editor::ItemEditor`], [`row::ItemRow`] and
//! [`InventoryStore`](inventory_actor::InventoryStore) are synchronous state machines.
//! Intent handlers return [`effects::Effect`]s describing the delayed work they want, instead
//! of spawning it. This keeps every transition testable without a runtime.
//!
//! ### 2. One owner
//! The [`InventoryActor`](inventory_actor::InventoryActor) owns the store and processes
//! intents and timer completions from a single mailbox. No locks guard the state.
//!
//! ### 3. Cancelable effects
//! Delayed work runs on a [`Scheduler`](framework::Scheduler) keyed by editor identity.
//! Discarding an editor aborts its timers, and any completion that still arrives is checked
//! against the editor currently shown before it is applied.
//!
//! ### 4. Context Injection
//! The placeholder "smart" calls (name prediction, duplicate-name check, color suggestions)
//! live behind [`services::InventoryServices`], injected into `run()`.
//!
//! ## Module Tour
//!
//! - [`model`]: [`Item`](model::Item), [`Status`](model::Status), [`Color`](model::Color)
//! - [`framework`]: projections, the scheduler, and test mocks
//! - [`editor`], [`row`]: the editor and row controllers
//! - [`effects`]: what controllers ask their owner to do
//! - [`inventory_actor`]: the store and the actor around it
//! - [`clients`]: the typed client handed to renderers
//! - [`services`]: injected asynchronous collaborators
//! - [`lifecycle`]: configuration, tracing setup, and [`InventorySystem`](lifecycle::InventorySystem)
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod editor;
pub mod effects;
pub mod framework;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod row;
pub mod services;
