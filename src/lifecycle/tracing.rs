//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); structured fields such as
//! `row`, `editor` and `slot` identify what a line is about.
//!
//! ## Levels
//!
//! - `info`: actor lifecycle and collection changes (added, removed, duplicated, edit committed)
//! - `debug`: every intent, every scheduled job, and every stale completion or ignored
//!   transition together with the reason it was dropped
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, a canceled edit whose commit timer had already fired reads:
//!
//! ```text
//! DEBUG Dispatch intent=Row { id: ItemId(1), intent: EditCanceled }
//! DEBUG Canceled owner=editor_3 pending=0
//! DEBUG Resume slot=item_1 editor=editor_3
//! DEBUG Stale completion dropped row=item_1 editor=editor_3
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
