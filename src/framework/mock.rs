//! # Mock Framework
//!
//! Utilities for testing code that holds an [`InventoryClient`] without running the actor.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its mailbox, then
//! helpers like [`expect_dispatch`] to assert what was sent and answer it.

use tokio::sync::{mpsc, watch};

use crate::clients::InventoryClient;
use crate::inventory_actor::{Intent, InventoryRequest, InventorySnapshot, Response};

/// Creates a client wired to a bare receiver.
///
/// The client's [`subscribe`](InventoryClient::subscribe) channel is returned too, so tests
/// can publish snapshots as if the actor had processed something.
pub fn create_mock_client(
    buffer_size: usize,
) -> (
    InventoryClient,
    mpsc::Receiver<InventoryRequest>,
    watch::Sender<InventorySnapshot>,
) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (snapshots, watcher) = watch::channel(InventorySnapshot::default());
    (InventoryClient::new(sender, watcher), receiver, snapshots)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(Intent, Response<InventorySnapshot>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Dispatch { intent, respond_to }) => Some((intent, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<Response<InventorySnapshot>> {
    match receiver.recv().await {
        Some(InventoryRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
