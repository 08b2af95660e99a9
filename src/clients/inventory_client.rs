use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

use crate::editor::{EditorId, EditorIntent};
use crate::inventory_actor::{Intent, InventoryError, InventoryRequest, InventorySnapshot, Slot};
use crate::model::ItemId;
use crate::row::RowIntent;

/// Client for interacting with the inventory actor.
///
/// Every intent is answered with the snapshot taken right after it was handled. Changes
/// caused by timers (predicted names, debounced checks, delayed commits) are only visible
/// through a later snapshot or through [`InventoryClient::subscribe`].
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
    snapshots: watch::Receiver<InventorySnapshot>,
}

impl InventoryClient {
    pub fn new(
        sender: mpsc::Sender<InventoryRequest>,
        snapshots: watch::Receiver<InventorySnapshot>,
    ) -> Self {
        Self { sender, snapshots }
    }

    #[instrument(skip(self))]
    pub async fn dispatch(&self, intent: Intent) -> Result<InventorySnapshot, InventoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InventoryRequest::Dispatch { intent, respond_to })
            .await
            .map_err(|_| InventoryError::ActorClosed)?;
        response.await.map_err(|_| InventoryError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<InventorySnapshot, InventoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InventoryRequest::Snapshot { respond_to })
            .await
            .map_err(|_| InventoryError::ActorClosed)?;
        response.await.map_err(|_| InventoryError::ActorDropped)?
    }

    /// A receiver that sees the snapshot after every message the actor processes.
    pub fn subscribe(&self) -> watch::Receiver<InventorySnapshot> {
        self.snapshots.clone()
    }

    pub async fn add_tapped(&self) -> Result<InventorySnapshot, InventoryError> {
        self.dispatch(Intent::AddTapped).await
    }

    pub async fn add_saved(&self) -> Result<InventorySnapshot, InventoryError> {
        self.dispatch(Intent::AddSaved).await
    }

    pub async fn add_canceled(&self) -> Result<InventorySnapshot, InventoryError> {
        self.dispatch(Intent::AddCanceled).await
    }

    pub async fn row(
        &self,
        id: ItemId,
        intent: RowIntent,
    ) -> Result<InventorySnapshot, InventoryError> {
        self.dispatch(Intent::Row { id, intent }).await
    }

    /// Sends a draft edit to `editor`, shown at `target`.
    #[instrument(skip(self, intent))]
    pub async fn edit_draft(
        &self,
        target: Slot,
        editor: EditorId,
        intent: EditorIntent,
    ) -> Result<InventorySnapshot, InventoryError> {
        debug!(?intent, "edit_draft called");
        self.dispatch(Intent::Editor {
            target,
            editor,
            intent,
        })
        .await
    }
}
