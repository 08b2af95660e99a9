//! Messages understood by the inventory actor.

use tokio::sync::oneshot;

use super::error::InventoryError;
use super::store::{Completion, InventorySnapshot, Slot};
use crate::editor::{EditorId, EditorIntent};
use crate::model::ItemId;
use crate::row::RowIntent;

/// One-shot reply channel used by every request.
pub type Response<T> = oneshot::Sender<Result<T, InventoryError>>;

/// User intents accepted by the inventory.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    AddTapped,
    /// Commits the pending add editor's current draft.
    AddSaved,
    AddCanceled,
    Row {
        id: ItemId,
        intent: RowIntent,
    },
    /// A draft edit for the editor shown at `target`, dropped unless it is still `editor`.
    Editor {
        target: Slot,
        editor: EditorId,
        intent: EditorIntent,
    },
}

#[derive(Debug)]
pub enum InventoryRequest {
    Dispatch {
        intent: Intent,
        respond_to: Response<InventorySnapshot>,
    },
    Snapshot {
        respond_to: Response<InventorySnapshot>,
    },
    /// A delayed effect finished. Posted by the actor's own timers.
    Resume(Completion),
}
