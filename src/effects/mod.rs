//! Effect descriptions returned by intent handlers.
//!
//! Controllers never sleep, spawn, or call services themselves. An intent handler mutates
//! its own state and returns a list of [`Effect`]s describing the asynchronous follow-up work
//! it wants. The owner of the controller (the inventory actor) turns them into timers.
//!
//! A scheduled [`Job`] carries everything needed to *validate* its completion later:
//! the owning editor's identity, plus a revision where ordering matters.

use crate::editor::EditorId;
use crate::model::{Color, Item};
use crate::services::InventoryServices;

/// Follow-up work requested by a controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run `job` after its configured delay on behalf of `editor`.
    Schedule { editor: EditorId, job: Job },
    /// `editor` was discarded; abort whatever it still has in flight.
    Cancel { editor: EditorId },
    /// The emitting row asked to be removed from the collection.
    Remove,
    /// The emitting row committed a duplicate that must be appended to the collection.
    Append(Item),
}

/// The kinds of delayed work an editor can own.
#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    /// Debounced "is this name already used" check for one name revision.
    CheckName { revision: u64, name: String },
    /// One-shot fetch of suggested colors.
    LoadColors,
    /// Predict the likely name of an item being added.
    PredictName,
    /// Simulated validation latency before an edit replaces the row's item.
    CommitEdit { item: Item },
    /// Simulated server round-trip before a duplicate is inserted.
    CommitDuplicate { item: Item },
}

impl Job {
    /// Performs the job's work once its delay has elapsed.
    pub async fn resolve(self, services: &dyn InventoryServices) -> JobResult {
        match self {
            Job::CheckName { revision, name } => JobResult::NameChecked {
                revision,
                is_duplicate: services.is_name_taken(&name).await,
            },
            Job::LoadColors => JobResult::ColorsLoaded(services.suggested_colors().await),
            Job::PredictName => JobResult::NamePredicted(services.predict_name().await),
            Job::CommitEdit { item } => JobResult::EditCommitted(item),
            Job::CommitDuplicate { item } => JobResult::DuplicateCommitted(item),
        }
    }
}

/// Outcome of a resolved [`Job`], to be applied only if its owner is still current.
#[derive(Debug, Clone, PartialEq)]
pub enum JobResult {
    NameChecked { revision: u64, is_duplicate: bool },
    ColorsLoaded(Vec<Color>),
    NamePredicted(String),
    EditCommitted(Item),
    DuplicateCommitted(Item),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use crate::services::PlaceholderServices;

    #[tokio::test]
    async fn test_resolve_with_placeholder_services() {
        let services = PlaceholderServices;

        let checked = Job::CheckName { revision: 3, name: "Keyboard".into() }
            .resolve(&services)
            .await;
        assert_eq!(checked, JobResult::NameChecked { revision: 3, is_duplicate: true });

        let predicted = Job::PredictName.resolve(&services).await;
        assert_eq!(predicted, JobResult::NamePredicted("Bluetooth keyboard".into()));

        let item = Item::new("Mouse", None, Status::InStock { quantity: 2 });
        let committed = Job::CommitEdit { item: item.clone() }.resolve(&services).await;
        assert_eq!(committed, JobResult::EditCommitted(item));
    }
}
