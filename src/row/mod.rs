//! # Row Controller
//!
//! An [`ItemRow`] owns one [`Item`] and at most one [`RowRoute`]. The route is the single
//! source of truth for which sub-screen a renderer shows for the row, so the delete
//! confirmation, the duplicate screen and the edit screen exclude each other by
//! construction.
//!
//! ## Transitions
//!
//! | From | Intent | To | Effects |
//! |------|--------|----|---------|
//! | any | `DeleteTapped` | `ConfirmingDelete` | cancel replaced editor |
//! | `ConfirmingDelete` | `DeleteConfirmed` | `Idle` | [`Effect::Remove`] |
//! | `ConfirmingDelete` | `DeleteCanceled` | `Idle` | |
//! | any | `DuplicateTapped` | `Duplicating` | editor effects |
//! | `Duplicating` | `DuplicateSaved` | `Duplicating` (saving) | delayed commit |
//! | `Duplicating` | `DuplicateCanceled` | `Idle` | cancel editor |
//! | not editing | `EditTapped` | `Editing` | editor effects |
//! | `Editing` | `EditSaved` | `Editing` (saving) | delayed commit |
//! | `Editing` | `EditCanceled` | `Idle` | cancel editor |
//!
//! A delayed commit lands through [`ItemRow::resume`], which only applies it if the route
//! still presents the editor that scheduled it.
//!
//! The row never reaches back into the collection that owns it. Removal and insertion of a
//! duplicate are requested with [`Effect::Remove`] and [`Effect::Append`].

mod route;

pub use route::{RowIntent, RowRoute, RowState};

use serde::Serialize;
use tracing::{debug, info};

use crate::editor::{EditorId, ItemEditor};
use crate::effects::{Effect, Job, JobResult};
use crate::framework::{presence, project_case, Binding};
use crate::model::{Item, ItemId};

#[derive(Debug, Clone, Serialize)]
pub struct ItemRow {
    item: Item,
    route: Option<RowRoute>,
}

impl ItemRow {
    pub fn new(item: Item) -> Self {
        Self { item, route: None }
    }

    pub fn id(&self) -> ItemId {
        self.item.id()
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn route(&self) -> Option<&RowRoute> {
        self.route.as_ref()
    }

    pub fn state(&self) -> RowState {
        match self.route {
            None => RowState::Idle,
            Some(RowRoute::DeleteConfirm) => RowState::ConfirmingDelete,
            Some(RowRoute::Duplicate(_)) => RowState::Duplicating,
            Some(RowRoute::Edit(_)) => RowState::Editing,
        }
    }

    /// The editor presented by the current route, if any.
    pub fn editor(&self) -> Option<&ItemEditor> {
        self.route.as_ref().and_then(RowRoute::editor)
    }

    /// The presented editor, but only if it is the instance identified by `id`.
    pub fn editor_mut(&mut self, id: EditorId) -> Option<&mut ItemEditor> {
        self.route
            .as_mut()
            .and_then(RowRoute::editor_mut)
            .filter(|editor| editor.id() == id)
    }

    pub fn handle(&mut self, intent: RowIntent) -> Vec<Effect> {
        let id = self.id();
        debug!(row = %id, ?intent, state = ?self.state(), "Row intent");

        match intent {
            RowIntent::DeleteTapped => self.navigate(Some(RowRoute::DeleteConfirm)),
            RowIntent::DeleteConfirmed => {
                if !presence(&mut self.route, RowRoute::delete_confirm()).get() {
                    debug!(row = %id, "No delete confirmation showing");
                    return Vec::new();
                }
                self.route = None;
                vec![Effect::Remove]
            }
            RowIntent::DeleteCanceled => {
                let mut showing = presence(&mut self.route, RowRoute::delete_confirm());
                if showing.get() {
                    showing.set(false);
                }
                Vec::new()
            }
            RowIntent::DuplicateTapped => {
                let (editor, mut effects) = ItemEditor::open(self.item.duplicate());
                effects.extend(self.navigate(Some(RowRoute::Duplicate(editor))));
                effects
            }
            RowIntent::DuplicateSaved => {
                let mut duplicate = project_case(&mut self.route, RowRoute::duplicate());
                match duplicate.get_mut() {
                    Some(editor) => Self::begin_commit(editor, |item| Job::CommitDuplicate { item }),
                    None => {
                        debug!(row = %id, "Not duplicating");
                        Vec::new()
                    }
                }
            }
            RowIntent::DuplicateCanceled => self.dismiss(RowState::Duplicating),
            RowIntent::EditTapped | RowIntent::EditNavigated(true) => {
                if self.state() == RowState::Editing {
                    return Vec::new();
                }
                let (editor, mut effects) = ItemEditor::open(self.item.clone());
                effects.extend(self.navigate(Some(RowRoute::Edit(editor))));
                effects
            }
            RowIntent::EditSaved => {
                let mut edit = project_case(&mut self.route, RowRoute::edit());
                match edit.get_mut() {
                    Some(editor) => Self::begin_commit(editor, |item| Job::CommitEdit { item }),
                    None => {
                        debug!(row = %id, "Not editing");
                        Vec::new()
                    }
                }
            }
            RowIntent::EditCanceled | RowIntent::EditNavigated(false) => {
                self.dismiss(RowState::Editing)
            }
        }
    }

    /// Applies a completion scheduled by `editor`. Dropped unless that editor is still shown.
    pub fn resume(&mut self, editor: EditorId, result: JobResult) -> Vec<Effect> {
        if self.editor().map(ItemEditor::id) != Some(editor) {
            debug!(row = %self.id(), %editor, "Stale completion dropped");
            return Vec::new();
        }

        let state = self.state();
        match result {
            JobResult::EditCommitted(item) if state == RowState::Editing => {
                self.item = item;
                self.route = None;
                info!(row = %self.id(), name = %self.item.name, "Edit committed");
                vec![Effect::Cancel { editor }]
            }
            JobResult::DuplicateCommitted(item) if state == RowState::Duplicating => {
                self.route = None;
                vec![Effect::Cancel { editor }, Effect::Append(item)]
            }
            JobResult::EditCommitted(_) | JobResult::DuplicateCommitted(_) => {
                debug!(row = %self.id(), %editor, "Commit for another flow dropped");
                Vec::new()
            }
            other => self
                .editor_mut(editor)
                .map(|current| current.apply(other))
                .unwrap_or_default(),
        }
    }

    /// Releases whatever the row still has in flight, before the row is removed.
    pub fn discard(&mut self) -> Vec<Effect> {
        self.navigate(None)
    }

    fn begin_commit(editor: &mut ItemEditor, job: fn(Item) -> Job) -> Vec<Effect> {
        match editor.begin_save() {
            Some(draft) => vec![Effect::Schedule {
                editor: editor.id(),
                job: job(draft),
            }],
            None => Vec::new(),
        }
    }

    /// Clears the route if it is showing `state`.
    fn dismiss(&mut self, state: RowState) -> Vec<Effect> {
        if self.state() != state {
            debug!(row = %self.id(), ?state, "Nothing to dismiss");
            return Vec::new();
        }
        self.navigate(None)
    }

    /// Replaces the route, cancelling the work of any editor it discards.
    fn navigate(&mut self, route: Option<RowRoute>) -> Vec<Effect> {
        match std::mem::replace(&mut self.route, route) {
            Some(RowRoute::Duplicate(editor) | RowRoute::Edit(editor)) => vec![Effect::Cancel {
                editor: editor.id(),
            }],
            Some(RowRoute::DeleteConfirm) | None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Status};

    fn row() -> ItemRow {
        ItemRow::new(Item::new(
            "Keyboard",
            Some(Color::blue()),
            Status::InStock { quantity: 100 },
        ))
    }

    fn scheduled_commit(effects: &[Effect]) -> (EditorId, JobResult) {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::Schedule {
                    editor,
                    job: Job::CommitEdit { item },
                } => Some((*editor, JobResult::EditCommitted(item.clone()))),
                Effect::Schedule {
                    editor,
                    job: Job::CommitDuplicate { item },
                } => Some((*editor, JobResult::DuplicateCommitted(item.clone()))),
                _ => None,
            })
            .expect("no commit scheduled")
    }

    #[test]
    fn test_delete_flow() {
        let mut row = row();

        row.handle(RowIntent::DeleteTapped);
        assert_eq!(row.state(), RowState::ConfirmingDelete);

        let effects = row.handle(RowIntent::DeleteConfirmed);
        assert_eq!(effects, vec![Effect::Remove]);
        assert_eq!(row.state(), RowState::Idle);
    }

    #[test]
    fn test_delete_confirmed_without_confirmation_is_noop() {
        let mut row = row();
        assert!(row.handle(RowIntent::DeleteConfirmed).is_empty());

        row.handle(RowIntent::EditTapped);
        row.handle(RowIntent::DeleteCanceled);
        assert_eq!(row.state(), RowState::Editing);
    }

    #[test]
    fn test_new_route_replaces_and_cancels_previous() {
        let mut row = row();

        row.handle(RowIntent::EditTapped);
        let editor = row.editor().map(ItemEditor::id).expect("editing");

        let effects = row.handle(RowIntent::DuplicateTapped);
        assert_eq!(row.state(), RowState::Duplicating);
        assert!(effects.contains(&Effect::Cancel { editor }));

        let effects = row.handle(RowIntent::DeleteTapped);
        assert_eq!(row.state(), RowState::ConfirmingDelete);
        assert_eq!(effects.len(), 1);
        assert!(row.editor().is_none());
    }

    #[test]
    fn test_duplicate_seeds_fresh_identity() {
        let mut row = row();
        row.handle(RowIntent::DuplicateTapped);

        let draft = row.editor().map(|e| e.draft().clone()).expect("duplicating");
        assert_ne!(draft.id(), row.id());
        assert_eq!(draft.name, row.item().name);
        assert_eq!(draft.color, row.item().color);
        assert_eq!(draft.status, row.item().status);
    }

    #[test]
    fn test_duplicate_commit_appends_after_delay() {
        let mut row = row();
        let original = row.item().clone();
        row.handle(RowIntent::DuplicateTapped);

        let effects = row.handle(RowIntent::DuplicateSaved);
        assert!(row.editor().is_some_and(ItemEditor::is_saving));
        assert_eq!(row.state(), RowState::Duplicating);

        let (editor, result) = scheduled_commit(&effects);
        let effects = row.resume(editor, result);

        assert_eq!(row.state(), RowState::Idle);
        assert_eq!(row.item(), &original);
        assert!(matches!(effects.last(), Some(Effect::Append(item)) if item.name == "Keyboard"));
    }

    #[test]
    fn test_duplicate_canceled_cancels_editor_and_commit() {
        let mut row = row();
        let original = row.item().clone();
        row.handle(RowIntent::DuplicateTapped);
        let (editor, result) = scheduled_commit(&row.handle(RowIntent::DuplicateSaved));

        let effects = row.handle(RowIntent::DuplicateCanceled);
        assert_eq!(effects, vec![Effect::Cancel { editor }]);
        assert_eq!(row.state(), RowState::Idle);

        // A commit that slipped past the abort appends nothing
        assert!(row.resume(editor, result).is_empty());
        assert_eq!(row.item(), &original);

        // Only a showing duplicate screen is dismissed
        row.handle(RowIntent::EditTapped);
        assert!(row.handle(RowIntent::DuplicateCanceled).is_empty());
        assert_eq!(row.state(), RowState::Editing);
    }

    #[test]
    fn test_edit_commit_replaces_item_keeping_identity() {
        let mut row = row();
        let id = row.id();
        row.handle(RowIntent::EditTapped);

        let editor = row.editor().map(ItemEditor::id).expect("editing");
        row.editor_mut(editor)
            .expect("editor")
            .handle(crate::editor::EditorIntent::SetName("Mouse".into()));

        let (editor, result) = scheduled_commit(&row.handle(RowIntent::EditSaved));
        row.resume(editor, result);

        assert_eq!(row.state(), RowState::Idle);
        assert_eq!(row.id(), id);
        assert_eq!(row.item().name, "Mouse");
    }

    #[test]
    fn test_canceled_edit_commit_is_ignored() {
        let mut row = row();
        let original = row.item().clone();
        row.handle(RowIntent::EditTapped);

        let effects = row.handle(RowIntent::EditSaved);
        let (editor, mut result) = scheduled_commit(&effects);
        if let JobResult::EditCommitted(item) = &mut result {
            item.name = "Mouse".into();
        }

        row.handle(RowIntent::EditCanceled);
        // A new edit session must not accept the old editor's commit either
        row.handle(RowIntent::EditTapped);
        assert!(row.resume(editor, result).is_empty());

        assert_eq!(row.item(), &original);
        assert_eq!(row.state(), RowState::Editing);
    }

    #[test]
    fn test_edit_tapped_twice_keeps_editor() {
        let mut row = row();
        row.handle(RowIntent::EditTapped);
        let first = row.route().cloned();

        assert!(row.handle(RowIntent::EditNavigated(true)).is_empty());
        assert_eq!(row.route().cloned(), first);

        row.handle(RowIntent::EditNavigated(false));
        assert_eq!(row.state(), RowState::Idle);
    }
}
