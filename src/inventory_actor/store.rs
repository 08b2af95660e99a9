//! # Inventory Store
//!
//! The ordered collection of [`ItemRow`]s plus the optional pending "add new item" flow.
//!
//! The store is plain synchronous state. Every operation returns the [`Command`]s it needs
//! carried out (start a delayed job, cancel an editor's jobs); the actor owning the store
//! performs them and feeds finished jobs back through [`InventoryStore::resume`].
//!
//! ## Invariants
//! - Insertion order is display order.
//! - No two rows share an [`ItemId`]. Inserting an item whose id is already present mints a
//!   fresh id for the newcomer.
//! - Every completion is addressed to a [`Slot`] and an [`EditorId`]. It is applied only if
//!   that slot still shows that editor.

use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, info};

use super::message::Intent;
use crate::editor::{EditorId, EditorIntent, ItemEditor};
use crate::effects::{Effect, Job, JobResult};
use crate::framework::CasePath;
use crate::model::{Item, ItemId};
use crate::row::{ItemRow, RowIntent};

/// The pending add flow, structured like a row route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryRoute {
    Adding(ItemEditor),
}

impl PartialEq for InventoryRoute {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (InventoryRoute::Adding(a), InventoryRoute::Adding(b)) => a.id() == b.id(),
        }
    }
}

impl InventoryRoute {
    pub fn adding() -> CasePath<InventoryRoute, ItemEditor> {
        CasePath::new(
            |route| match route {
                InventoryRoute::Adding(editor) => Some(editor),
            },
            |route| match route {
                InventoryRoute::Adding(editor) => Some(editor),
            },
            InventoryRoute::Adding,
        )
    }
}

/// Where an editor lives: the pending add flow, or the route of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Adding,
    Row(ItemId),
}

impl Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Adding => write!(f, "adding"),
            Slot::Row(id) => write!(f, "{}", id),
        }
    }
}

/// Work the store's owner must carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run `job` after its delay, then resume with the result.
    Start {
        slot: Slot,
        editor: EditorId,
        job: Job,
    },
    /// Abort everything `editor` still has in flight.
    Cancel(EditorId),
}

/// A finished job, addressed to the editor that asked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub slot: Slot,
    pub editor: EditorId,
    pub result: JobResult,
}

/// Read-only copy of the whole inventory for renderers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventorySnapshot {
    pub rows: Vec<ItemRow>,
    pub route: Option<InventoryRoute>,
}

impl InventorySnapshot {
    pub fn row(&self, id: ItemId) -> Option<&ItemRow> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn items(&self) -> Vec<&Item> {
        self.rows.iter().map(ItemRow::item).collect()
    }

    /// The pending add editor, if an add is in progress.
    pub fn adding(&self) -> Option<&ItemEditor> {
        self.route
            .as_ref()
            .and_then(|route| InventoryRoute::adding().extract(route))
    }
}

/// Initial contents of a store.
#[derive(Debug, Clone, Default)]
pub struct InventorySeed {
    pub items: Vec<Item>,
    /// Opens the add flow on this draft right away.
    pub pending_add: Option<Item>,
}

impl InventorySeed {
    pub fn items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
            pending_add: None,
        }
    }

    pub fn with_pending_add(mut self, draft: Item) -> Self {
        self.pending_add = Some(draft);
        self
    }
}

#[derive(Debug, Default)]
pub struct InventoryStore {
    rows: Vec<ItemRow>,
    route: Option<InventoryRoute>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `items` in order.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut store = Self::new();
        for item in items {
            store.insert(item);
        }
        store
    }

    /// Builds a store from `seed`, returning the work its pending add flow needs started.
    pub fn seeded(seed: InventorySeed) -> (Self, Vec<Command>) {
        let mut store = Self::with_items(seed.items);
        let commands = match seed.pending_add {
            Some(draft) => store.begin_add_with(draft),
            None => Vec::new(),
        };
        (store, commands)
    }

    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    pub fn row(&self, id: ItemId) -> Option<&ItemRow> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn route(&self) -> Option<&InventoryRoute> {
        self.route.as_ref()
    }

    pub fn adding(&self) -> Option<&ItemEditor> {
        self.route
            .as_ref()
            .and_then(|route| InventoryRoute::adding().extract(route))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            rows: self.rows.clone(),
            route: self.route.clone(),
        }
    }

    pub fn dispatch(&mut self, intent: Intent) -> Vec<Command> {
        match intent {
            Intent::AddTapped => self.begin_add(),
            Intent::AddSaved => self.commit_pending_add(),
            Intent::AddCanceled => self.cancel_add(),
            Intent::Row { id, intent } => self.row_intent(id, intent),
            Intent::Editor {
                target,
                editor,
                intent,
            } => self.editor_intent(target, editor, intent),
        }
    }

    /// Opens the add flow on an empty draft and asks for a name prediction.
    pub fn begin_add(&mut self) -> Vec<Command> {
        let mut commands = self.begin_add_with(Item::blank());
        if let Some(editor) = self.adding() {
            commands.push(Command::Start {
                slot: Slot::Adding,
                editor: editor.id(),
                job: Job::PredictName,
            });
        }
        commands
    }

    /// Opens the add flow on a given draft. No name prediction is requested.
    pub fn begin_add_with(&mut self, draft: Item) -> Vec<Command> {
        let (editor, effects) = ItemEditor::open(draft);
        debug!(editor = %editor.id(), "Add started");

        let mut commands = self.set_route(Some(InventoryRoute::Adding(editor)));
        commands.extend(self.interpret(Slot::Adding, effects));
        commands
    }

    pub fn cancel_add(&mut self) -> Vec<Command> {
        self.set_route(None)
    }

    /// Appends `item` and closes the add flow. No-op unless an add is pending.
    pub fn commit_add(&mut self, item: Item) -> Vec<Command> {
        if self.route.is_none() {
            debug!("No add pending, commit ignored");
            return Vec::new();
        }
        let commands = self.set_route(None);
        let id = self.insert(item);
        info!(%id, size = self.rows.len(), "Item added");
        commands
    }

    /// Commits the pending add editor's current draft.
    pub fn commit_pending_add(&mut self) -> Vec<Command> {
        match self.adding().map(|editor| editor.draft().clone()) {
            Some(draft) => self.commit_add(draft),
            None => {
                debug!("No add pending, save ignored");
                Vec::new()
            }
        }
    }

    /// Removes the row with `id`, keeping the order of the rest. No-op if absent.
    pub fn remove(&mut self, id: ItemId) -> Vec<Command> {
        let Some(index) = self.rows.iter().position(|row| row.id() == id) else {
            debug!(%id, "Row not found, remove ignored");
            return Vec::new();
        };
        let mut row = self.rows.remove(index);
        info!(%id, size = self.rows.len(), "Item removed");

        let effects = row.discard();
        self.interpret(Slot::Row(id), effects)
    }

    /// Appends `item` as a new row and clears the route of row `original`.
    pub fn duplicate(&mut self, original: ItemId, item: Item) -> Vec<Command> {
        let Some(source) = self.rows.iter_mut().find(|row| row.id() == original) else {
            debug!(%original, "Row not found, duplicate ignored");
            return Vec::new();
        };
        let effects = source.discard();
        let commands = self.interpret(Slot::Row(original), effects);

        let id = self.insert(item);
        info!(%original, %id, size = self.rows.len(), "Item duplicated");
        commands
    }

    pub fn row_intent(&mut self, id: ItemId, intent: RowIntent) -> Vec<Command> {
        let Some(row) = self.rows.iter_mut().find(|row| row.id() == id) else {
            debug!(%id, ?intent, "Row not found, intent ignored");
            return Vec::new();
        };
        let effects = row.handle(intent);
        self.interpret(Slot::Row(id), effects)
    }

    /// Routes a draft edit to the editor at `target`, if it is still `editor`.
    pub fn editor_intent(
        &mut self,
        target: Slot,
        editor: EditorId,
        intent: EditorIntent,
    ) -> Vec<Command> {
        let effects = match self.editor_mut(target, editor) {
            Some(current) => current.handle(intent),
            None => {
                debug!(%target, %editor, ?intent, "Editor gone, intent ignored");
                return Vec::new();
            }
        };
        self.interpret(target, effects)
    }

    /// Applies a finished job if its editor is still the one shown at its slot.
    pub fn resume(&mut self, completion: Completion) -> Vec<Command> {
        let Completion {
            slot,
            editor,
            result,
        } = completion;

        let effects = match slot {
            Slot::Adding => match self.editor_mut(slot, editor) {
                Some(current) => current.apply(result),
                None => {
                    debug!(%editor, "Add flow gone, completion dropped");
                    return Vec::new();
                }
            },
            Slot::Row(id) => match self.rows.iter_mut().find(|row| row.id() == id) {
                Some(row) => row.resume(editor, result),
                None => {
                    debug!(%id, %editor, "Row gone, completion dropped");
                    return Vec::new();
                }
            },
        };
        self.interpret(slot, effects)
    }

    fn editor_mut(&mut self, slot: Slot, editor: EditorId) -> Option<&mut ItemEditor> {
        match slot {
            Slot::Adding => self
                .route
                .as_mut()
                .and_then(|route| InventoryRoute::adding().extract_mut(route))
                .filter(|current| current.id() == editor),
            Slot::Row(id) => self
                .rows
                .iter_mut()
                .find(|row| row.id() == id)?
                .editor_mut(editor),
        }
    }

    fn set_route(&mut self, route: Option<InventoryRoute>) -> Vec<Command> {
        match std::mem::replace(&mut self.route, route) {
            Some(InventoryRoute::Adding(editor)) => vec![Command::Cancel(editor.id())],
            None => Vec::new(),
        }
    }

    /// Appends a row, minting a fresh id if `item`'s is taken.
    fn insert(&mut self, item: Item) -> ItemId {
        let item = if self.row(item.id()).is_some() {
            debug!(id = %item.id(), "Id already present, minting a fresh one");
            item.duplicate()
        } else {
            item
        };
        let id = item.id();
        self.rows.push(ItemRow::new(item));
        id
    }

    fn interpret(&mut self, slot: Slot, effects: Vec<Effect>) -> Vec<Command> {
        let mut commands = Vec::new();
        for effect in effects {
            match (effect, slot) {
                (Effect::Schedule { editor, job }, _) => {
                    commands.push(Command::Start { slot, editor, job })
                }
                (Effect::Cancel { editor }, _) => commands.push(Command::Cancel(editor)),
                (Effect::Remove, Slot::Row(id)) => commands.extend(self.remove(id)),
                (Effect::Append(item), Slot::Row(id)) => commands.extend(self.duplicate(id, item)),
                (effect, Slot::Adding) => {
                    debug!(?effect, "Effect not meaningful for the add flow")
                }
            }
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Status};
    use crate::row::RowState;

    fn keyboard() -> Item {
        Item::new("Keyboard", Some(Color::blue()), Status::InStock { quantity: 100 })
    }

    /// Runs every started job immediately with the placeholder results.
    fn settle(store: &mut InventoryStore, commands: Vec<Command>) {
        let mut queue = commands;
        while let Some(command) = queue.pop() {
            if let Command::Start { slot, editor, job } = command {
                let result = match job {
                    Job::CheckName { revision, name } => JobResult::NameChecked {
                        revision,
                        is_duplicate: name == "Keyboard",
                    },
                    Job::LoadColors => JobResult::ColorsLoaded(vec![Color::new("Pink", 1.0, 0.7, 0.7)]),
                    Job::PredictName => JobResult::NamePredicted("Bluetooth keyboard".into()),
                    Job::CommitEdit { item } => JobResult::EditCommitted(item),
                    Job::CommitDuplicate { item } => JobResult::DuplicateCommitted(item),
                };
                queue.extend(store.resume(Completion {
                    slot,
                    editor,
                    result,
                }));
            }
        }
    }

    fn commit_job(commands: &[Command]) -> Option<Completion> {
        commands.iter().find_map(|command| match command {
            Command::Start {
                slot,
                editor,
                job: Job::CommitEdit { item },
            } => Some(Completion {
                slot: *slot,
                editor: *editor,
                result: JobResult::EditCommitted(item.clone()),
            }),
            Command::Start {
                slot,
                editor,
                job: Job::CommitDuplicate { item },
            } => Some(Completion {
                slot: *slot,
                editor: *editor,
                result: JobResult::DuplicateCommitted(item.clone()),
            }),
            _ => None,
        })
    }

    #[test]
    fn test_add_flow() {
        let mut store = InventoryStore::new();

        let commands = store.begin_add();
        assert!(commands
            .iter()
            .any(|c| matches!(c, Command::Start { job: Job::PredictName, .. })));
        let draft = store.adding().map(|e| e.draft().clone()).expect("adding");

        store.commit_add(draft.clone());

        assert_eq!(store.len(), 1);
        assert_eq!(store.rows()[0].item(), &draft);
        assert!(store.route().is_none());
    }

    #[test]
    fn test_commit_add_without_pending_add_is_noop() {
        let mut store = InventoryStore::new();
        assert!(store.commit_add(keyboard()).is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_predicted_name_applies_to_current_add_only() {
        let mut store = InventoryStore::new();
        store.begin_add();
        let first = store.adding().map(ItemEditor::id).expect("adding");

        // Restart the add flow; the first editor's prediction is now stale
        store.cancel_add();
        store.begin_add_with(Item::blank());
        let stale = Completion {
            slot: Slot::Adding,
            editor: first,
            result: JobResult::NamePredicted("Bluetooth keyboard".into()),
        };
        assert!(store.resume(stale).is_empty());
        assert_eq!(store.adding().map(|e| e.draft().name.as_str()), Some(""));
    }

    #[test]
    fn test_prediction_fills_in_name() {
        let mut store = InventoryStore::new();
        let commands = store.begin_add();
        settle(&mut store, commands);

        let editor = store.adding().expect("adding");
        assert_eq!(editor.draft().name, "Bluetooth keyboard");
        assert!(!editor.name_is_duplicate());
        assert_eq!(editor.suggested_colors().len(), 1);
    }

    #[test]
    fn test_cancel_add_cancels_editor() {
        let mut store = InventoryStore::new();
        store.begin_add();
        let editor = store.adding().map(ItemEditor::id).expect("adding");

        assert_eq!(store.cancel_add(), vec![Command::Cancel(editor)]);
        assert!(store.route().is_none());
    }

    #[test]
    fn test_delete_flow() {
        let item = keyboard();
        let id = item.id();
        let mut store = InventoryStore::with_items([item]);

        store.row_intent(id, RowIntent::DeleteTapped);
        assert_eq!(store.row(id).map(ItemRow::state), Some(RowState::ConfirmingDelete));

        store.row_intent(id, RowIntent::DeleteConfirmed);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_preserves_order() {
        let items = [keyboard(), keyboard().duplicate(), keyboard().duplicate()];
        let ids: Vec<ItemId> = items.iter().map(Item::id).collect();
        let mut store = InventoryStore::with_items(items);

        store.remove(ids[1]);
        store.remove(ids[1]);

        let remaining: Vec<ItemId> = store.rows().iter().map(ItemRow::id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);
    }

    #[test]
    fn test_duplicate_flow() {
        let item = keyboard();
        let id = item.id();
        let mut store = InventoryStore::with_items([item.clone(), Item::blank()]);

        store.row_intent(id, RowIntent::DuplicateTapped);
        let draft = store
            .row(id)
            .and_then(ItemRow::editor)
            .map(|e| e.draft().clone())
            .expect("duplicating");
        assert_ne!(draft.id(), id);

        let commands = store.row_intent(id, RowIntent::DuplicateSaved);
        let completion = commit_job(&commands).expect("commit scheduled");
        store.resume(completion);

        assert_eq!(store.len(), 3);
        assert_eq!(store.rows()[0].item(), &item);
        assert_eq!(store.rows()[0].state(), RowState::Idle);

        let copy = store.rows()[2].item();
        assert_eq!(copy.id(), draft.id());
        assert_eq!(copy.name, item.name);
        assert_eq!(copy.color, item.color);
        assert_eq!(copy.status, item.status);
    }

    #[test]
    fn test_inserting_taken_id_mints_fresh_one() {
        let item = keyboard();
        let mut store = InventoryStore::with_items([item.clone()]);

        store.duplicate(item.id(), item.clone());

        assert_eq!(store.len(), 2);
        assert_ne!(store.rows()[1].id(), item.id());
        assert_eq!(store.rows()[1].item().name, item.name);
    }

    #[test]
    fn test_canceled_edit_does_not_apply_later() {
        let item = keyboard();
        let id = item.id();
        let mut store = InventoryStore::with_items([item.clone()]);

        store.row_intent(id, RowIntent::EditTapped);
        let editor = store.row(id).and_then(ItemRow::editor).map(ItemEditor::id).expect("editing");
        store.editor_intent(Slot::Row(id), editor, EditorIntent::SetName("Mouse".into()));

        let completion = commit_job(&store.row_intent(id, RowIntent::EditSaved)).expect("commit");
        let commands = store.row_intent(id, RowIntent::EditCanceled);
        assert!(commands.contains(&Command::Cancel(editor)));

        assert!(store.resume(completion).is_empty());
        assert_eq!(store.row(id).map(ItemRow::item), Some(&item));
    }

    #[test]
    fn test_removing_row_cancels_its_editor() {
        let item = keyboard();
        let id = item.id();
        let mut store = InventoryStore::with_items([item]);

        store.row_intent(id, RowIntent::EditTapped);
        let editor = store.row(id).and_then(ItemRow::editor).map(ItemEditor::id).expect("editing");

        assert_eq!(store.remove(id), vec![Command::Cancel(editor)]);
        assert!(store.remove(id).is_empty());
    }

    #[test]
    fn test_at_most_one_route_per_row() {
        let item = keyboard();
        let id = item.id();
        let mut store = InventoryStore::with_items([item]);

        let intents = [
            RowIntent::DeleteTapped,
            RowIntent::EditTapped,
            RowIntent::DuplicateTapped,
            RowIntent::EditNavigated(true),
            RowIntent::DeleteTapped,
            RowIntent::DeleteCanceled,
        ];
        let expected = [
            RowState::ConfirmingDelete,
            RowState::Editing,
            RowState::Duplicating,
            RowState::Editing,
            RowState::ConfirmingDelete,
            RowState::Idle,
        ];
        for (intent, state) in intents.into_iter().zip(expected) {
            store.row_intent(id, intent);
            assert_eq!(store.row(id).map(ItemRow::state), Some(state));
        }
    }

    #[test]
    fn test_editor_intent_for_replaced_editor_is_dropped() {
        let item = keyboard();
        let id = item.id();
        let mut store = InventoryStore::with_items([item]);

        store.row_intent(id, RowIntent::EditTapped);
        let old = store.row(id).and_then(ItemRow::editor).map(ItemEditor::id).expect("editing");
        store.row_intent(id, RowIntent::DuplicateTapped);

        let commands = store.editor_intent(Slot::Row(id), old, EditorIntent::SetName("Mouse".into()));
        assert!(commands.is_empty());
        assert_eq!(
            store.row(id).and_then(ItemRow::editor).map(|e| e.draft().name.clone()),
            Some("Keyboard".to_string())
        );
    }

    #[test]
    fn test_seeded_pending_add_skips_prediction() {
        let draft = Item::new("Mouse", None, Status::InStock { quantity: 3 });
        let seed = InventorySeed::items([keyboard()]).with_pending_add(draft.clone());

        let (store, commands) = InventoryStore::seeded(seed);

        assert_eq!(store.len(), 1);
        assert_eq!(store.adding().map(ItemEditor::draft), Some(&draft));
        assert!(!commands
            .iter()
            .any(|c| matches!(c, Command::Start { job: Job::PredictName, .. })));
        assert!(commands
            .iter()
            .any(|c| matches!(c, Command::Start { job: Job::LoadColors, .. })));
    }

    #[test]
    fn test_snapshot_serializes() {
        let store = InventoryStore::with_items([keyboard()]);
        let json = serde_json::to_value(store.snapshot()).expect("serialize");
        assert_eq!(json["rows"][0]["item"]["name"], "Keyboard");
        assert_eq!(json["rows"][0]["item"]["status"]["status"], "in_stock");
        assert!(json["route"].is_null());
    }
}
