use serde::Serialize;

use crate::editor::ItemEditor;
use crate::framework::{unit_mut, CasePath};

/// The one sub-screen presented for a row, if any.
///
/// Editor payloads compare by [`EditorId`](crate::editor::EditorId): two routes are equal
/// only if they present the very same editor instance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowRoute {
    DeleteConfirm,
    Duplicate(ItemEditor),
    Edit(ItemEditor),
}

impl PartialEq for RowRoute {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RowRoute::DeleteConfirm, RowRoute::DeleteConfirm) => true,
            (RowRoute::Duplicate(a), RowRoute::Duplicate(b)) => a.id() == b.id(),
            (RowRoute::Edit(a), RowRoute::Edit(b)) => a.id() == b.id(),
            _ => false,
        }
    }
}

impl RowRoute {
    pub fn delete_confirm() -> CasePath<RowRoute, ()> {
        CasePath::new(
            |route| match route {
                RowRoute::DeleteConfirm => Some(&()),
                _ => None,
            },
            |route| match route {
                RowRoute::DeleteConfirm => Some(unit_mut()),
                _ => None,
            },
            |()| RowRoute::DeleteConfirm,
        )
    }

    pub fn duplicate() -> CasePath<RowRoute, ItemEditor> {
        CasePath::new(
            |route| match route {
                RowRoute::Duplicate(editor) => Some(editor),
                _ => None,
            },
            |route| match route {
                RowRoute::Duplicate(editor) => Some(editor),
                _ => None,
            },
            RowRoute::Duplicate,
        )
    }

    pub fn edit() -> CasePath<RowRoute, ItemEditor> {
        CasePath::new(
            |route| match route {
                RowRoute::Edit(editor) => Some(editor),
                _ => None,
            },
            |route| match route {
                RowRoute::Edit(editor) => Some(editor),
                _ => None,
            },
            RowRoute::Edit,
        )
    }

    /// The editor owned by this route, if it owns one.
    pub fn editor(&self) -> Option<&ItemEditor> {
        match self {
            RowRoute::DeleteConfirm => None,
            RowRoute::Duplicate(editor) | RowRoute::Edit(editor) => Some(editor),
        }
    }

    pub fn editor_mut(&mut self) -> Option<&mut ItemEditor> {
        match self {
            RowRoute::DeleteConfirm => None,
            RowRoute::Duplicate(editor) | RowRoute::Edit(editor) => Some(editor),
        }
    }
}

/// Payload-free view of a row's presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowState {
    Idle,
    ConfirmingDelete,
    Duplicating,
    Editing,
}

/// Intents a renderer forwards for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIntent {
    DeleteTapped,
    DeleteConfirmed,
    DeleteCanceled,
    DuplicateTapped,
    DuplicateSaved,
    DuplicateCanceled,
    EditTapped,
    /// Push/pop of the edit screen driven by the renderer's navigation stack.
    EditNavigated(bool),
    EditSaved,
    EditCanceled,
}
