//! # Editor Controller
//!
//! An [`ItemEditor`] stages changes to one draft [`Item`] for the add, duplicate and edit
//! flows. Nothing it holds is visible to the inventory until the owning flow commits it.
//!
//! Besides the draft, an editor maintains two derived signals:
//!
//! - `name_is_duplicate`, recomputed after a debounce every time the draft name changes.
//!   Each change bumps a name revision and the check carries that revision; a result is only
//!   applied if its revision is still the latest, so an older check resolving late can never
//!   overwrite a newer one.
//! - `suggested_colors`, fetched once per editor instance.
//!
//! Both are requested through [`Effect::Schedule`] and come back via [`ItemEditor::apply`].
//! The editor never checks whether it is still alive; that is the owner's job, keyed by
//! [`EditorId`].

mod intent;

pub use intent::{EditorIntent, EditorRoute};

use serde::Serialize;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::effects::{Effect, Job, JobResult};
use crate::framework::{case_of, presence, Binding, CaseOf};
use crate::model::{Color, Item, Status};

static NEXT_EDITOR_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one editor instance. Two editors over the same item are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EditorId(u64);

impl EditorId {
    fn next() -> Self {
        Self(NEXT_EDITOR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for EditorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "editor_{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemEditor {
    id: EditorId,
    item: Item,
    name_is_duplicate: bool,
    suggested_colors: Vec<Color>,
    is_saving: bool,
    route: Option<EditorRoute>,
    #[serde(skip)]
    name_revision: u64,
    #[serde(skip)]
    colors_loaded: bool,
}

impl ItemEditor {
    /// Opens an editor over `item` and requests the initial name check and color fetch.
    pub fn open(item: Item) -> (Self, Vec<Effect>) {
        let mut editor = Self {
            id: EditorId::next(),
            item,
            name_is_duplicate: false,
            suggested_colors: Vec::new(),
            is_saving: false,
            route: None,
            name_revision: 0,
            colors_loaded: false,
        };
        debug!(editor = %editor.id, item = %editor.item.id(), "Editor opened");

        let mut effects = editor.check_name();
        effects.push(Effect::Schedule {
            editor: editor.id,
            job: Job::LoadColors,
        });
        (editor, effects)
    }

    pub fn id(&self) -> EditorId {
        self.id
    }

    /// The staged draft.
    pub fn draft(&self) -> &Item {
        &self.item
    }

    pub fn name_is_duplicate(&self) -> bool {
        self.name_is_duplicate
    }

    pub fn suggested_colors(&self) -> &[Color] {
        &self.suggested_colors
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn route(&self) -> Option<EditorRoute> {
        self.route
    }

    pub fn is_color_picker_open(&self) -> bool {
        self.route
            .as_ref()
            .is_some_and(|route| EditorRoute::color_picker().matches(route))
    }

    /// Focused view of the draft's quantity, present only while it is in stock.
    pub fn in_stock_quantity(&mut self) -> Option<CaseOf<'_, u32>> {
        case_of(&mut self.item.status, Status::in_stock())
    }

    /// Focused view of the draft's back-order flag, present only while it is out of stock.
    pub fn back_order(&mut self) -> Option<CaseOf<'_, bool>> {
        case_of(&mut self.item.status, Status::out_of_stock())
    }

    /// Applies a draft edit. Ignored once a save is under way.
    pub fn handle(&mut self, intent: EditorIntent) -> Vec<Effect> {
        if self.is_saving {
            debug!(editor = %self.id, ?intent, "Editor is saving, intent ignored");
            return Vec::new();
        }

        match intent {
            EditorIntent::SetName(name) => return self.set_name(name),
            EditorIntent::SetColor(color) => {
                self.item.color = color;
                presence(&mut self.route, EditorRoute::color_picker()).set(false);
            }
            EditorIntent::SetQuantity(quantity) => {
                if let Some(mut view) = self.in_stock_quantity() {
                    view.set(quantity);
                }
            }
            EditorIntent::IncrementQuantity => {
                if let Some(mut view) = self.in_stock_quantity() {
                    view.modify(|quantity| *quantity = quantity.saturating_add(1));
                }
            }
            EditorIntent::DecrementQuantity => {
                if let Some(mut view) = self.in_stock_quantity() {
                    view.modify(|quantity| *quantity = quantity.saturating_sub(1));
                }
            }
            EditorIntent::SetBackOrder(flag) => {
                if let Some(mut view) = self.back_order() {
                    view.set(flag);
                }
            }
            EditorIntent::MarkSoldOut => {
                self.item.status = Status::OutOfStock {
                    is_on_back_order: false,
                };
            }
            EditorIntent::MarkBackInStock => {
                self.item.status = Status::InStock { quantity: 1 };
            }
            EditorIntent::ColorPickerNavigated(true) => {
                self.route = Some(EditorRoute::ColorPicker);
            }
            EditorIntent::ColorPickerNavigated(false) => {
                presence(&mut self.route, EditorRoute::color_picker()).set(false);
            }
        }
        Vec::new()
    }

    /// Replaces the draft name and schedules a duplicate check for it.
    pub fn set_name(&mut self, name: impl Into<String>) -> Vec<Effect> {
        self.item.name = name.into();
        self.check_name()
    }

    /// Marks the editor busy and returns the draft to commit. `None` if already saving.
    pub fn begin_save(&mut self) -> Option<Item> {
        if self.is_saving {
            return None;
        }
        self.is_saving = true;
        Some(self.item.clone())
    }

    /// Applies a derived-signal completion addressed to this editor.
    pub fn apply(&mut self, result: JobResult) -> Vec<Effect> {
        match result {
            JobResult::NameChecked {
                revision,
                is_duplicate,
            } => {
                if revision == self.name_revision {
                    self.name_is_duplicate = is_duplicate;
                } else {
                    debug!(
                        editor = %self.id,
                        revision,
                        latest = self.name_revision,
                        "Superseded name check dropped"
                    );
                }
                Vec::new()
            }
            JobResult::ColorsLoaded(colors) => {
                if self.colors_loaded {
                    debug!(editor = %self.id, "Colors already loaded");
                } else {
                    self.colors_loaded = true;
                    self.suggested_colors = colors;
                }
                Vec::new()
            }
            JobResult::NamePredicted(name) => self.set_name(name),
            other => {
                debug!(editor = %self.id, ?other, "Completion not handled by editor");
                Vec::new()
            }
        }
    }

    fn check_name(&mut self) -> Vec<Effect> {
        self.name_revision += 1;
        vec![Effect::Schedule {
            editor: self.id,
            job: Job::CheckName {
                revision: self.name_revision,
                name: self.item.name.clone(),
            },
        }]
    }
}
