use serde::Serialize;

use crate::framework::{unit_mut, CasePath};
use crate::model::Color;

/// Draft edits a renderer can forward to an open editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    SetName(String),
    /// Picking a color (or clearing it) also dismisses the color picker.
    SetColor(Option<Color>),
    /// Only applies while the draft is in stock.
    SetQuantity(u32),
    IncrementQuantity,
    /// Saturates at zero.
    DecrementQuantity,
    /// Only applies while the draft is out of stock.
    SetBackOrder(bool),
    MarkSoldOut,
    MarkBackInStock,
    ColorPickerNavigated(bool),
}

/// Sub-screens pushed from an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorRoute {
    ColorPicker,
}

impl EditorRoute {
    pub fn color_picker() -> CasePath<EditorRoute, ()> {
        CasePath::new(
            |route| match route {
                EditorRoute::ColorPicker => Some(&()),
            },
            |route| match route {
                EditorRoute::ColorPicker => Some(unit_mut()),
            },
            |()| EditorRoute::ColorPicker,
        )
    }
}
