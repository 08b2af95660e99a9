use serde::Serialize;

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::framework::CasePath;

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Type-safe, process-unique identifier for Items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Mints a fresh identifier. Never returns the same value twice within a process.
    pub fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// A named color made of three channels in the unit interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    pub name: String,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    /// Creates a color, clamping each channel into `0.0..=1.0`.
    pub fn new(name: impl Into<String>, red: f64, green: f64, blue: f64) -> Self {
        Self {
            name: name.into(),
            red: unit(red),
            green: unit(green),
            blue: unit(blue),
        }
    }

    pub fn red() -> Self {
        Self::new("Red", 1.0, 0.0, 0.0)
    }

    pub fn green() -> Self {
        Self::new("Green", 0.0, 1.0, 0.0)
    }

    pub fn blue() -> Self {
        Self::new("Blue", 0.0, 0.0, 1.0)
    }

    pub fn black() -> Self {
        Self::new("Black", 0.0, 0.0, 0.0)
    }

    pub fn yellow() -> Self {
        Self::new("Yellow", 1.0, 1.0, 0.0)
    }

    pub fn white() -> Self {
        Self::new("White", 1.0, 1.0, 1.0)
    }

    /// The fixed palette offered by every color picker, in display order.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::red(),
            Self::green(),
            Self::blue(),
            Self::black(),
            Self::yellow(),
            Self::white(),
        ]
    }
}

fn unit(channel: f64) -> f64 {
    if channel.is_nan() {
        0.0
    } else {
        channel.clamp(0.0, 1.0)
    }
}

/// Stock status of an item. Exactly one of the two cases holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    InStock { quantity: u32 },
    OutOfStock { is_on_back_order: bool },
}

impl Status {
    pub fn is_in_stock(&self) -> bool {
        matches!(self, Status::InStock { .. })
    }

    /// Case path focusing the quantity of [`Status::InStock`].
    pub fn in_stock() -> CasePath<Status, u32> {
        CasePath::new(
            |status| match status {
                Status::InStock { quantity } => Some(quantity),
                Status::OutOfStock { .. } => None,
            },
            |status| match status {
                Status::InStock { quantity } => Some(quantity),
                Status::OutOfStock { .. } => None,
            },
            |quantity| Status::InStock { quantity },
        )
    }

    /// Case path focusing the back-order flag of [`Status::OutOfStock`].
    pub fn out_of_stock() -> CasePath<Status, bool> {
        CasePath::new(
            |status| match status {
                Status::OutOfStock { is_on_back_order } => Some(is_on_back_order),
                Status::InStock { .. } => None,
            },
            |status| match status {
                Status::OutOfStock { is_on_back_order } => Some(is_on_back_order),
                Status::InStock { .. } => None,
            },
            |is_on_back_order| Status::OutOfStock { is_on_back_order },
        )
    }
}

/// Represents one inventory record.
///
/// # Identity
/// Every `Item` carries an [`ItemId`] minted when the value is constructed. The field is
/// private and there is no setter, so the identity cannot be reassigned for the lifetime
/// of the value. Two items are equal only if *all* attributes match, identity included.
///
/// See [`Item::duplicate`] for the one way to get "the same item, but a new one".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    id: ItemId,
    pub name: String,
    pub color: Option<Color>,
    pub status: Status,
}

impl Item {
    /// Creates a new Item with a freshly minted identity.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `color` - Optional swatch color
    /// * `status` - Initial stock status
    pub fn new(name: impl Into<String>, color: Option<Color>, status: Status) -> Self {
        Self {
            id: ItemId::next(),
            name: name.into(),
            color,
            status,
        }
    }

    /// The empty draft used when the add flow starts.
    pub fn blank() -> Self {
        Self::new("", None, Status::InStock { quantity: 1 })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Copies every field except identity, which is freshly minted.
    pub fn duplicate(&self) -> Self {
        Self::new(self.name.clone(), self.color.clone(), self.status)
    }
}
