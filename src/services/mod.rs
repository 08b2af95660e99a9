//! # Injected Services
//!
//! The asynchronous "ask something smarter than us" calls used by the editor flows.
//!
//! The inventory actor receives an `Arc<dyn InventoryServices>` in
//! [`InventoryActor::run`](crate::inventory_actor::InventoryActor::run) rather than at
//! construction time, so tests can swap in a scripted double without touching the wiring.
//!
//! [`PlaceholderServices`] reproduces the reference behaviour: a fixed predicted name, a
//! single reserved name, and a single extra color. None of the calls fail and nothing is
//! retried.

use crate::model::Color;
use async_trait::async_trait;

/// Name assumed to be in use already.
pub const TAKEN_NAME: &str = "Keyboard";

/// Name predicted for a freshly started add flow.
pub const PREDICTED_NAME: &str = "Bluetooth keyboard";

#[async_trait]
pub trait InventoryServices: Send + Sync + 'static {
    /// Predicts what the user is about to type into an empty add form.
    async fn predict_name(&self) -> String;

    /// Whether `name` is already used by another item.
    async fn is_name_taken(&self, name: &str) -> bool;

    /// Extra colors to offer next to [`Color::defaults`].
    async fn suggested_colors(&self) -> Vec<Color>;
}

/// Stand-in for a real inference / uniqueness / palette service.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderServices;

#[async_trait]
impl InventoryServices for PlaceholderServices {
    async fn predict_name(&self) -> String {
        PREDICTED_NAME.to_string()
    }

    async fn is_name_taken(&self, name: &str) -> bool {
        name == TAKEN_NAME
    }

    async fn suggested_colors(&self) -> Vec<Color> {
        vec![Color::new("Pink", 1.0, 0.7, 0.7)]
    }
}
