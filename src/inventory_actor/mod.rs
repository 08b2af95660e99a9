//! The inventory actor: the store, its messages, and the loop that owns them.

pub mod actor;
pub mod error;
pub mod message;
pub mod store;

pub use actor::InventoryActor;
pub use error::*;
pub use message::*;
pub use store::*;

use crate::clients::InventoryClient;
use crate::lifecycle::InventoryConfig;

/// Creates an empty inventory actor with default settings, and its client.
pub fn new() -> (InventoryActor, InventoryClient) {
    InventoryActor::new(InventoryConfig::default(), InventorySeed::default())
}
