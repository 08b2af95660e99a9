//! Typed front door to the inventory actor.

pub mod inventory_client;

pub use inventory_client::InventoryClient;
