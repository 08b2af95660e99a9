//! Orchestration: configuration, logging setup, and starting/stopping the actor.

pub mod config;
pub mod inventory_system;
pub mod tracing;

pub use config::InventoryConfig;
pub use inventory_system::InventorySystem;
