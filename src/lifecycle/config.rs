//! # Configuration
//!
//! Tunables for the inventory actor. Every field has a default, so an embedding application
//! only has to spell out what it wants to change:
//!
//! ```rust
//! use inventory_nav::lifecycle::InventoryConfig;
//!
//! let config: InventoryConfig = serde_json::from_str(r#"{ "name_check_debounce_ms": 50 }"#).unwrap();
//! assert_eq!(config.name_check_debounce_ms, 50);
//! assert_eq!(config.edit_commit_ms, 1000);
//! ```

use serde::Deserialize;
use std::time::Duration;

use crate::effects::Job;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Capacity of the actor mailbox. Zero is treated as one.
    pub mailbox_size: usize,
    pub predicted_name_ms: u64,
    pub name_check_debounce_ms: u64,
    pub suggested_colors_ms: u64,
    pub edit_commit_ms: u64,
    pub duplicate_commit_ms: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            mailbox_size: 32,
            predicted_name_ms: 500,
            name_check_debounce_ms: 300,
            suggested_colors_ms: 500,
            edit_commit_ms: 1000,
            duplicate_commit_ms: 1000,
        }
    }
}

impl InventoryConfig {
    /// Mailbox capacity to open the actor's channel with. Never zero.
    pub fn mailbox_capacity(&self) -> usize {
        self.mailbox_size.max(1)
    }

    /// How long `job` waits before it runs.
    pub fn delay_for(&self, job: &Job) -> Duration {
        let millis = match job {
            Job::CheckName { .. } => self.name_check_debounce_ms,
            Job::LoadColors => self.suggested_colors_ms,
            Job::PredictName => self.predicted_name_ms,
            Job::CommitEdit { .. } => self.edit_commit_ms,
            Job::CommitDuplicate { .. } => self.duplicate_commit_ms,
        };
        Duration::from_millis(millis)
    }
}
