use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use super::message::InventoryRequest;
use super::store::{Command, Completion, InventorySeed, InventorySnapshot, InventoryStore};
use crate::clients::InventoryClient;
use crate::editor::EditorId;
use crate::framework::Scheduler;
use crate::lifecycle::InventoryConfig;
use crate::services::InventoryServices;

/// The designated context that owns the inventory.
///
/// # Concurrency Model
/// Intents from clients and completions from the actor's own timers arrive through the same
/// mailbox and are handled one at a time. The store therefore needs no locks, and a timer
/// can never interleave with half of an intent. Whether a late completion still applies is
/// decided by the store's identity checks, not by ordering.
pub struct InventoryActor {
    receiver: mpsc::Receiver<InventoryRequest>,
    store: InventoryStore,
    scheduler: Scheduler<EditorId, InventoryRequest>,
    snapshots: watch::Sender<InventorySnapshot>,
    config: InventoryConfig,
    seeded: Vec<Command>,
}

impl InventoryActor {
    pub fn new(config: InventoryConfig, seed: InventorySeed) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(config.mailbox_capacity());
        let (store, seeded) = InventoryStore::seeded(seed);
        let (snapshots, watcher) = watch::channel(store.snapshot());

        let actor = Self {
            receiver,
            store,
            scheduler: Scheduler::new(sender.downgrade()),
            snapshots,
            config,
            seeded,
        };
        let client = InventoryClient::new(sender, watcher);
        (actor, client)
    }

    /// Runs the event loop until every client is gone.
    ///
    /// # Context Injection
    /// `services` is handed to every delayed job. It is passed here rather than to `new` so
    /// the caller can decide what backs the placeholder calls after wiring is done.
    pub async fn run(mut self, services: Arc<dyn InventoryServices>) {
        info!(rows = self.store.len(), "Inventory actor started");

        let seeded = std::mem::take(&mut self.seeded);
        self.execute(seeded, &services);

        while let Some(request) = self.receiver.recv().await {
            match request {
                InventoryRequest::Dispatch { intent, respond_to } => {
                    debug!(?intent, "Dispatch");
                    let commands = self.store.dispatch(intent);
                    self.execute(commands, &services);
                    let _ = respond_to.send(Ok(self.store.snapshot()));
                }
                InventoryRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.snapshot()));
                    continue;
                }
                InventoryRequest::Resume(completion) => {
                    debug!(slot = %completion.slot, editor = %completion.editor, "Resume");
                    let commands = self.store.resume(completion);
                    self.execute(commands, &services);
                }
            }
            self.scheduler.prune();
            self.snapshots.send_replace(self.store.snapshot());
        }

        self.scheduler.cancel_all();
        info!(rows = self.store.len(), "Inventory actor shutdown");
    }

    fn execute(&mut self, commands: Vec<Command>, services: &Arc<dyn InventoryServices>) {
        for command in commands {
            match command {
                Command::Start { slot, editor, job } => {
                    let delay = self.config.delay_for(&job);
                    debug!(%slot, %editor, ?job, ?delay, "Scheduled");

                    let services = Arc::clone(services);
                    self.scheduler.schedule(editor, delay, async move {
                        let result = job.resolve(services.as_ref()).await;
                        InventoryRequest::Resume(Completion {
                            slot,
                            editor,
                            result,
                        })
                    });
                }
                Command::Cancel(editor) => self.scheduler.cancel(editor),
            }
        }
    }
}
