use std::sync::Arc;
use std::time::Duration;

use inventory_nav::editor::EditorIntent;
use inventory_nav::inventory_actor::{InventorySeed, Slot};
use inventory_nav::lifecycle::tracing::setup_tracing;
use inventory_nav::lifecycle::{InventoryConfig, InventorySystem};
use inventory_nav::model::{Color, Item, Status};
use inventory_nav::row::RowIntent;
use inventory_nav::services::PlaceholderServices;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let keyboard = Item::new("Keyboard", Some(Color::blue()), Status::InStock { quantity: 100 });
    let seed = InventorySeed::items([
        keyboard.clone(),
        Item::new("Charger", Some(Color::yellow()), Status::InStock { quantity: 20 }),
        Item::new(
            "Phone",
            Some(Color::green()),
            Status::OutOfStock {
                is_on_back_order: true,
            },
        ),
        Item::new(
            "Headphones",
            Some(Color::green()),
            Status::OutOfStock {
                is_on_back_order: false,
            },
        ),
    ]);

    let system = InventorySystem::start(
        InventoryConfig::default(),
        seed,
        Arc::new(PlaceholderServices),
    );
    let client = &system.client;

    let span = tracing::info_span!("add_flow");
    async {
        info!("Adding an item");
        client.add_tapped().await.map_err(|e| e.to_string())?;
        tokio::time::sleep(Duration::from_millis(600)).await;

        let snapshot = client.snapshot().await.map_err(|e| e.to_string())?;
        if let Some(editor) = snapshot.adding() {
            info!(name = %editor.draft().name, "Name predicted");
        }
        client.add_saved().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("edit_flow");
    async {
        let id = keyboard.id();
        let snapshot = client
            .row(id, RowIntent::EditTapped)
            .await
            .map_err(|e| e.to_string())?;
        let Some(editor) = snapshot.row(id).and_then(|row| row.editor()).map(|e| e.id()) else {
            return Err("edit screen did not open".to_string());
        };

        client
            .edit_draft(Slot::Row(id), editor, EditorIntent::SetName("Mechanical keyboard".into()))
            .await
            .map_err(|e| e.to_string())?;
        client
            .row(id, RowIntent::EditSaved)
            .await
            .map_err(|e| e.to_string())?;
        tokio::time::sleep(Duration::from_millis(1100)).await;
        Ok(())
    }
    .instrument(span)
    .await?;

    let snapshot = client.snapshot().await.map_err(|e| e.to_string())?;
    for item in snapshot.items() {
        info!(id = %item.id(), name = %item.name, status = ?item.status, "Inventory");
    }

    system.shutdown().await.map_err(|e| e.to_string())?;
    Ok(())
}
