use std::time::Duration;

use inventory_nav::editor::{EditorIntent, ItemEditor};
use inventory_nav::inventory_actor::{InventoryError, InventorySeed, Slot};
use inventory_nav::lifecycle::{InventoryConfig, InventorySystem};
use inventory_nav::model::{Color, Item, Status};
use inventory_nav::row::{ItemRow, RowIntent, RowState};
use inventory_nav::services::PlaceholderServices;
use std::sync::Arc;

/// Full end-to-end walk through every flow with the real actor and placeholder services.
#[tokio::test(start_paused = true)]
async fn test_full_inventory_session() {
    let keyboard = Item::new("Keyboard", Some(Color::blue()), Status::InStock { quantity: 100 });
    let charger = Item::new("Charger", Some(Color::yellow()), Status::InStock { quantity: 20 });
    let seed = InventorySeed::items([keyboard.clone(), charger.clone()]);
    let system = InventorySystem::start(
        InventoryConfig::default(),
        seed,
        Arc::new(PlaceholderServices),
    );
    let client = &system.client;

    // Add: predicted name, then save
    client.add_tapped().await.expect("add_tapped");
    tokio::time::sleep(Duration::from_millis(900)).await;
    let snapshot = client.snapshot().await.expect("snapshot");
    let adding = snapshot.adding().expect("add flow open");
    assert_eq!(adding.draft().name, "Bluetooth keyboard");
    assert_eq!(adding.suggested_colors().len(), 1);
    assert!(!adding.name_is_duplicate());

    let snapshot = client.add_saved().await.expect("add_saved");
    assert_eq!(snapshot.rows.len(), 3);
    assert_eq!(snapshot.rows[2].item().name, "Bluetooth keyboard");

    // Edit the charger into a name that is taken
    let id = charger.id();
    let snapshot = client.row(id, RowIntent::EditTapped).await.expect("edit");
    let editor = snapshot
        .row(id)
        .and_then(ItemRow::editor)
        .map(ItemEditor::id)
        .expect("editor open");
    client
        .edit_draft(Slot::Row(id), editor, EditorIntent::SetName("Keyboard".into()))
        .await
        .expect("set name");
    tokio::time::sleep(Duration::from_millis(400)).await;
    let snapshot = client.snapshot().await.expect("snapshot");
    assert!(snapshot.row(id).and_then(ItemRow::editor).unwrap().name_is_duplicate());

    client
        .edit_draft(Slot::Row(id), editor, EditorIntent::SetName("Fast charger".into()))
        .await
        .expect("set name");
    client.row(id, RowIntent::EditSaved).await.expect("save");
    tokio::time::sleep(Duration::from_millis(1100)).await;
    let snapshot = client.snapshot().await.expect("snapshot");
    assert_eq!(snapshot.row(id).map(|row| row.item().name.as_str()), Some("Fast charger"));
    assert_eq!(snapshot.row(id).map(ItemRow::state), Some(RowState::Idle));

    // Duplicate the keyboard
    let id = keyboard.id();
    client.row(id, RowIntent::DuplicateTapped).await.expect("duplicate");
    client.row(id, RowIntent::DuplicateSaved).await.expect("save");
    tokio::time::sleep(Duration::from_millis(1100)).await;
    let snapshot = client.snapshot().await.expect("snapshot");
    assert_eq!(snapshot.rows.len(), 4);
    assert_eq!(snapshot.rows[3].item().name, "Keyboard");
    assert_ne!(snapshot.rows[3].id(), id);

    // Delete the original keyboard
    client.row(id, RowIntent::DeleteTapped).await.expect("delete");
    let snapshot = client.row(id, RowIntent::DeleteConfirmed).await.expect("confirm");
    assert_eq!(snapshot.rows.len(), 3);
    assert!(snapshot.row(id).is_none());
    let names: Vec<&str> = snapshot.rows.iter().map(|row| row.item().name.as_str()).collect();
    assert_eq!(names, vec!["Fast charger", "Bluetooth keyboard", "Keyboard"]);

    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn test_client_errors_when_actor_not_running() {
    let (actor, client) = inventory_nav::inventory_actor::new();
    drop(actor);

    assert_eq!(client.add_tapped().await.unwrap_err(), InventoryError::ActorClosed);
    assert_eq!(client.snapshot().await.unwrap_err(), InventoryError::ActorClosed);
}

#[tokio::test]
async fn test_system_starts_empty() {
    let system = InventorySystem::new();

    let snapshot = system.client.snapshot().await.unwrap();
    assert!(snapshot.rows.is_empty());
    assert!(snapshot.route.is_none());

    system.shutdown().await.unwrap();
}
