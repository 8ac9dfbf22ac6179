//! Floor board example
//!
//! Connects to a running floor backend, prints the table grid and
//! today's urgent reservation counts once.
//!
//! ```bash
//! MESA_BASE_URL=http://127.0.0.1:8000 cargo run --example floor_board
//! ```

use mesa_client::floor::{FloorBoard, ReservationWatcher, WatcherConfig};
use mesa_client::{ClientConfig, HttpClient};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ClientConfig::from_env();
    let client = Arc::new(HttpClient::new(&config));

    let mut board = FloorBoard::new(client.clone());
    board.refresh().await?;

    for table in board.tables() {
        println!(
            "table #{:<3} {:?} (capacity {}, order {})",
            table.id, table.status, table.capacity, table.order_id
        );
    }
    println!("{} customer orders waiting for a table", board.inactive_order_count());

    let watcher = ReservationWatcher::new(
        client,
        WatcherConfig {
            interval: Duration::from_secs(60),
        },
    );
    let cancel = CancellationToken::new();
    let (mut snapshots, handle) = watcher.spawn(cancel.clone());

    snapshots.changed().await?;
    let snapshot = *snapshots.borrow();
    println!(
        "reservations today: {} unassigned ({} late, {} soon)",
        snapshot.unassigned, snapshot.late, snapshot.soon
    );

    cancel.cancel();
    handle.await?;
    Ok(())
}
