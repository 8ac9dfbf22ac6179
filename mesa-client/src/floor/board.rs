//! Floor board
//!
//! The grid of tables the staff see all shift. The board refreshes
//! tables and inactive orders independently so a change on one side
//! never forces a full reload of the other.

use crate::api::FloorBackend;
use crate::error::ClientResult;
use shared::{Order, OrderStatus, Table, TableStatus};
use std::sync::Arc;

/// Which flow opens when a table is tapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorView {
    /// FREE: start a new order
    OpenOrder,
    /// BUSY: review/extend the open order
    ReviewOrder,
    /// FINISHED: clean the table
    CleanUp,
    /// RESERVED: show the reservation held on the table
    Reservation,
}

/// Resolve a table's status to the flow it opens
///
/// Statuses this client does not know resolve to `None`; the board
/// leaves the table inert rather than guessing.
pub(crate) fn resolve_view(status: TableStatus) -> Option<FloorView> {
    match status {
        TableStatus::Free => Some(FloorView::OpenOrder),
        TableStatus::Busy => Some(FloorView::ReviewOrder),
        TableStatus::Finished => Some(FloorView::CleanUp),
        TableStatus::Reserved => Some(FloorView::Reservation),
        TableStatus::Unknown => None,
    }
}

/// Local mirror of the floor: tables plus pending walk-in orders
pub struct FloorBoard {
    backend: Arc<dyn FloorBackend>,
    tables: Vec<Table>,
    inactive_orders: Vec<Order>,
}

impl FloorBoard {
    pub fn new(backend: Arc<dyn FloorBackend>) -> Self {
        Self {
            backend,
            tables: Vec::new(),
            inactive_orders: Vec::new(),
        }
    }

    /// Re-fetch the table grid, sorted ascending by id
    pub async fn refresh_tables(&mut self) -> ClientResult<()> {
        let mut tables = self.backend.tables().await?;
        tables.sort_by_key(|t| t.id);
        self.tables = tables;
        Ok(())
    }

    /// Re-fetch pending customer orders awaiting a table
    pub async fn refresh_inactive_orders(&mut self) -> ClientResult<()> {
        let orders = self.backend.orders().await?;
        self.inactive_orders = orders
            .into_iter()
            .filter(|o| o.status == OrderStatus::Inactive)
            .collect();
        Ok(())
    }

    /// Refresh both sides of the board
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.refresh_tables().await?;
        self.refresh_inactive_orders().await
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, table_id: i64) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    /// Tables currently in the free pool
    pub fn free_tables(&self) -> Vec<&Table> {
        self.tables.iter().filter(|t| t.status.is_free()).collect()
    }

    /// Free tables that can seat a party of the given size
    pub fn free_tables_for(&self, party_size: i32) -> Vec<&Table> {
        self.tables
            .iter()
            .filter(|t| t.status.is_free() && t.capacity >= party_size)
            .collect()
    }

    pub fn inactive_orders(&self) -> &[Order] {
        &self.inactive_orders
    }

    pub fn inactive_order_count(&self) -> usize {
        self.inactive_orders.len()
    }

    /// Which flow a tap on this table opens
    pub fn resolve(&self, table: &Table) -> Option<FloorView> {
        let view = resolve_view(table.status);
        if view.is_none() {
            tracing::debug!(table_id = table.id, status = ?table.status, "table is not available");
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_table() {
        assert_eq!(resolve_view(TableStatus::Free), Some(FloorView::OpenOrder));
        assert_eq!(resolve_view(TableStatus::Busy), Some(FloorView::ReviewOrder));
        assert_eq!(resolve_view(TableStatus::Finished), Some(FloorView::CleanUp));
        assert_eq!(
            resolve_view(TableStatus::Reserved),
            Some(FloorView::Reservation)
        );
    }

    #[test]
    fn unknown_status_is_ignored() {
        assert_eq!(resolve_view(TableStatus::Unknown), None);
    }
}
