//! Order sessions on a table
//!
//! One type per table state: [`FreeTableSession`] builds and registers
//! a fresh order, [`BusySession`] extends and settles an open one,
//! [`ReservedTableView`] handles the reservation held on a table, and
//! [`clean_table`] returns a FINISHED table to the free pool.
//!
//! Stock decrements are fired as parallel PUTs with no rollback: a
//! partial failure leaves the counts inconsistent with the committed
//! items and is only reported, never compensated. The backend is the
//! source of truth and the next refresh converges.

use crate::api::FloorBackend;
use crate::error::{ClientError, ClientResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use futures::future::join_all;
use rust_decimal::Decimal;
use shared::{
    urgency, AppError, ErrorCode, Order, OrderItem, OrderStatus, Product, Reservation, Table,
    TableStatus,
};
use std::sync::Arc;

/// Result of a batch of parallel stock decrements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockOutcome {
    pub attempted: usize,
    pub failed: usize,
}

impl StockOutcome {
    pub fn all_applied(&self) -> bool {
        self.failed == 0
    }
}

/// Decrement stock for each line, all requests in flight at once
///
/// Failures are counted, logged and left as-is.
async fn lower_stock_batch(backend: &Arc<dyn FloorBackend>, items: &[OrderItem]) -> StockOutcome {
    let results = join_all(
        items
            .iter()
            .map(|item| backend.lower_stock(item.product_id, item.amount)),
    )
    .await;

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::warn!(
            failed,
            attempted = results.len(),
            "stock decrement partially failed"
        );
    }
    StockOutcome {
        attempted: results.len(),
        failed,
    }
}

/// Clamp a requested amount to `[1, stock]`
pub(crate) fn clamp_amount(product: &Product, requested: i32) -> i32 {
    let max_stock = product.stock_qty().max(1);
    requested.clamp(1, max_stock)
}

/// Locally accumulated lines for an order that does not exist yet
#[derive(Debug, Clone)]
pub struct OrderDraft {
    table_id: i64,
    amount_of_people: i32,
    employee_uid: String,
    items: Vec<OrderItem>,
}

impl OrderDraft {
    pub fn new(table_id: i64, employee_uid: impl Into<String>) -> Self {
        Self {
            table_id,
            amount_of_people: 1,
            employee_uid: employee_uid.into(),
            items: Vec::new(),
        }
    }

    pub fn set_party_size(&mut self, amount_of_people: i32) {
        self.amount_of_people = amount_of_people.max(1);
    }

    /// Add a line for a product; the amount is clamped to stock
    pub fn add_item(&mut self, product: &Product, amount: i32) -> ClientResult<()> {
        let product_id = product
            .id
            .ok_or_else(|| ClientError::Validation("product has no id".to_string()))?;
        if !product.in_stock() {
            return Err(AppError::new(ErrorCode::ProductOutOfStock)
                .with_detail("product_id", product_id)
                .into());
        }
        self.items.push(OrderItem::new(
            product_id,
            clamp_amount(product, amount),
            product.name.clone(),
            product.price.clone(),
        ));
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals
    pub fn total(&self) -> Decimal {
        self.items.iter().filter_map(OrderItem::line_total).sum()
    }

    /// Materialize the order payload for registration
    pub fn build_order(&self, now: NaiveDateTime) -> Order {
        Order {
            id: None,
            status: OrderStatus::InProgress,
            table_number: self.table_id,
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M").to_string(),
            total: self.total().to_string(),
            order_items: self.items.clone(),
            amount_of_people: self.amount_of_people,
            employee: self.employee_uid.clone(),
            employee_name: None,
        }
    }
}

/// Session on a FREE table: accumulate a draft, then open the order
pub struct FreeTableSession {
    backend: Arc<dyn FloorBackend>,
    table: Table,
    draft: OrderDraft,
}

impl FreeTableSession {
    pub fn new(
        backend: Arc<dyn FloorBackend>,
        table: Table,
        employee_uid: impl Into<String>,
    ) -> ClientResult<Self> {
        if !table.status.is_free() {
            return Err(AppError::new(ErrorCode::TableBusy)
                .with_detail("table_id", table.id)
                .into());
        }
        let draft = OrderDraft::new(table.id, employee_uid);
        Ok(Self {
            backend,
            table,
            draft,
        })
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Register the draft, decrement stock, and mark the table BUSY
    ///
    /// The three writes are not atomic; a failure between them leaves
    /// the backend ahead of this mirror until the next board refresh.
    pub async fn open_order(&mut self, now: NaiveDateTime) -> ClientResult<StockOutcome> {
        if self.draft.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty).into());
        }

        let order = self.draft.build_order(now);
        let registered = self.backend.register_order(&order).await?;
        tracing::info!(
            table_id = self.table.id,
            order_id = registered.order_id,
            "order opened"
        );

        let outcome = lower_stock_batch(&self.backend, self.draft.items()).await;

        self.backend
            .link_order_to_table(self.table.id, registered.order_id)
            .await?;

        self.table.status = TableStatus::Busy;
        self.table.order_id = registered.order_id;
        Ok(outcome)
    }
}

/// Minutes an unserved line has been waiting
pub(crate) fn wait_minutes(item: &OrderItem, now: DateTime<Utc>) -> i64 {
    let Some(created) = item
        .created_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    else {
        return 0;
    };
    (now.signed_duration_since(created).num_minutes()).max(0)
}

/// Kitchen delay threshold, in minutes
const CRITICAL_DELAY_MIN: i64 = 20;

/// Session on a BUSY table: the persisted order plus this session's
/// not-yet-submitted lines
pub struct BusySession {
    backend: Arc<dyn FloorBackend>,
    table: Table,
    order: Order,
    new_items: Vec<OrderItem>,
}

impl BusySession {
    /// Load the order open on the table
    pub async fn open(backend: Arc<dyn FloorBackend>, table: Table) -> ClientResult<Self> {
        let order_id = table
            .active_order()
            .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("table_id", table.id))?;
        let order = backend.order_by_id(order_id).await?;
        Ok(Self {
            backend,
            table,
            order,
            new_items: Vec::new(),
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn employee_name(&self) -> &str {
        self.order
            .employee_name
            .as_deref()
            .unwrap_or("Unknown Employee")
    }

    /// Lines added this session, not yet persisted
    pub fn new_items(&self) -> &[OrderItem] {
        &self.new_items
    }

    pub fn has_pending_items(&self) -> bool {
        !self.new_items.is_empty()
    }

    /// Running total over persisted plus pending lines
    pub fn total(&self) -> Decimal {
        self.order.computed_total()
    }

    /// Add a line for a product; the amount is clamped to stock
    pub fn add_item(&mut self, product: &Product, amount: i32) -> ClientResult<()> {
        let product_id = product
            .id
            .ok_or_else(|| ClientError::Validation("product has no id".to_string()))?;
        if !product.in_stock() {
            return Err(AppError::new(ErrorCode::ProductOutOfStock)
                .with_detail("product_id", product_id)
                .into());
        }
        let item = OrderItem::new(
            product_id,
            clamp_amount(product, amount),
            product.name.clone(),
            product.price.clone(),
        );
        self.order.order_items.push(item.clone());
        self.new_items.push(item);
        Ok(())
    }

    /// Drop a pending line (persisted lines cannot be removed here)
    pub fn remove_pending_item(&mut self, index: usize) {
        let Some(item) = self.new_items.get(index).cloned() else {
            return;
        };
        self.new_items.remove(index);
        if let Some(pos) = self
            .order
            .order_items
            .iter()
            .rposition(|candidate| candidate == &item)
        {
            self.order.order_items.remove(pos);
        }
    }

    /// Submit this session's delta, then re-fetch the order so the
    /// lines pick up their server-minted `item_id` and `created_at`
    pub async fn submit_new_items(&mut self) -> ClientResult<StockOutcome> {
        if self.new_items.is_empty() {
            return Ok(StockOutcome::default());
        }
        let order_id = self.order_id()?;
        let total = self.total().to_string();

        self.backend
            .add_order_items(order_id, &self.new_items, &total)
            .await?;
        let outcome = lower_stock_batch(&self.backend, &self.new_items).await;

        self.order = self.backend.order_by_id(order_id).await?;
        self.new_items.clear();
        Ok(outcome)
    }

    /// Mark a line served; `served_at` is set locally once the PUT
    /// succeeds
    pub async fn serve_item(&mut self, item_id: &str, now: DateTime<Utc>) -> ClientResult<()> {
        let order_id = self.order_id()?;
        self.backend.serve_order_item(order_id, item_id).await?;

        if let Some(item) = self
            .order
            .order_items
            .iter_mut()
            .find(|item| item.item_id.as_deref() == Some(item_id))
        {
            item.served_at = Some(now.to_rfc3339());
        }
        Ok(())
    }

    /// Minutes a line has been waiting since the kitchen got it
    pub fn wait_minutes(&self, item: &OrderItem, now: DateTime<Utc>) -> i64 {
        wait_minutes(item, now)
    }

    pub fn is_critical_delay(&self, item: &OrderItem, now: DateTime<Utc>) -> bool {
        !item.is_served() && wait_minutes(item, now) > CRITICAL_DELAY_MIN
    }

    pub fn all_items_served(&self) -> bool {
        self.order.all_items_served()
    }

    /// Settle the table: flush the delta, finalize the order, kick the
    /// loyalty recomputation (fire-and-forget) and close the table
    pub async fn finalize_and_close(&mut self) -> ClientResult<StockOutcome> {
        let outcome = self.submit_new_items().await?;
        let order_id = self.order_id()?;

        self.backend.finalize_order(order_id).await?;

        // Loyalty recomputation is best-effort; its failure must not
        // block the close.
        let backend = Arc::clone(&self.backend);
        let employee = self.order.employee.clone();
        tokio::spawn(async move {
            if let Err(err) = backend.check_employee_level(&employee).await {
                tracing::warn!(%err, employee, "loyalty level check failed");
            }
        });

        self.backend.close_table(self.table.id).await?;
        self.table.status = TableStatus::Finished;
        self.table.order_id = 0;
        self.order.status = OrderStatus::Finalized;
        tracing::info!(table_id = self.table.id, order_id, "table closed");
        Ok(outcome)
    }

    fn order_id(&self) -> ClientResult<i64> {
        self.table
            .active_order()
            .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).into())
    }
}

/// View over the reservation held on a RESERVED table
pub struct ReservedTableView {
    backend: Arc<dyn FloorBackend>,
    table: Table,
    reservation: Option<Reservation>,
}

impl ReservedTableView {
    /// Load the reservation the table is holding from the day's list
    pub async fn open(
        backend: Arc<dyn FloorBackend>,
        table: Table,
        day: NaiveDate,
    ) -> ClientResult<Self> {
        let reservation = match table.current_reservation_id {
            Some(reservation_id) => backend
                .reservations_by_day(day)
                .await?
                .into_iter()
                .find(|r| r.id == Some(reservation_id)),
            None => None,
        };
        Ok(Self {
            backend,
            table,
            reservation,
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn reservation(&self) -> Option<&Reservation> {
        self.reservation.as_ref()
    }

    /// The party has not arrived and the 15-minute tolerance ran out
    pub fn is_no_show(&self, now: NaiveTime) -> bool {
        self.slot()
            .map(|slot| urgency::past_no_show_tolerance(slot, now))
            .unwrap_or(false)
    }

    /// Check-in is not offered before the slot
    pub fn too_early_to_check_in(&self, now: NaiveTime) -> bool {
        self.slot()
            .map(|slot| urgency::too_early_to_check_in(slot, now))
            .unwrap_or(true)
    }

    /// Hand the reservation over for seating; the caller opens the
    /// order, which flips the table to BUSY
    pub fn check_in(&self) -> ClientResult<&Reservation> {
        self.reservation
            .as_ref()
            .ok_or_else(|| AppError::new(ErrorCode::ReservationNotFound).into())
    }

    /// Cancel or no-show the reservation
    pub async fn cancel(&mut self) -> ClientResult<()> {
        let reservation_id = self
            .reservation
            .as_ref()
            .and_then(|r| r.id)
            .ok_or_else(|| ClientError::from(AppError::new(ErrorCode::ReservationNotFound)))?;
        self.backend.cancel_reservation(reservation_id).await?;
        tracing::info!(reservation_id, table_id = self.table.id, "reservation released");
        self.reservation = None;
        Ok(())
    }

    fn slot(&self) -> Option<NaiveTime> {
        self.reservation
            .as_ref()
            .and_then(|r| urgency::parse_slot(&r.reservation_time))
    }
}

/// Return a FINISHED table to the free pool
pub async fn clean_table(backend: &Arc<dyn FloorBackend>, table: &mut Table) -> ClientResult<()> {
    backend.clean_table(table.id).await?;
    table.status = TableStatus::Free;
    table.order_id = 0;
    table.current_reservation_id = None;
    Ok(())
}

/// Seating flow for customer orders that arrived without a table
pub struct InactiveOrderAssignment {
    backend: Arc<dyn FloorBackend>,
    orders: Vec<Order>,
    free_tables: Vec<Table>,
    selected: Option<Order>,
    unavailable_product_ids: Vec<i64>,
}

impl InactiveOrderAssignment {
    pub fn new(
        backend: Arc<dyn FloorBackend>,
        orders: Vec<Order>,
        free_tables: Vec<Table>,
    ) -> Self {
        Self {
            backend,
            orders,
            free_tables,
            selected: None,
            unavailable_product_ids: Vec::new(),
        }
    }

    /// Orders whose id contains the query string
    pub fn filtered_orders(&self, query: &str) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| {
                order
                    .id
                    .map(|id| id.to_string().contains(query))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Select an order and re-check stock for each of its lines
    ///
    /// Lines whose product no longer covers the ordered amount are
    /// collected; they get dropped from the order at assignment time.
    pub async fn select(&mut self, order: Order) -> ClientResult<()> {
        self.unavailable_product_ids = Vec::new();
        for item in &order.order_items {
            let product = self.backend.product_by_id(item.product_id).await?;
            if product.stock_qty() < item.amount {
                self.unavailable_product_ids.push(item.product_id);
            }
        }
        self.selected = Some(order);
        Ok(())
    }

    pub fn selected(&self) -> Option<&Order> {
        self.selected.as_ref()
    }

    pub fn unavailable_product_ids(&self) -> &[i64] {
        &self.unavailable_product_ids
    }

    /// Free tables that can seat the selected order's party
    pub fn eligible_tables(&self) -> Vec<&Table> {
        let party = self
            .selected
            .as_ref()
            .map(|o| o.amount_of_people)
            .unwrap_or(0);
        self.free_tables
            .iter()
            .filter(|t| t.capacity >= party)
            .collect()
    }

    /// Drop out-of-stock lines, decrement stock for the kept ones, and
    /// seat the order at the table
    pub async fn assign(&mut self, table_id: i64) -> ClientResult<StockOutcome> {
        let order = self
            .selected
            .as_ref()
            .ok_or_else(|| ClientError::Validation("no order selected".to_string()))?;
        let order_id = order
            .id
            .ok_or_else(|| ClientError::Validation("order has no id".to_string()))?;

        if !self.unavailable_product_ids.is_empty() {
            self.backend
                .delete_order_items(order_id, &self.unavailable_product_ids)
                .await?;
        }

        let kept: Vec<OrderItem> = order
            .order_items
            .iter()
            .filter(|item| !self.unavailable_product_ids.contains(&item.product_id))
            .cloned()
            .collect();
        let outcome = lower_stock_batch(&self.backend, &kept).await;

        self.backend.assign_order_to_table(order_id, table_id).await?;
        tracing::info!(order_id, table_id, "inactive order seated");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: &str, stock: &str) -> Product {
        Product {
            id: Some(id),
            name: format!("p{}", id),
            price: price.into(),
            stock: stock.into(),
            category_ids: Vec::new(),
            image_url: None,
            description: None,
        }
    }

    #[test]
    fn clamp_amount_respects_stock() {
        let p = product(1, "2.00", "4");
        assert_eq!(clamp_amount(&p, 0), 1);
        assert_eq!(clamp_amount(&p, 3), 3);
        assert_eq!(clamp_amount(&p, 9), 4);
    }

    #[test]
    fn draft_accumulates_and_totals() {
        let mut draft = OrderDraft::new(5, "uid-1");
        draft.add_item(&product(1, "2.50", "10"), 2).unwrap();
        draft.add_item(&product(2, "4.00", "10"), 1).unwrap();
        assert_eq!(draft.items().len(), 2);
        assert_eq!(draft.total(), "9.00".parse().unwrap());

        draft.remove_item(0);
        assert_eq!(draft.items().len(), 1);
        assert_eq!(draft.total(), "4.00".parse().unwrap());
    }

    #[test]
    fn draft_rejects_sold_out_products() {
        let mut draft = OrderDraft::new(5, "uid-1");
        let err = draft.add_item(&product(1, "2.50", "0"), 1).unwrap_err();
        match err {
            ClientError::App(app) => assert_eq!(app.code, ErrorCode::ProductOutOfStock),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(draft.is_empty());
    }

    #[test]
    fn draft_builds_in_progress_order() {
        let mut draft = OrderDraft::new(5, "uid-1");
        draft.set_party_size(3);
        draft.add_item(&product(1, "2.50", "10"), 2).unwrap();

        let now = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(19, 45, 0)
            .unwrap();
        let order = draft.build_order(now);
        assert_eq!(order.status, OrderStatus::InProgress);
        assert_eq!(order.table_number, 5);
        assert_eq!(order.date, "2025-06-01");
        assert_eq!(order.time, "19:45");
        assert_eq!(order.total, "5.00");
        assert_eq!(order.amount_of_people, 3);
    }

    #[test]
    fn wait_minutes_floors_at_zero() {
        let mut item = OrderItem::new(1, 1, "p1", "2.00");
        item.created_at = Some("2025-06-01T19:00:00+00:00".to_string());

        let now = "2025-06-01T19:25:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(wait_minutes(&item, now), 25);

        let before = "2025-06-01T18:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(wait_minutes(&item, before), 0);

        item.created_at = None;
        assert_eq!(wait_minutes(&item, now), 0);
    }
}
