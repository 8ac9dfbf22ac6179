//! Typed endpoint surface of the floor backend
//!
//! [`FloorBackend`] is the seam the flows are written against: the
//! [`HttpClient`](crate::HttpClient) implements it over the wire, the
//! tests implement it in memory. One module per resource mirrors the
//! backend's route groups.

mod catalog;
mod loyalty;
mod orders;
mod reservations;
mod tables;

use crate::error::ClientResult;
use crate::http::HttpClient;
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::response::RegisterOrderResponse;
use shared::{Category, Order, OrderItem, Product, Reservation, Table};

/// Everything the front-of-house flows need from the backend
#[async_trait]
pub trait FloorBackend: Send + Sync {
    // ========== Tables ==========

    /// `GET /tables`
    async fn tables(&self) -> ClientResult<Vec<Table>>;
    /// `PUT /close-table/{id}`: order settled, table awaits cleanup
    async fn close_table(&self, table_id: i64) -> ClientResult<()>;
    /// `PUT /clean-table/{id}`: table returns to the free pool
    async fn clean_table(&self, table_id: i64) -> ClientResult<()>;
    /// `GET /tables-available-for-reservation/{id}`: free tables with
    /// enough capacity for the reservation's party
    async fn available_tables_for(&self, reservation_id: i64) -> ClientResult<Vec<Table>>;
    /// `POST /assign-reservation-to-table/{table}/{reservation}`
    async fn assign_reservation_to_table(
        &self,
        table_id: i64,
        reservation_id: i64,
    ) -> ClientResult<()>;
    /// `PUT /tables/order/{table}?order_id=`: link a fresh order
    async fn link_order_to_table(&self, table_id: i64, order_id: i64) -> ClientResult<()>;

    // ========== Reservations ==========

    /// `GET /reservations/day/{iso}`
    async fn reservations_by_day(&self, day: NaiveDate) -> ClientResult<Vec<Reservation>>;
    /// `POST /make-reservation`
    async fn make_reservation(&self, reservation: &Reservation) -> ClientResult<()>;
    /// `POST /cancel-reservation/{id}`: also used for no-shows
    async fn cancel_reservation(&self, reservation_id: i64) -> ClientResult<()>;

    // ========== Orders ==========

    /// `GET /orders`
    async fn orders(&self) -> ClientResult<Vec<Order>>;
    /// `GET /orders/{id}`
    async fn order_by_id(&self, order_id: i64) -> ClientResult<Order>;
    /// `POST /register-order`
    async fn register_order(&self, order: &Order) -> ClientResult<RegisterOrderResponse>;
    /// `PUT /orders/order-items/{id}`: append this session's new lines
    async fn add_order_items(
        &self,
        order_id: i64,
        new_items: &[OrderItem],
        new_total: &str,
    ) -> ClientResult<()>;
    /// `PUT /orders-finalize/{id}`
    async fn finalize_order(&self, order_id: i64) -> ClientResult<()>;
    /// `PUT /orders/serve-item/{order}/{item}`
    async fn serve_order_item(&self, order_id: i64, item_id: &str) -> ClientResult<()>;
    /// `DELETE /delete-order-item/{id}`: drop lines by product id
    async fn delete_order_items(&self, order_id: i64, product_ids: &[i64]) -> ClientResult<()>;
    /// `PUT /asign-order-table/{order}/{table}` (legacy path spelling)
    async fn assign_order_to_table(&self, order_id: i64, table_id: i64) -> ClientResult<()>;

    // ========== Catalog ==========

    /// `GET /products`
    async fn products(&self) -> ClientResult<Vec<Product>>;
    /// `GET /products/{id}`
    async fn product_by_id(&self, product_id: i64) -> ClientResult<Product>;
    /// `PUT /lower-stock/{id}/{consumed}`
    async fn lower_stock(&self, product_id: i64, consumed: i32) -> ClientResult<()>;
    /// `GET /categories`
    async fn categories(&self) -> ClientResult<Vec<Category>>;
    /// `GET /categories/products/{ids}`: ids comma-joined on the wire
    async fn products_by_category(&self, category_ids: &[i64]) -> ClientResult<Vec<Product>>;

    // ========== Loyalty ==========

    /// `PUT /check-level/{uid}`: recompute an employee's level after a
    /// finalized order; callers treat it as fire-and-forget
    async fn check_employee_level(&self, employee_uid: &str) -> ClientResult<()>;
}

#[async_trait]
impl FloorBackend for HttpClient {
    async fn tables(&self) -> ClientResult<Vec<Table>> {
        self.fetch_tables().await
    }

    async fn close_table(&self, table_id: i64) -> ClientResult<()> {
        self.put_close_table(table_id).await
    }

    async fn clean_table(&self, table_id: i64) -> ClientResult<()> {
        self.put_clean_table(table_id).await
    }

    async fn available_tables_for(&self, reservation_id: i64) -> ClientResult<Vec<Table>> {
        self.fetch_available_tables(reservation_id).await
    }

    async fn assign_reservation_to_table(
        &self,
        table_id: i64,
        reservation_id: i64,
    ) -> ClientResult<()> {
        self.post_assign_reservation(table_id, reservation_id).await
    }

    async fn link_order_to_table(&self, table_id: i64, order_id: i64) -> ClientResult<()> {
        self.put_link_order(table_id, order_id).await
    }

    async fn reservations_by_day(&self, day: NaiveDate) -> ClientResult<Vec<Reservation>> {
        self.fetch_reservations_by_day(day).await
    }

    async fn make_reservation(&self, reservation: &Reservation) -> ClientResult<()> {
        self.post_make_reservation(reservation).await
    }

    async fn cancel_reservation(&self, reservation_id: i64) -> ClientResult<()> {
        self.post_cancel_reservation(reservation_id).await
    }

    async fn orders(&self) -> ClientResult<Vec<Order>> {
        self.fetch_orders().await
    }

    async fn order_by_id(&self, order_id: i64) -> ClientResult<Order> {
        self.fetch_order(order_id).await
    }

    async fn register_order(&self, order: &Order) -> ClientResult<RegisterOrderResponse> {
        self.post_register_order(order).await
    }

    async fn add_order_items(
        &self,
        order_id: i64,
        new_items: &[OrderItem],
        new_total: &str,
    ) -> ClientResult<()> {
        self.put_order_items(order_id, new_items, new_total).await
    }

    async fn finalize_order(&self, order_id: i64) -> ClientResult<()> {
        self.put_finalize_order(order_id).await
    }

    async fn serve_order_item(&self, order_id: i64, item_id: &str) -> ClientResult<()> {
        self.put_serve_item(order_id, item_id).await
    }

    async fn delete_order_items(&self, order_id: i64, product_ids: &[i64]) -> ClientResult<()> {
        self.delete_items(order_id, product_ids).await
    }

    async fn assign_order_to_table(&self, order_id: i64, table_id: i64) -> ClientResult<()> {
        self.put_assign_order(order_id, table_id).await
    }

    async fn products(&self) -> ClientResult<Vec<Product>> {
        self.fetch_products().await
    }

    async fn product_by_id(&self, product_id: i64) -> ClientResult<Product> {
        self.fetch_product(product_id).await
    }

    async fn lower_stock(&self, product_id: i64, consumed: i32) -> ClientResult<()> {
        self.put_lower_stock(product_id, consumed).await
    }

    async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.fetch_categories().await
    }

    async fn products_by_category(&self, category_ids: &[i64]) -> ClientResult<Vec<Product>> {
        self.fetch_products_by_category(category_ids).await
    }

    async fn check_employee_level(&self, employee_uid: &str) -> ClientResult<()> {
        self.put_check_level(employee_uid).await
    }
}
