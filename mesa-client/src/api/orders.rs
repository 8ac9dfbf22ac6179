//! Order endpoints

use crate::error::ClientResult;
use crate::http::HttpClient;
use reqwest::Method;
use serde_json::json;
use shared::response::RegisterOrderResponse;
use shared::{Order, OrderItem};

impl HttpClient {
    pub(crate) async fn fetch_orders(&self) -> ClientResult<Vec<Order>> {
        self.request(Method::GET, "/orders", None).await
    }

    pub(crate) async fn fetch_order(&self, order_id: i64) -> ClientResult<Order> {
        self.request(Method::GET, &format!("/orders/{}", order_id), None)
            .await
    }

    pub(crate) async fn post_register_order(
        &self,
        order: &Order,
    ) -> ClientResult<RegisterOrderResponse> {
        let body = serde_json::to_value(order)?;
        self.request(Method::POST, "/register-order", Some(body))
            .await
    }

    pub(crate) async fn put_order_items(
        &self,
        order_id: i64,
        new_items: &[OrderItem],
        new_total: &str,
    ) -> ClientResult<()> {
        let body = json!({
            "new_order_items": new_items,
            "new_order_total": new_total,
        });
        self.request_unit(
            Method::PUT,
            &format!("/orders/order-items/{}", order_id),
            Some(body),
        )
        .await
    }

    pub(crate) async fn put_finalize_order(&self, order_id: i64) -> ClientResult<()> {
        self.request_unit(
            Method::PUT,
            &format!("/orders-finalize/{}", order_id),
            Some(json!({"status": "FINALIZED"})),
        )
        .await
    }

    pub(crate) async fn put_serve_item(&self, order_id: i64, item_id: &str) -> ClientResult<()> {
        self.request_unit(
            Method::PUT,
            &format!("/orders/serve-item/{}/{}", order_id, item_id),
            Some(json!({})),
        )
        .await
    }

    pub(crate) async fn delete_items(
        &self,
        order_id: i64,
        product_ids: &[i64],
    ) -> ClientResult<()> {
        // The backend expects the ids as strings in the DELETE body.
        let body = json!(
            product_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
        );
        self.request_unit(
            Method::DELETE,
            &format!("/delete-order-item/{}", order_id),
            Some(body),
        )
        .await
    }

    pub(crate) async fn put_assign_order(&self, order_id: i64, table_id: i64) -> ClientResult<()> {
        self.request_unit(
            Method::PUT,
            &format!("/asign-order-table/{}/{}", order_id, table_id),
            None,
        )
        .await
    }
}
