//! Table endpoints

use crate::error::ClientResult;
use crate::http::HttpClient;
use reqwest::Method;
use serde_json::json;
use shared::models::TableStatusUpdate;
use shared::response::TablesResponse;
use shared::Table;

impl HttpClient {
    pub(crate) async fn fetch_tables(&self) -> ClientResult<Vec<Table>> {
        let envelope: TablesResponse = self.request(Method::GET, "/tables", None).await?;
        Ok(envelope.into_tables())
    }

    pub(crate) async fn put_close_table(&self, table_id: i64) -> ClientResult<()> {
        let body = serde_json::to_value(TableStatusUpdate::finished())?;
        self.request_unit(Method::PUT, &format!("/close-table/{}", table_id), Some(body))
            .await
    }

    pub(crate) async fn put_clean_table(&self, table_id: i64) -> ClientResult<()> {
        let body = serde_json::to_value(TableStatusUpdate::free())?;
        self.request_unit(Method::PUT, &format!("/clean-table/{}", table_id), Some(body))
            .await
    }

    pub(crate) async fn fetch_available_tables(
        &self,
        reservation_id: i64,
    ) -> ClientResult<Vec<Table>> {
        self.request(
            Method::GET,
            &format!("/tables-available-for-reservation/{}", reservation_id),
            None,
        )
        .await
    }

    pub(crate) async fn post_assign_reservation(
        &self,
        table_id: i64,
        reservation_id: i64,
    ) -> ClientResult<()> {
        self.request_unit(
            Method::POST,
            &format!("/assign-reservation-to-table/{}/{}", table_id, reservation_id),
            Some(json!({})),
        )
        .await
    }

    pub(crate) async fn put_link_order(&self, table_id: i64, order_id: i64) -> ClientResult<()> {
        self.request_unit(
            Method::PUT,
            &format!("/tables/order/{}?order_id={}", table_id, order_id),
            Some(json!({})),
        )
        .await
    }
}
