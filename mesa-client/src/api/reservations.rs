//! Reservation endpoints

use crate::error::ClientResult;
use crate::http::HttpClient;
use chrono::NaiveDate;
use reqwest::Method;
use serde_json::json;
use shared::Reservation;

impl HttpClient {
    pub(crate) async fn fetch_reservations_by_day(
        &self,
        day: NaiveDate,
    ) -> ClientResult<Vec<Reservation>> {
        self.request(
            Method::GET,
            &format!("/reservations/day/{}", day.format("%Y-%m-%d")),
            None,
        )
        .await
    }

    pub(crate) async fn post_make_reservation(
        &self,
        reservation: &Reservation,
    ) -> ClientResult<()> {
        let body = serde_json::to_value(reservation)?;
        self.request_unit(Method::POST, "/make-reservation", Some(body))
            .await
    }

    pub(crate) async fn post_cancel_reservation(&self, reservation_id: i64) -> ClientResult<()> {
        self.request_unit(
            Method::POST,
            &format!("/cancel-reservation/{}", reservation_id),
            Some(json!({})),
        )
        .await
    }
}
