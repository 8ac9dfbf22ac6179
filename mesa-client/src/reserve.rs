//! Customer reservation requests
//!
//! Validation and submission for the customer-facing reservation form:
//! party of one to four, a slot from the fixed list, and a date between
//! tomorrow and thirty days out.

use crate::api::FloorBackend;
use crate::error::{ClientError, ClientResult};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::Reservation;
use validator::Validate;

/// Slots the restaurant takes reservations for
pub const ALLOWED_TIMES: [&str; 4] = ["12:00", "13:00", "21:00", "22:00"];

/// How many days ahead a reservation can be placed
pub const MAX_DAYS_AHEAD: u64 = 30;

/// A reservation request as the customer fills it in
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub customer_name: String,
    #[validate(email(message = "invalid email address"))]
    pub user_email: String,
    #[validate(range(min = 1, max = 4, message = "party size must be between 1 and 4"))]
    pub amount_of_people: i32,
    pub reservation_date: NaiveDate,
    pub reservation_time: String,
}

impl ReservationRequest {
    /// Full validation: field rules plus the slot list and the booking
    /// window relative to `today`
    pub fn validate_for(&self, today: NaiveDate) -> Result<(), String> {
        if let Err(errors) = self.validate() {
            let first = errors
                .field_errors()
                .into_values()
                .flatten()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .next()
                .unwrap_or_else(|| "invalid reservation request".to_string());
            return Err(first);
        }

        if !ALLOWED_TIMES.contains(&self.reservation_time.as_str()) {
            return Err(format!(
                "reservations are only taken at {}",
                ALLOWED_TIMES.join(", ")
            ));
        }

        let earliest = today + Days::new(1);
        let latest = today + Days::new(MAX_DAYS_AHEAD);
        if self.reservation_date < earliest || self.reservation_date > latest {
            return Err(format!(
                "reservation date must be between {} and {}",
                earliest, latest
            ));
        }

        Ok(())
    }

    /// The wire-shaped reservation (date serialized `YYYY-MM-DD`)
    pub fn to_reservation(&self) -> Reservation {
        Reservation {
            id: None,
            customer_name: self.customer_name.clone(),
            user_email: self.user_email.clone(),
            amount_of_people: self.amount_of_people,
            reservation_date: self.reservation_date.format("%Y-%m-%d").to_string(),
            reservation_time: self.reservation_time.clone(),
            table_id: None,
        }
    }

    /// Validate and post the reservation
    pub async fn submit(
        &self,
        backend: &dyn FloorBackend,
        today: NaiveDate,
    ) -> ClientResult<()> {
        self.validate_for(today).map_err(ClientError::Validation)?;
        backend.make_reservation(&self.to_reservation()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ReservationRequest {
        ReservationRequest {
            customer_name: "Ana".into(),
            user_email: "ana@example.com".into(),
            amount_of_people: 2,
            reservation_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            reservation_time: "21:00".into(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate_for(today()).is_ok());
    }

    #[test]
    fn rejects_empty_name_and_bad_email() {
        let mut r = request();
        r.customer_name = String::new();
        assert!(r.validate_for(today()).is_err());

        let mut r = request();
        r.user_email = "not-an-email".into();
        assert!(r.validate_for(today()).is_err());
    }

    #[test]
    fn rejects_party_of_five() {
        let mut r = request();
        r.amount_of_people = 5;
        assert!(r.validate_for(today()).is_err());
    }

    #[test]
    fn rejects_off_menu_slots() {
        let mut r = request();
        r.reservation_time = "15:00".into();
        let err = r.validate_for(today()).unwrap_err();
        assert!(err.contains("12:00"));
    }

    #[test]
    fn booking_window_is_tomorrow_through_thirty_days() {
        let mut r = request();

        r.reservation_date = today();
        assert!(r.validate_for(today()).is_err(), "same-day is too late");

        r.reservation_date = today() + Days::new(1);
        assert!(r.validate_for(today()).is_ok());

        r.reservation_date = today() + Days::new(30);
        assert!(r.validate_for(today()).is_ok());

        r.reservation_date = today() + Days::new(31);
        assert!(r.validate_for(today()).is_err());
    }

    #[test]
    fn wire_shape_uses_iso_day() {
        let reservation = request().to_reservation();
        assert_eq!(reservation.reservation_date, "2025-06-10");
        assert_eq!(reservation.table_id, None);
    }
}
