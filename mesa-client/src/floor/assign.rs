//! Reservation-to-table assignment
//!
//! Loads a day's reservations, offers capacity-eligible free tables
//! for the selected one, and posts the assignment. Conflicts come back
//! from the backend as string codes and surface here as
//! [`AssignmentError`](shared::AssignmentError) through
//! [`ClientError::Conflict`](crate::ClientError).

use crate::api::FloorBackend;
use crate::error::{ClientError, ClientResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared::{urgency, Reservation, Table, Urgency};
use std::sync::Arc;

/// Sort a day's reservations for the assignment list
///
/// Unassigned reservations sort strictly before assigned ones; ties
/// break by ascending time-string comparison.
pub(crate) fn sort_for_assignment(reservations: &mut [Reservation]) {
    reservations.sort_by(|a, b| {
        a.is_assigned()
            .cmp(&b.is_assigned())
            .then_with(|| a.reservation_time.cmp(&b.reservation_time))
    });
}

/// Case-insensitive match over customer name, time and id
pub(crate) fn matches_search(reservation: &Reservation, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    reservation.customer_name.to_lowercase().contains(&q)
        || reservation.reservation_time.to_lowercase().contains(&q)
        || reservation
            .id
            .map(|id| id.to_string().contains(&q))
            .unwrap_or(false)
}

/// Assignment flow state for one day's reservation list
pub struct AssignmentFlow {
    backend: Arc<dyn FloorBackend>,
    day: NaiveDate,
    reservations: Vec<Reservation>,
    selected_reservation: Option<Reservation>,
    selected_table: Option<i64>,
    available_tables: Vec<Table>,
    search_text: String,
}

impl AssignmentFlow {
    pub fn new(backend: Arc<dyn FloorBackend>, day: NaiveDate) -> Self {
        Self {
            backend,
            day,
            reservations: Vec::new(),
            selected_reservation: None,
            selected_table: None,
            available_tables: Vec::new(),
            search_text: String::new(),
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Fetch the day's reservations
    pub async fn load(&mut self) -> ClientResult<()> {
        self.reservations = self.backend.reservations_by_day(self.day).await?;
        Ok(())
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_text = query.into();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The filtered, assignment-sorted view of the day's reservations
    pub fn filtered_reservations(&self) -> Vec<Reservation> {
        let mut filtered: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| matches_search(r, &self.search_text))
            .cloned()
            .collect();
        sort_for_assignment(&mut filtered);
        filtered
    }

    /// Urgency bucket for a row; assigned rows have none
    pub fn row_urgency(&self, reservation: &Reservation, now: NaiveTime) -> Option<Urgency> {
        if reservation.is_assigned() {
            return None;
        }
        let slot = urgency::parse_slot(&reservation.reservation_time)?;
        Some(urgency::classify(slot, now))
    }

    /// Whether assignment should not be offered yet (more than two
    /// hours before the slot)
    pub fn too_early_to_assign(&self, reservation: &Reservation, now: NaiveDateTime) -> bool {
        match urgency::parse_slot(&reservation.reservation_time) {
            Some(slot) => urgency::too_early_to_assign(self.day, slot, now),
            // An unparseable slot never becomes assignable.
            None => true,
        }
    }

    /// Select a reservation and load the tables eligible for it
    ///
    /// The backend filters to free tables whose capacity covers the
    /// party; a table already on the reservation is pre-selected.
    pub async fn select(&mut self, reservation: Reservation) -> ClientResult<()> {
        let Some(reservation_id) = reservation.id else {
            return Err(ClientError::Validation(
                "reservation has no id".to_string(),
            ));
        };

        self.selected_table = reservation.table_id;
        self.selected_reservation = Some(reservation);
        self.available_tables = Vec::new();

        let tables = self.backend.available_tables_for(reservation_id).await?;
        self.available_tables = tables;
        Ok(())
    }

    pub fn selected_reservation(&self) -> Option<&Reservation> {
        self.selected_reservation.as_ref()
    }

    pub fn available_tables(&self) -> &[Table] {
        &self.available_tables
    }

    /// Pick the table to assign
    pub fn select_table(&mut self, table_id: i64) {
        self.selected_table = Some(table_id);
    }

    pub fn selected_table(&self) -> Option<i64> {
        self.selected_table
    }

    /// Post the assignment, then reload the reservation list
    ///
    /// Conflicts (busy, capacity, already assigned, already booked)
    /// surface as [`ClientError::Conflict`]; the caller shows
    /// `user_message()` and the list is left untouched.
    pub async fn assign(&mut self) -> ClientResult<()> {
        let (Some(reservation), Some(table_id)) =
            (self.selected_reservation.as_ref(), self.selected_table)
        else {
            return Err(ClientError::Validation(
                "select a reservation and a table first".to_string(),
            ));
        };
        let reservation_id = reservation
            .id
            .ok_or_else(|| ClientError::Validation("reservation has no id".to_string()))?;

        self.backend
            .assign_reservation_to_table(table_id, reservation_id)
            .await?;
        tracing::info!(reservation_id, table_id, "reservation assigned");

        self.load().await
    }

    /// Cancel the selected reservation (also used for no-shows), then
    /// reload and clear the selection
    ///
    /// The backend owns any notification side effect; there is no
    /// compensating action here if that side effect fails.
    pub async fn cancel_selected(&mut self) -> ClientResult<()> {
        let Some(reservation) = self.selected_reservation.as_ref() else {
            return Err(ClientError::Validation(
                "no reservation selected".to_string(),
            ));
        };
        let reservation_id = reservation
            .id
            .ok_or_else(|| ClientError::Validation("reservation has no id".to_string()))?;

        self.backend.cancel_reservation(reservation_id).await?;
        tracing::info!(reservation_id, "reservation cancelled");

        self.load().await?;
        self.reset_state();
        Ok(())
    }

    /// Clear selection and search back to their defaults; idempotent
    pub fn reset_state(&mut self) {
        self.selected_reservation = None;
        self.selected_table = None;
        self.available_tables = Vec::new();
        self.search_text = String::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(id: i64, time: &str, table_id: Option<i64>) -> Reservation {
        Reservation {
            id: Some(id),
            customer_name: format!("guest-{}", id),
            user_email: "guest@example.com".into(),
            amount_of_people: 2,
            reservation_date: "2025-06-01".into(),
            reservation_time: time.into(),
            table_id,
        }
    }

    #[test]
    fn unassigned_sort_before_assigned() {
        let mut list = vec![
            reservation(1, "19:00", Some(4)),
            reservation(2, "22:00", None),
            reservation(3, "12:00", Some(2)),
            reservation(4, "20:00", None),
        ];
        sort_for_assignment(&mut list);

        let ids: Vec<i64> = list.iter().map(|r| r.id.unwrap()).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn ties_break_by_time_string() {
        let mut list = vec![
            reservation(1, "21:30", None),
            reservation(2, "09:15", None),
            reservation(3, "13:00", None),
        ];
        sort_for_assignment(&mut list);
        let times: Vec<&str> = list.iter().map(|r| r.reservation_time.as_str()).collect();
        assert_eq!(times, vec!["09:15", "13:00", "21:30"]);
    }

    #[test]
    fn search_matches_name_time_and_id() {
        let r = reservation(42, "20:30", None);
        assert!(matches_search(&r, ""));
        assert!(matches_search(&r, "GUEST-42"));
        assert!(matches_search(&r, "20:3"));
        assert!(matches_search(&r, "42"));
        assert!(!matches_search(&r, "nobody"));
    }
}
