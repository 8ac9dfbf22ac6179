//! Reservation Model

use serde::{Deserialize, Serialize};

use super::wire;

/// Customer reservation
///
/// `table_id` stays `None` until the floor staff assigns a table; the
/// backend spells "no table" as `""`, `0`, `null` or an absent field
/// depending on the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub customer_name: String,
    pub user_email: String,
    pub amount_of_people: i32,
    /// ISO day, `YYYY-MM-DD`
    pub reservation_date: String,
    /// Wall-clock `HH:MM`
    pub reservation_time: String,
    /// Snake-case on the wire, unlike the rest of the record
    #[serde(rename = "table_id", with = "wire::opt_id", default)]
    pub table_id: Option<i64>,
}

impl Reservation {
    /// Whether a table has already been assigned
    pub fn is_assigned(&self) -> bool {
        self.table_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassigned_spellings() {
        for raw in [r#""""#, "0", "null"] {
            let json = format!(
                r#"{{"id": 1, "customerName": "Ana", "userEmail": "a@b.c",
                    "amountOfPeople": 2, "reservationDate": "2025-06-01",
                    "reservationTime": "21:00", "table_id": {}}}"#,
                raw
            );
            let r: Reservation = serde_json::from_str(&json).unwrap();
            assert!(!r.is_assigned(), "raw table_id: {}", raw);
        }
    }

    #[test]
    fn assigned_reservation() {
        let r: Reservation = serde_json::from_str(
            r#"{"id": 1, "customerName": "Ana", "userEmail": "a@b.c",
                "amountOfPeople": 2, "reservationDate": "2025-06-01",
                "reservationTime": "21:00", "table_id": 5}"#,
        )
        .unwrap();
        assert!(r.is_assigned());
        assert_eq!(r.table_id, Some(5));
    }
}
