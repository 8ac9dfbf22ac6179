//! Table Model

use serde::{Deserialize, Serialize};

use super::wire;

/// Table occupancy status, driving which floor flow opens
///
/// Deserialized through `From<String>` so a status string this client
/// does not know becomes `Unknown` instead of failing the whole table
/// list; the board skips such tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum TableStatus {
    Free,
    Busy,
    Finished,
    Reserved,
    Unknown,
}

impl From<String> for TableStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "FREE" => TableStatus::Free,
            "BUSY" => TableStatus::Busy,
            "FINISHED" => TableStatus::Finished,
            "RESERVED" => TableStatus::Reserved,
            _ => TableStatus::Unknown,
        }
    }
}

impl TableStatus {
    /// Whether an order can be opened on a table in this status
    #[inline]
    pub const fn is_free(&self) -> bool {
        matches!(self, TableStatus::Free)
    }
}

/// Floor table entity
///
/// `order_id == 0` means no order; `current_reservation_id` arrives as a
/// number or the empty string, normalized to `Option` at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: i64,
    pub status: TableStatus,
    pub capacity: i32,
    #[serde(default)]
    pub order_id: i64,
    #[serde(with = "wire::opt_id", default)]
    pub current_reservation_id: Option<i64>,
}

impl Table {
    /// The order currently open on this table, if any
    pub fn active_order(&self) -> Option<i64> {
        (self.order_id != 0).then_some(self.order_id)
    }
}

/// Payload for `PUT /close-table/{id}` and `PUT /clean-table/{id}`
///
/// The backend expects the target status spelled out alongside the
/// order reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub status: TableStatus,
    pub order_id: i64,
}

impl TableStatusUpdate {
    /// Close: the order is settled, the table awaits cleanup
    pub fn finished() -> Self {
        Self {
            status: TableStatus::Finished,
            order_id: 0,
        }
    }

    /// Clean: the table returns to the free pool
    pub fn free() -> Self {
        Self {
            status: TableStatus::Free,
            order_id: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_deserializes_wire_strings() {
        let status: TableStatus = serde_json::from_str(r#""FREE""#).unwrap();
        assert_eq!(status, TableStatus::Free);
        let status: TableStatus = serde_json::from_str(r#""BUSY""#).unwrap();
        assert_eq!(status, TableStatus::Busy);
        let status: TableStatus = serde_json::from_str(r#""FINISHED""#).unwrap();
        assert_eq!(status, TableStatus::Finished);
        let status: TableStatus = serde_json::from_str(r#""RESERVED""#).unwrap();
        assert_eq!(status, TableStatus::Reserved);
    }

    #[test]
    fn unknown_status_does_not_fail_the_whole_payload() {
        let status: TableStatus = serde_json::from_str(r#""MAINTENANCE""#).unwrap();
        assert_eq!(status, TableStatus::Unknown);
    }

    #[test]
    fn table_with_empty_reservation_id() {
        let table: Table = serde_json::from_str(
            r#"{"id": 5, "status": "RESERVED", "capacity": 4, "order_id": 0, "current_reservation_id": ""}"#,
        )
        .unwrap();
        assert_eq!(table.current_reservation_id, None);
        assert_eq!(table.active_order(), None);
    }

    #[test]
    fn table_with_order_and_reservation() {
        let table: Table = serde_json::from_str(
            r#"{"id": 2, "status": "BUSY", "capacity": 2, "order_id": 31, "current_reservation_id": 9}"#,
        )
        .unwrap();
        assert_eq!(table.active_order(), Some(31));
        assert_eq!(table.current_reservation_id, Some(9));
    }

    #[test]
    fn status_update_payloads() {
        let json = serde_json::to_string(&TableStatusUpdate::finished()).unwrap();
        assert_eq!(json, r#"{"status":"FINISHED","order_id":0}"#);
        let json = serde_json::to_string(&TableStatusUpdate::free()).unwrap();
        assert_eq!(json, r#"{"status":"FREE","order_id":0}"#);
    }
}
