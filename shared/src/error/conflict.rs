//! Assignment conflict taxonomy
//!
//! The backend reports table-assignment conflicts as free-form string
//! codes in the response body. The set is small and fixed; it is parsed
//! once here and the flows only ever see the enum. The Spanish capacity
//! sentence is emitted verbatim by the legacy backend and is part of
//! the wire contract.

use super::codes::ErrorCode;
use std::fmt;

const ERR_ALREADY_ASSIGNED: &str = "Reservation already has a table assigned";
const ERR_TABLE_BUSY: &str = "Table is busy";
const ERR_NO_CAPACITY: &str = "La mesa no tiene capacidad suficiente para la reserva";
const ERR_ALREADY_BOOKED: &str = "Table is already booked for another reservation";

/// Why a (table, reservation) assignment was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// The reservation is already seated somewhere
    ReservationAlreadyAssigned { current_table_id: Option<i64> },
    /// The table has an open order
    TableBusy,
    /// The table's capacity is below the party size
    InsufficientCapacity,
    /// Another reservation holds the table for that slot
    TableAlreadyBooked,
    /// Anything the taxonomy does not cover; carries the backend detail
    Other(String),
}

impl AssignmentError {
    /// Parse a backend conflict body
    ///
    /// `error` is the string code, `current_table_id` accompanies the
    /// already-assigned case, `detail` is the backend's fallback text.
    pub fn from_conflict(
        error: Option<&str>,
        current_table_id: Option<i64>,
        detail: Option<&str>,
    ) -> Self {
        match error {
            Some(ERR_ALREADY_ASSIGNED) => {
                AssignmentError::ReservationAlreadyAssigned { current_table_id }
            }
            Some(ERR_TABLE_BUSY) => AssignmentError::TableBusy,
            Some(ERR_NO_CAPACITY) => AssignmentError::InsufficientCapacity,
            Some(ERR_ALREADY_BOOKED) => AssignmentError::TableAlreadyBooked,
            _ => AssignmentError::Other(
                detail
                    .or(error)
                    .unwrap_or("An error occurred. Please try again.")
                    .to_string(),
            ),
        }
    }

    /// The structured code for this conflict
    pub fn code(&self) -> ErrorCode {
        match self {
            AssignmentError::ReservationAlreadyAssigned { .. } => {
                ErrorCode::ReservationAlreadyAssigned
            }
            AssignmentError::TableBusy => ErrorCode::TableBusy,
            AssignmentError::InsufficientCapacity => ErrorCode::TableInsufficientCapacity,
            AssignmentError::TableAlreadyBooked => ErrorCode::TableAlreadyBooked,
            AssignmentError::Other(_) => ErrorCode::Unknown,
        }
    }

    /// Fixed user-facing copy for this conflict
    pub fn user_message(&self) -> String {
        match self {
            AssignmentError::ReservationAlreadyAssigned {
                current_table_id: Some(id),
            } => format!("Reservation already has a table assigned (Table #{}).", id),
            AssignmentError::ReservationAlreadyAssigned {
                current_table_id: None,
            } => "Reservation already has a table assigned.".to_string(),
            AssignmentError::TableBusy => "Table is busy.".to_string(),
            AssignmentError::InsufficientCapacity => {
                "The table does not have enough capacity for the reservation.".to_string()
            }
            AssignmentError::TableAlreadyBooked => {
                "That table is already booked for another reservation.".to_string()
            }
            AssignmentError::Other(detail) => detail.clone(),
        }
    }
}

impl fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for AssignmentError {}
