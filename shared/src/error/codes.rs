//! Unified error codes for the Mesa client
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order errors
//! - 6xxx: Product errors
//! - 7xxx: Table and reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes are represented as u16 values for efficient serialization and
/// stable logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1003,
    /// Session has expired
    SessionExpired = 1005,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has already been finalized
    OrderAlreadyFinalized = 4002,
    /// Order item not found
    OrderItemNotFound = 4006,
    /// Order is empty
    OrderEmpty = 4007,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product is out of stock
    ProductOutOfStock = 6003,
    /// Category not found
    CategoryNotFound = 6101,

    // ==================== 7xxx: Table / Reservation ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is busy
    TableBusy = 7002,
    /// Table capacity below the party size
    TableInsufficientCapacity = 7003,
    /// Table already booked for another reservation
    TableAlreadyBooked = 7004,
    /// Reservation not found
    ReservationNotFound = 7101,
    /// Reservation already has a table assigned
    ReservationAlreadyAssigned = 7102,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::SessionExpired => "Session has expired",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderAlreadyFinalized => "Order has already been finalized",
            ErrorCode::OrderItemNotFound => "Order item not found",
            ErrorCode::OrderEmpty => "Order is empty",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductOutOfStock => "Product is out of stock",
            ErrorCode::CategoryNotFound => "Category not found",

            // Table / Reservation
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableBusy => "Table is busy",
            ErrorCode::TableInsufficientCapacity => {
                "The table does not have enough capacity for the reservation"
            }
            ErrorCode::TableAlreadyBooked => "Table is already booked for another reservation",
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::ReservationAlreadyAssigned => "Reservation already has a table assigned",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::TokenExpired),
            1005 => Ok(ErrorCode::SessionExpired),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderAlreadyFinalized),
            4006 => Ok(ErrorCode::OrderItemNotFound),
            4007 => Ok(ErrorCode::OrderEmpty),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6003 => Ok(ErrorCode::ProductOutOfStock),
            6101 => Ok(ErrorCode::CategoryNotFound),

            // Table / Reservation
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableBusy),
            7003 => Ok(ErrorCode::TableInsufficientCapacity),
            7004 => Ok(ErrorCode::TableAlreadyBooked),
            7101 => Ok(ErrorCode::ReservationNotFound),
            7102 => Ok(ErrorCode::ReservationAlreadyAssigned),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::ProductOutOfStock.code(), 6003);
        assert_eq!(ErrorCode::TableBusy.code(), 7002);
        assert_eq!(ErrorCode::ReservationAlreadyAssigned.code(), 7102);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::TableBusy.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(7002), Ok(ErrorCode::TableBusy));
        assert_eq!(ErrorCode::try_from(7102), Ok(ErrorCode::ReservationAlreadyAssigned));
        assert_eq!(ErrorCode::try_from(9004), Ok(ErrorCode::TimeoutError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serde_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::TableInsufficientCapacity,
            ErrorCode::OrderEmpty,
            ErrorCode::NetworkError,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }

        assert_eq!(serde_json::to_string(&ErrorCode::TableBusy).unwrap(), "7002");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::TableBusy.message(), "Table is busy");
        assert_eq!(
            ErrorCode::TableInsufficientCapacity.message(),
            "The table does not have enough capacity for the reservation"
        );
    }
}
