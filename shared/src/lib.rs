//! Shared types for the Mesa floor client
//!
//! Wire-facing domain models, error codes and the pure reconciliation
//! primitives (urgency classification, check-in gates, assignment
//! conflict taxonomy) shared by the client flows and their tests.

pub mod error;
pub mod models;
pub mod response;
pub mod urgency;

pub use error::{AppError, AppResult, AssignmentError, ErrorCode};
pub use models::{
    Category, Order, OrderItem, OrderStatus, Product, Reservation, Table, TableStatus,
};
pub use urgency::Urgency;
