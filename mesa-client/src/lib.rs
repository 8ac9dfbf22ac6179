//! Mesa Client - HTTP client and front-of-house flows for the floor backend
//!
//! Typed access to the floor REST API plus the stateful flows the floor
//! staff drive all day: the table board, reservation-to-table
//! assignment, order sessions on a table, and the upcoming-reservation
//! poller. The backend enforces the real invariants (no double-booking,
//! capacity); this crate reconciles client state against it.

pub mod api;
pub mod config;
pub mod error;
pub mod floor;
pub mod http;
pub mod reserve;
pub mod session;

pub use api::FloorBackend;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{StaticToken, TokenProvider};

// Re-export shared types for convenience
pub use shared::{
    AssignmentError, Category, Order, OrderItem, OrderStatus, Product, Reservation, Table,
    TableStatus, Urgency,
};
