//! Legacy response envelopes
//!
//! The floor backend wraps each resource in a different ad-hoc shape
//! (`{"message": {"tables": ...}}`, `{"products": ...}`, a bare array
//! on some deployments). Every shape is modeled here so the client
//! decodes them in one place and hands typed values to the flows.

use serde::{Deserialize, Serialize};

use crate::error::AssignmentError;
use crate::models::{Category, Order, Product, Table};

/// `GET /tables` payload: `{"message": {"tables": [...], "message": ".."}}`
/// on current deployments, a bare array on older ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TablesResponse {
    Wrapped { message: TablesPayload },
    Bare(Vec<Table>),
}

#[derive(Debug, Deserialize)]
pub struct TablesPayload {
    pub tables: Vec<Table>,
    #[serde(default)]
    pub message: String,
}

impl TablesResponse {
    pub fn into_tables(self) -> Vec<Table> {
        match self {
            TablesResponse::Wrapped { message } => message.tables,
            TablesResponse::Bare(tables) => tables,
        }
    }
}

/// `GET /products` payload
#[derive(Debug, Deserialize)]
pub struct ProductsEnvelope {
    pub products: Vec<Product>,
    #[serde(default)]
    pub message: String,
}

/// `GET /products/{id}` payload
#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    pub product: Product,
}

/// `GET /categories` payload
#[derive(Debug, Deserialize)]
pub struct CategoriesEnvelope {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub message: String,
}

/// `POST /register-order` payload: the stored order plus its new id
#[derive(Debug, Deserialize)]
pub struct RegisterOrderResponse {
    pub order: Order,
    pub order_id: i64,
}

/// Conflict body returned by the assignment endpoints
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConflictBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_table_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ConflictBody {
    /// Map the wire body onto the conflict taxonomy
    pub fn into_assignment_error(self) -> AssignmentError {
        AssignmentError::from_conflict(
            self.error.as_deref(),
            self.current_table_id,
            self.detail.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_wrapped_and_bare() {
        let wrapped: TablesResponse = serde_json::from_str(
            r#"{"message": {"tables": [{"id": 1, "status": "FREE", "capacity": 2}], "message": "ok"}}"#,
        )
        .unwrap();
        assert_eq!(wrapped.into_tables().len(), 1);

        let bare: TablesResponse =
            serde_json::from_str(r#"[{"id": 1, "status": "FREE", "capacity": 2}]"#).unwrap();
        assert_eq!(bare.into_tables().len(), 1);
    }

    #[test]
    fn conflict_body_maps_to_taxonomy() {
        let body: ConflictBody = serde_json::from_str(
            r#"{"error": "Table is busy"}"#,
        )
        .unwrap();
        assert_eq!(body.into_assignment_error(), AssignmentError::TableBusy);
    }

    #[test]
    fn register_order_response() {
        let resp: RegisterOrderResponse = serde_json::from_str(
            r#"{"order": {"status": "IN PROGRESS", "tableNumber": 4, "date": "2025-06-01",
                "time": "20:00", "total": "12.5", "orderItems": [], "amountOfPeople": 2,
                "employee": "uid-1"}, "order_id": 77}"#,
        )
        .unwrap();
        assert_eq!(resp.order_id, 77);
        assert_eq!(resp.order.table_number, 4);
    }
}
