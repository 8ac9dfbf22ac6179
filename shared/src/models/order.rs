//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// `IN PROGRESS` is spelled with a space on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[serde(rename = "INACTIVE")]
    #[default]
    Inactive,
    #[serde(rename = "IN PROGRESS")]
    InProgress,
    #[serde(rename = "FINALIZED")]
    Finalized,
    #[serde(rename = "PROBLEM")]
    Problem,
}

/// A line on an order
///
/// `item_id`, `created_at` and `served_at` are minted by the backend;
/// locally accumulated lines carry `None` until the order is re-fetched
/// after submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: i64,
    pub amount: i32,
    pub product_name: String,
    /// Price per unit, string-encoded on the wire
    pub product_price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub served_at: Option<String>,
}

impl OrderItem {
    pub fn new(
        product_id: i64,
        amount: i32,
        product_name: impl Into<String>,
        product_price: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            amount,
            product_name: product_name.into(),
            product_price: product_price.into(),
            item_id: None,
            created_at: None,
            served_at: None,
        }
    }

    /// Unit price as a decimal; `None` when the backend sent a
    /// non-numeric string
    pub fn unit_price(&self) -> Option<Decimal> {
        self.product_price.trim().parse().ok()
    }

    /// Line total (`amount * unit price`)
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price().map(|p| p * Decimal::from(self.amount))
    }

    pub fn is_served(&self) -> bool {
        self.served_at.is_some()
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub status: OrderStatus,
    pub table_number: i64,
    /// ISO day, `YYYY-MM-DD`
    pub date: String,
    /// Wall-clock `HH:MM`
    pub time: String,
    /// Total, string-encoded on the wire
    pub total: String,
    pub order_items: Vec<OrderItem>,
    pub amount_of_people: i32,
    /// Employee uid that owns the order
    pub employee: String,
    /// Snake-case on the wire, unlike the rest of the record
    #[serde(rename = "employee_name", default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
}

impl Order {
    /// Order total as a decimal
    pub fn total_decimal(&self) -> Option<Decimal> {
        self.total.trim().parse().ok()
    }

    /// Sum of line totals; lines with unparseable prices contribute zero
    pub fn computed_total(&self) -> Decimal {
        self.order_items
            .iter()
            .filter_map(OrderItem::line_total)
            .sum()
    }

    pub fn all_items_served(&self) -> bool {
        self.order_items.iter().all(OrderItem::is_served)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: i64, amount: i32, price: &str) -> OrderItem {
        OrderItem::new(product_id, amount, format!("p{}", product_id), price)
    }

    #[test]
    fn status_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            r#""IN PROGRESS""#
        );
        let status: OrderStatus = serde_json::from_str(r#""IN PROGRESS""#).unwrap();
        assert_eq!(status, OrderStatus::InProgress);
        let status: OrderStatus = serde_json::from_str(r#""INACTIVE""#).unwrap();
        assert_eq!(status, OrderStatus::Inactive);
    }

    #[test]
    fn line_total_multiplies_amount() {
        let line = item(1, 3, "2.50");
        assert_eq!(line.line_total(), Some("7.50".parse().unwrap()));
    }

    #[test]
    fn computed_total_skips_bad_prices() {
        let order = Order {
            id: Some(1),
            status: OrderStatus::InProgress,
            table_number: 4,
            date: "2025-06-01".into(),
            time: "20:00".into(),
            total: "0".into(),
            order_items: vec![item(1, 2, "3.00"), item(2, 1, "n/a")],
            amount_of_people: 2,
            employee: "uid-1".into(),
            employee_name: None,
        };
        assert_eq!(order.computed_total(), "6.00".parse().unwrap());
    }

    #[test]
    fn all_items_served_on_empty_order() {
        let order = Order {
            id: None,
            status: OrderStatus::Inactive,
            table_number: 0,
            date: String::new(),
            time: String::new(),
            total: String::new(),
            order_items: Vec::new(),
            amount_of_people: 0,
            employee: String::new(),
            employee_name: None,
        };
        assert!(order.all_items_served());
    }

    #[test]
    fn order_serializes_camel_case() {
        let order = Order {
            id: Some(7),
            status: OrderStatus::InProgress,
            table_number: 3,
            date: "2025-06-01".into(),
            time: "19:45".into(),
            total: "12.00".into(),
            order_items: vec![],
            amount_of_people: 2,
            employee: "uid-9".into(),
            employee_name: None,
        };
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains(r#""tableNumber":3"#));
        assert!(json.contains(r#""amountOfPeople":2"#));
        assert!(json.contains(r#""orderItems":[]"#));
    }
}
