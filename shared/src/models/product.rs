//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::wire;

/// Catalog product
///
/// Price and stock are string-encoded on the wire. Category membership
/// arrives comma-joined (`"3,7"`); it is normalized to ids at the serde
/// boundary instead of being re-split ad hoc by every caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub stock: String,
    #[serde(rename = "categories", with = "wire::comma_ids", default)]
    pub category_ids: Vec<i64>,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Unit price as a decimal; `None` when the string is not numeric
    pub fn price_decimal(&self) -> Option<Decimal> {
        self.price.trim().parse().ok()
    }

    /// Units in stock; a missing or unparseable value reads as zero
    pub fn stock_qty(&self) -> i32 {
        self.stock.trim().parse().unwrap_or(0)
    }

    pub fn in_stock(&self) -> bool {
        self.stock_qty() > 0
    }

    pub fn in_category(&self, category_id: i64) -> bool {
        self.category_ids.contains(&category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_and_price_parse() {
        let p: Product = serde_json::from_str(
            r#"{"id": 3, "name": "Flat white", "price": "4.20", "stock": "12", "categories": "1,4"}"#,
        )
        .unwrap();
        assert_eq!(p.price_decimal(), Some("4.20".parse().unwrap()));
        assert_eq!(p.stock_qty(), 12);
        assert!(p.in_stock());
        assert!(p.in_category(4));
        assert!(!p.in_category(2));
    }

    #[test]
    fn zero_stock_string_means_sold_out() {
        let p: Product = serde_json::from_str(
            r#"{"id": 1, "name": "Tarta", "price": "6", "stock": "0", "categories": ""}"#,
        )
        .unwrap();
        assert!(!p.in_stock());
        assert!(p.category_ids.is_empty());
    }
}
