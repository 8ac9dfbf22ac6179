//! Customer cart
//!
//! Product-id keyed quantities for the customer-facing ordering flow.
//! Lines disappear when their count reaches zero.

use shared::{OrderItem, Product};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: BTreeMap<i64, i32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product
    pub fn add(&mut self, product_id: i64) {
        *self.entries.entry(product_id).or_insert(0) += 1;
    }

    /// Remove one unit; the line is dropped at zero
    pub fn decrement(&mut self, product_id: i64) {
        if let Some(count) = self.entries.get_mut(&product_id) {
            *count -= 1;
            if *count <= 0 {
                self.entries.remove(&product_id);
            }
        }
    }

    pub fn quantity(&self, product_id: i64) -> i32 {
        self.entries.get(&product_id).copied().unwrap_or(0)
    }

    /// Units across every line
    pub fn total_items(&self) -> i32 {
        self.entries.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Materialize order lines against the product catalog
    ///
    /// Lines whose product is missing from the catalog are dropped.
    pub fn to_order_items(&self, products: &[Product]) -> Vec<OrderItem> {
        self.entries
            .iter()
            .filter_map(|(&product_id, &amount)| {
                let product = products.iter().find(|p| p.id == Some(product_id))?;
                Some(OrderItem::new(
                    product_id,
                    amount,
                    product.name.clone(),
                    product.price.clone(),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_across_lines() {
        let mut cart = Cart::new();
        cart.add(7);
        cart.add(7);
        cart.add(12);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.quantity(7), 2);
        assert_eq!(cart.quantity(12), 1);
    }

    #[test]
    fn decrement_drops_empty_lines() {
        let mut cart = Cart::new();
        cart.add(7);
        cart.decrement(7);
        assert!(cart.is_empty());
        assert_eq!(cart.quantity(7), 0);

        // Decrementing an absent line is a no-op.
        cart.decrement(9);
        assert!(cart.is_empty());
    }

    #[test]
    fn order_items_skip_unknown_products() {
        let products = vec![Product {
            id: Some(7),
            name: "Milanesa".into(),
            price: "11.50".into(),
            stock: "5".into(),
            category_ids: vec![1],
            image_url: None,
            description: None,
        }];

        let mut cart = Cart::new();
        cart.add(7);
        cart.add(7);
        cart.add(99);

        let items = cart.to_order_items(&products);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, 7);
        assert_eq!(items[0].amount, 2);
    }
}
