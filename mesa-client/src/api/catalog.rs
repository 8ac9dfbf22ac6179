//! Product and category endpoints

use crate::error::ClientResult;
use crate::http::HttpClient;
use reqwest::Method;
use serde_json::json;
use shared::response::{CategoriesEnvelope, ProductEnvelope, ProductsEnvelope};
use shared::{Category, Product};

impl HttpClient {
    pub(crate) async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        let envelope: ProductsEnvelope = self.request(Method::GET, "/products", None).await?;
        Ok(envelope.products)
    }

    pub(crate) async fn fetch_product(&self, product_id: i64) -> ClientResult<Product> {
        let envelope: ProductEnvelope = self
            .request(Method::GET, &format!("/products/{}", product_id), None)
            .await?;
        Ok(envelope.product)
    }

    pub(crate) async fn put_lower_stock(&self, product_id: i64, consumed: i32) -> ClientResult<()> {
        self.request_unit(
            Method::PUT,
            &format!("/lower-stock/{}/{}", product_id, consumed),
            Some(json!({"stock": consumed.to_string()})),
        )
        .await
    }

    pub(crate) async fn fetch_categories(&self) -> ClientResult<Vec<Category>> {
        let envelope: CategoriesEnvelope = self.request(Method::GET, "/categories", None).await?;
        Ok(envelope.categories)
    }

    pub(crate) async fn fetch_products_by_category(
        &self,
        category_ids: &[i64],
    ) -> ClientResult<Vec<Product>> {
        let joined = category_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.request(Method::GET, &format!("/categories/products/{}", joined), None)
            .await
    }
}
