//! Loyalty endpoints

use crate::error::ClientResult;
use crate::http::HttpClient;
use reqwest::Method;
use serde_json::json;

impl HttpClient {
    pub(crate) async fn put_check_level(&self, employee_uid: &str) -> ClientResult<()> {
        self.request_unit(
            Method::PUT,
            &format!("/check-level/{}", employee_uid),
            Some(json!({})),
        )
        .await
    }
}
