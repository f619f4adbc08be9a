use anyhow::{anyhow, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

/// HTTP client for the document store. Each entity lives in its own
/// collection under `/rest/v1/{collection}`; filters and ordering are
/// expressed as query parameters (`field=eq.value`, `order=field.desc`).
pub struct StoreClient {
    client: Client,
    base_url: String,
    service_key: String,
}

impl StoreClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.store_url.clone(),
            service_key: config.store_service_key.clone(),
        }
    }

    fn headers(&self, returning: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Ok(key) = HeaderValue::from_str(&self.service_key) {
            headers.insert("apikey", key);
        }
        if let Ok(bearer) = HeaderValue::from_str(&format!("Bearer {}", self.service_key)) {
            headers.insert(AUTHORIZATION, bearer);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if returning {
            headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        }

        headers
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        returning: bool,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Store request: {} {}", method, url);

        let mut req = self
            .client
            .request(method, &url)
            .headers(self.headers(returning));

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Store error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Store authentication error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                _ => anyhow!("Store error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Insert one document and read back the stored representation,
    /// including the store-generated id.
    pub async fn insert(&self, collection: &str, document: Value) -> Result<Value> {
        let path = format!("/rest/v1/{}", collection);
        let result: Vec<Value> = self
            .request(Method::POST, &path, Some(document), true)
            .await?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Insert into {} returned no document", collection))
    }

    /// Fetch documents matching a raw filter/order query string.
    pub async fn find(&self, collection: &str, query: &str) -> Result<Vec<Value>> {
        let path = if query.is_empty() {
            format!("/rest/v1/{}", collection)
        } else {
            format!("/rest/v1/{}?{}", collection, query)
        };

        self.request(Method::GET, &path, None, false).await
    }

    pub async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let path = format!("/rest/v1/{}?id=eq.{}", collection, id);
        let result: Vec<Value> = self.request(Method::GET, &path, None, false).await?;

        Ok(result.into_iter().next())
    }

    /// Patch documents matching the filter; returns the patched documents.
    /// An empty result means nothing matched.
    pub async fn update(&self, collection: &str, filter: &str, patch: Value) -> Result<Vec<Value>> {
        let path = format!("/rest/v1/{}?{}", collection, filter);
        self.request(Method::PATCH, &path, Some(patch), true).await
    }

    pub async fn update_by_id(
        &self,
        collection: &str,
        id: &str,
        patch: Value,
    ) -> Result<Option<Value>> {
        let filter = format!("id=eq.{}", id);
        let result = self.update(collection, &filter, patch).await?;

        Ok(result.into_iter().next())
    }

    /// Physical delete; returns the deleted document when the id matched.
    pub async fn delete_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let path = format!("/rest/v1/{}?id=eq.{}", collection, id);
        let result: Vec<Value> = self.request(Method::DELETE, &path, None, true).await?;

        Ok(result.into_iter().next())
    }
}
