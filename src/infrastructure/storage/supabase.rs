use async_trait::async_trait;
use derive_more::Display;
use serde_json::{Value, json};
use tracing::warn;

use super::images::build_public_url;
use crate::settings::AppConfig;

#[derive(Debug, Display)]
pub enum StorageError {
    #[display("storage request failed: {_0}")]
    Request(String),

    #[display("unexpected storage response: {_0}")]
    UnexpectedResponse(String),
}

impl std::error::Error for StorageError {}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        StorageError::Request(err.to_string())
    }
}

/// The two calls the screenshot sync needs from an object-storage service.
/// Responses are raw JSON; the reconciliation routine owns all shape
/// tolerance, so implementations just hand the payload through.
#[async_trait]
pub trait StorageApi: Send + Sync {
    /// Base endpoint of the storage service, used verbatim when constructing
    /// public URLs.
    fn endpoint(&self) -> &str;

    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Value, StorageError>;

    async fn resolve_public_url(&self, bucket: &str, path: &str) -> Result<Value, StorageError>;
}

pub struct SupabaseStorage {
    endpoint: String,
    api_key: String,
    http: reqwest::Client,
}

impl SupabaseStorage {
    pub fn new(endpoint: String, api_key: String) -> Self {
        SupabaseStorage {
            endpoint,
            api_key,
            http: reqwest::Client::new(),
        }
    }

    /// Returns `None` when the storage endpoint or key is missing, mirroring
    /// the sync script's behavior of proceeding without a client and letting
    /// the caller decide.
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        match (config.supabase_url.as_deref(), config.supabase_key.as_deref()) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => {
                Some(SupabaseStorage::new(url.to_string(), key.to_string()))
            }
            _ => {
                warn!("Supabase URL or key is not configured");
                None
            }
        }
    }
}

#[async_trait]
impl StorageApi for SupabaseStorage {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Value, StorageError> {
        let url = format!("{}/storage/v1/object/list/{}", self.endpoint, bucket);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("apikey", self.api_key.as_str())
            .json(&json!({ "prefix": prefix, "limit": limit, "offset": offset }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::UnexpectedResponse(format!(
                "list returned HTTP {status}"
            )));
        }

        Ok(response.json().await?)
    }

    async fn resolve_public_url(&self, bucket: &str, path: &str) -> Result<Value, StorageError> {
        // Public URLs are addressable without a round trip; answer in the
        // vendor SDK's response shape.
        Ok(json!({
            "data": { "publicUrl": build_public_url(&self.endpoint, bucket, path) }
        }))
    }
}
