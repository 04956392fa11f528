//! Supabase (PostgREST) history store adapter

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::application::ports::{HistoryStore, StoreError};
use crate::domain::history::{HistoryRecord, NewHistoryRecord};

/// Table holding improvement history
const HISTORY_TABLE: &str = "history";

/// History store backed by a Supabase table
pub struct SupabaseHistoryStore {
    base_url: String,
    api_key: SecretString,
    client: reqwest::Client,
}

impl SupabaseHistoryStore {
    /// Create a store for the project at `url` (e.g. `https://xyz.supabase.co`)
    pub fn new(url: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            base_url: url.into().trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured HTTP client (timeouts, proxies)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, HISTORY_TABLE)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let key = self.api_key.expose_secret();
        request.header("apikey", key).bearer_auth(key)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(StoreError::ApiError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl HistoryStore for SupabaseHistoryStore {
    async fn insert(&self, record: &NewHistoryRecord) -> Result<(), StoreError> {
        let response = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<HistoryRecord>, StoreError> {
        let user_filter = format!("eq.{}", user_id);
        let response = self
            .authorized(self.client.get(self.table_url()))
            .query(&[
                ("select", "*"),
                ("user_id", user_filter.as_str()),
                ("order", "created_at.desc"),
            ])
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_points_at_rest_endpoint() {
        let store =
            SupabaseHistoryStore::new("https://project.supabase.co/", SecretString::from("anon"));
        assert_eq!(
            store.table_url(),
            "https://project.supabase.co/rest/v1/history"
        );
    }
}
