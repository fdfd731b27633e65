use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;
use super::source::RemoteSource;
use super::types::{Album, Photo, User};
use crate::config::ApiConfig;

/// `RemoteSource` backed by the JSON placeholder REST API.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|source| ApiError::Transport {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_list<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<Vec<T>, ApiError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

        let items: Vec<T> = serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;
        debug!(url = %url, count = items.len(), "GET ok");
        Ok(items)
    }
}

#[async_trait]
impl RemoteSource for HttpSource {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_list("/users").await
    }

    async fn list_albums(&self, user_id: u64) -> Result<Vec<Album>, ApiError> {
        self.get_list(&format!("/albums?userId={}", user_id)).await
    }

    async fn list_photos(&self, album_id: u64) -> Result<Vec<Photo>, ApiError> {
        self.get_list(&format!("/photos?albumId={}", album_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:9999/".to_string(),
            ..ApiConfig::default()
        };
        let source = HttpSource::new(&config).unwrap();
        assert_eq!(source.base_url(), "http://localhost:9999");
    }
}
