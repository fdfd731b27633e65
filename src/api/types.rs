use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user as returned by `GET /users`.
///
/// Only `id` and `name` are read by the UI. Every other field the server
/// sends is kept in `extra` so the value serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An album as returned by `GET /albums?userId=..`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: u64,
    pub title: String,
    #[serde(rename = "userId", default)]
    pub user_id: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A photo as returned by `GET /photos?albumId=..`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u64,
    pub title: String,
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: String,
    #[serde(rename = "albumId", default)]
    pub album_id: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }
}

impl Album {
    pub fn new(id: u64, user_id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            user_id,
            extra: Map::new(),
        }
    }
}

impl Photo {
    pub fn new(
        id: u64,
        album_id: u64,
        title: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            thumbnail_url: thumbnail_url.into(),
            album_id,
            extra: Map::new(),
        }
    }
}
