//! Persisted bearer token.
//!
//! The file form is a JSON object `{ "access_token": "..." }`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::{ClientError, ClientResult};

/// Where the dashboard keeps its token between runs.
#[async_trait]
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    /// The saved token, if any.
    async fn load(&self) -> ClientResult<Option<String>>;

    /// Replace the saved token.
    async fn save(&self, token: &str) -> ClientResult<()>;

    /// Forget the saved token. Clearing an empty store is not an error.
    async fn clear(&self) -> ClientResult<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenFile {
    access_token: String,
}

/// Token kept in a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token at `path`. Parent directories are created on save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the token file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> ClientResult<Option<String>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let file: TokenFile = serde_json::from_str(&raw).map_err(|e| {
            ClientError::Storage(format!("{} is not a token file: {e}", self.path.display()))
        })?;
        Ok(Some(file.access_token).filter(|t| !t.is_empty()))
    }

    async fn save(&self, token: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_string_pretty(&TokenFile {
            access_token: token.to_string(),
        })
        .map_err(|e| ClientError::Storage(e.to_string()))?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Token kept in memory only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> ClientResult<Option<String>> {
        Ok(self.token.lock().await.clone())
    }

    async fn save(&self, token: &str) -> ClientResult<()> {
        *self.token.lock().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        *self.token.lock().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_store_round_trip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested/access_token.json"));

        assert_eq!(store.load().await.unwrap(), None);
        store.save("abc.def.ghi").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("abc.def.ghi"));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["access_token"], "abc.def.ghi");

        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("access_token.json");
        std::fs::write(&path, "not json").unwrap();
        let err = FileTokenStore::new(path).load().await.unwrap_err();
        assert!(matches!(err, ClientError::Storage(_)));
    }
}
