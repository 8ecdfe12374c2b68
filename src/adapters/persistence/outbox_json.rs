//! Implements OutboxPort using a JSON file.
//!
//! All drafts live in one document (outbox.json) behind an in-memory cache.

use chrono::{DateTime, Utc};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::{DomainError, EmailMessage};
use crate::ports::OutboxPort;

/// JSON file-based outbox.
pub struct OutboxJson {
    path: std::path::PathBuf,
    cache: tokio::sync::RwLock<Vec<EmailMessage>>,
}

impl OutboxJson {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: tokio::sync::RwLock::new(Vec::new()),
        }
    }

    /// Load drafts from disk. Call after construction. A missing file is an
    /// empty outbox; a corrupt file is an error (never silently dropped).
    pub async fn load(&self) -> Result<(), DomainError> {
        let drafts = match fs::read_to_string(&self.path).await {
            Ok(s) => serde_json::from_str(&s)
                .map_err(|e| DomainError::Outbox(format!("parse {}: {}", self.path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(DomainError::Outbox(e.to_string())),
        };
        *self.cache.write().await = drafts;
        Ok(())
    }

    /// Add a draft and persist. Used by tests and by seeding tools.
    pub async fn insert(&self, draft: EmailMessage) -> Result<(), DomainError> {
        {
            let mut cache = self.cache.write().await;
            cache.push(draft);
        }
        self.save().await
    }

    /// Atomic save using write-replace:
    /// 1. Write to temp file
    /// 2. sync_all() to ensure flush to disk
    /// 3. Atomic rename to target path
    async fn save(&self) -> Result<(), DomainError> {
        let drafts = self.cache.read().await;
        let json = serde_json::to_string_pretty(&*drafts)
            .map_err(|e| DomainError::Outbox(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Outbox(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Outbox(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Outbox(format!("sync temp file: {}", e)))?;
        drop(f);

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Outbox(format!("atomic rename failed: {}", e)))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl OutboxPort for OutboxJson {
    async fn list(&self) -> Result<Vec<EmailMessage>, DomainError> {
        let cache = self.cache.read().await;
        let mut drafts = cache.clone();
        drafts.sort_by_key(|d| (d.sent_at.is_some(), d.id));
        Ok(drafts)
    }

    async fn get(&self, id: u32) -> Result<EmailMessage, DomainError> {
        let cache = self.cache.read().await;
        cache
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(DomainError::DraftNotFound(id))
    }

    async fn mark_sent(&self, id: u32, when: DateTime<Utc>) -> Result<(), DomainError> {
        {
            let mut cache = self.cache.write().await;
            let draft = cache
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or(DomainError::DraftNotFound(id))?;
            draft.sent_at = Some(when);
        }
        self.save().await
    }
}
