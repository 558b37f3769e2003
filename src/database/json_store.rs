use std::{marker::PhantomData, path::PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;

use crate::{error::Result, logerr, logvbln};

/// A JSON array kept in one file, newest record first.
pub struct JsonStore<T> {
    path: PathBuf,
    // Serialises read-modify-write cycles on the file
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> JsonStore<T> {
    const CC: &str = "JsonStore";

    /// Opens the store, creating the directory and an empty `[]` file if needed.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if tokio::fs::metadata(&path).await.is_err() {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, "[]").await?;
            logvbln!("Created {}", path.display());
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
            _records: PhantomData,
        })
    }

    pub async fn list(&self) -> Result<Vec<T>> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    /// Stores `record` ahead of the existing ones.
    pub async fn append(&self, record: T) -> Result<()> {
        let _guard = self.lock.lock().await;

        let mut records = self.read().await?;
        records.insert(0, record);

        let content = serde_json::to_string_pretty(&records)?;
        tokio::fs::write(&self.path, content).await?;

        Ok(())
    }

    // Blank or corrupt files read as an empty list.
    async fn read(&self) -> Result<Vec<T>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                logerr!("Ignoring unreadable {}: {}", self.path.display(), e);
                Ok(Vec::new())
            }
        }
    }
}
