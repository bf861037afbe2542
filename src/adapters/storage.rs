use crate::core::Storage;
use crate::utils::error::{BingoError, Result};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

/// Files under a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.full_path(path)).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes to a sibling temporary file then renames it over the target,
    /// so readers see either the old or the new document.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let tmp_path = temporary_sibling(&full_path);
        fs::write(&tmp_path, data).await?;
        if let Err(e) = fs::rename(&tmp_path, &full_path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        Ok(())
    }

    fn describe(&self, path: &str) -> String {
        self.full_path(path).display().to_string()
    }
}

fn temporary_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<String, Vec<u8>>,
    read_only: bool,
}

/// In-memory storage for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, path: &str, data: &[u8]) {
        let mut state = self.state.lock().await;
        state.files.insert(path.to_string(), data.to_vec());
    }

    pub async fn get(&self, path: &str) -> Option<Vec<u8>> {
        let state = self.state.lock().await;
        state.files.get(path).cloned()
    }

    /// Makes every following write fail with `PermissionDenied`.
    pub async fn set_read_only(&self, read_only: bool) {
        self.state.lock().await.read_only = read_only;
    }
}

impl Storage for MemoryStorage {
    async fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let state = self.state.lock().await;
        Ok(state.files.get(path).cloned())
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.read_only {
            return Err(BingoError::IoError(std::io::Error::new(
                ErrorKind::PermissionDenied,
                format!("read-only storage: {}", path),
            )));
        }
        state.files.insert(path.to_string(), data.to_vec());
        Ok(())
    }

    fn describe(&self, path: &str) -> String {
        format!("memory://{}", path)
    }
}
