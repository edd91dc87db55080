//! On-disk roster storage
//!
//! Every upload gets its own directory: `<upload_dir>/<uuid>/uploaded_data.csv`.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use shared::{process_debug, ProcessId};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::RosterStore;

pub const UPLOADED_FILE_NAME: &str = "uploaded_data.csv";

/// Real roster store backed by the local file system
#[derive(Debug, Clone)]
pub struct RealRosterStore {
    upload_dir: PathBuf,
}

impl RealRosterStore {
    pub fn new<P: AsRef<Path>>(upload_dir: P) -> Self {
        Self {
            upload_dir: upload_dir.as_ref().to_path_buf(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Only paths this store handed out are readable
    fn resolve(&self, file_path: &str) -> Option<PathBuf> {
        let path = PathBuf::from(file_path);
        let escapes = path
            .components()
            .any(|component| matches!(component, Component::ParentDir));
        if escapes || !path.starts_with(&self.upload_dir) || path.file_name()? != OsStr::new(UPLOADED_FILE_NAME) {
            return None;
        }
        Some(path)
    }
}

#[async_trait]
impl RosterStore for RealRosterStore {
    async fn save(&self, content: Vec<u8>) -> WebServerResult<String> {
        let dir = self.upload_dir.join(Uuid::new_v4().to_string());
        fs::create_dir_all(&dir).await?;

        let path = dir.join(UPLOADED_FILE_NAME);
        fs::write(&path, content).await?;
        process_debug!(ProcessId::current(), "💾 Stored roster at {}", path.display());

        Ok(path.to_string_lossy().into_owned())
    }

    async fn load(&self, file_path: &str) -> WebServerResult<String> {
        let not_found = || WebServerError::FileNotFound {
            path: file_path.to_string(),
        };
        let path = self.resolve(file_path).ok_or_else(not_found)?;

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
            Err(e) => return Err(e.into()),
        };
        String::from_utf8(bytes).map_err(|_| WebServerError::invalid_csv("file is not valid UTF-8 text"))
    }
}
