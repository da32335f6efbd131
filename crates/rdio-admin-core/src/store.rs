// ── Configuration collaborators ──
//
// The migration engine never talks to these; the import/export flows in
// `transfer` do. `FileStore` persists the document as a JSON file, the
// in-memory variants serve tests and embedders.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::CoreError;

/// Retrieves and persists the full configuration document.
pub trait ConfigStore {
    /// Load the current document.
    fn load(&self) -> impl Future<Output = Result<Value, CoreError>> + Send;

    /// Persist `document`. With `full_replace` the stored document is
    /// replaced wholesale; otherwise top-level keys are merged over it.
    fn save(
        &self,
        document: &Value,
        full_replace: bool,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Receives documents imported for review instead of being persisted.
pub trait ReviewSink {
    fn emit(&mut self, document: &Value, is_import_for_review: bool);
}

/// Merge `incoming` top-level keys over `current`.
fn merge_top_level(current: Value, incoming: &Value) -> Result<Value, CoreError> {
    let Value::Object(incoming) = incoming else {
        return Err(CoreError::Persistence {
            message: "only object documents can be merged".into(),
        });
    };
    let mut merged = match current {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => {
            return Err(CoreError::Persistence {
                message: "stored configuration is not an object".into(),
            });
        }
    };
    for (key, value) in incoming {
        merged.insert(key.clone(), value.clone());
    }
    Ok(Value::Object(merged))
}

// ── FileStore ───────────────────────────────────────────────────────

/// JSON file-backed store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read(&self) -> Result<Value, CoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored configuration yet");
                Ok(Value::Object(Map::new()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl ConfigStore for FileStore {
    async fn load(&self) -> Result<Value, CoreError> {
        self.read().await
    }

    async fn save(&self, document: &Value, full_replace: bool) -> Result<(), CoreError> {
        let document = if full_replace {
            document.clone()
        } else {
            merge_top_level(self.read().await?, document)?
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(&document)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, bytes).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        info!(path = %self.path.display(), full_replace, "configuration saved");
        Ok(())
    }
}

// ── In-memory collaborators ─────────────────────────────────────────

/// In-memory store; can be told to reject saves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Value>,
    reject_saves: bool,
}

impl MemoryStore {
    pub fn new(document: Value) -> Self {
        Self {
            document: Mutex::new(document),
            reject_saves: false,
        }
    }

    /// A store whose `save` always fails.
    pub fn rejecting() -> Self {
        Self {
            document: Mutex::new(Value::Null),
            reject_saves: true,
        }
    }

    pub fn snapshot(&self) -> Value {
        self.document
            .lock()
            .map(|doc| doc.clone())
            .unwrap_or(Value::Null)
    }

    fn poisoned() -> CoreError {
        CoreError::Persistence {
            message: "store lock poisoned".into(),
        }
    }
}

impl ConfigStore for MemoryStore {
    async fn load(&self) -> Result<Value, CoreError> {
        let doc = self.document.lock().map_err(|_| Self::poisoned())?;
        Ok(doc.clone())
    }

    async fn save(&self, document: &Value, full_replace: bool) -> Result<(), CoreError> {
        if self.reject_saves {
            return Err(CoreError::Persistence {
                message: "save rejected".into(),
            });
        }
        let mut stored = self.document.lock().map_err(|_| Self::poisoned())?;
        *stored = if full_replace {
            document.clone()
        } else {
            merge_top_level(stored.take(), document)?
        };
        Ok(())
    }
}

/// Review sink that keeps everything it receives.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub emitted: Vec<(Value, bool)>,
}

impl ReviewSink for CollectingSink {
    fn emit(&mut self, document: &Value, is_import_for_review: bool) {
        self.emitted.push((document.clone(), is_import_for_review));
    }
}
