use crate::error::Result;
use crate::store::SessionStore;
use crate::timeline::TimelineCache;
use legol_suggest::ConversationMessage;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Well-known name of the per-session record inside a storage directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Serialized session record: one slot per browser/host session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub messages: Vec<ConversationMessage>,

    pub student_country: String,

    pub institution: String,

    #[serde(default)]
    pub topic: Option<String>,

    #[serde(default)]
    pub suggested_doc_ids: Vec<String>,

    #[serde(default)]
    pub timeline: Option<TimelineCache>,
}

/// Durable slot the session record lives in between runs.
///
/// `File` keeps a JSON record under a directory; `Memory` keeps it in a
/// process-wide map (hosts that bring their own slot, and tests). Missing or
/// corrupt records always load as the freshly seeded defaults.
#[derive(Clone, Debug)]
pub enum SessionStorage {
    File { dir: PathBuf },
    Memory { key: String },
}

static MEM_SLOTS: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

impl SessionStorage {
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self::File { dir: dir.into() }
    }

    pub fn memory(key: impl Into<String>) -> Self {
        Self::Memory { key: key.into() }
    }

    fn record_path(dir: &Path) -> PathBuf {
        dir.join(SESSION_FILE_NAME)
    }

    /// Persist the store's current state. The file write is atomic: the
    /// record lands in a temp file first and is renamed into place.
    pub async fn save(&self, store: &SessionStore) -> Result<()> {
        let record = store.to_persisted();
        let raw = serde_json::to_string_pretty(&record)?;

        match self {
            Self::File { dir } => {
                tokio::fs::create_dir_all(dir).await?;
                let path = Self::record_path(dir);
                let tmp = path.with_extension("json.tmp");
                tokio::fs::write(&tmp, raw.as_bytes()).await?;
                tokio::fs::rename(&tmp, &path).await?;
            }
            Self::Memory { key } => {
                MEM_SLOTS
                    .lock()
                    .expect("session slot mutex poisoned")
                    .insert(key.clone(), raw);
            }
        }
        Ok(())
    }

    /// Load the persisted session, falling back to the seeded defaults when
    /// the record is absent or unreadable. Corruption is never fatal.
    pub async fn load(&self) -> SessionStore {
        let raw = match self {
            Self::File { dir } => {
                let path = Self::record_path(dir);
                match tokio::fs::read_to_string(&path).await {
                    Ok(raw) => raw,
                    Err(_) => return SessionStore::new(),
                }
            }
            Self::Memory { key } => {
                let slots = MEM_SLOTS.lock().expect("session slot mutex poisoned");
                match slots.get(key) {
                    Some(raw) => raw.clone(),
                    None => return SessionStore::new(),
                }
            }
        };

        match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(record) => SessionStore::from_persisted(record),
            Err(err) => {
                log::warn!("Session record corrupted, starting fresh: {err}");
                SessionStore::new()
            }
        }
    }

    /// Drop the persisted record entirely.
    pub async fn remove(&self) -> Result<()> {
        match self {
            Self::File { dir } => {
                let path = Self::record_path(dir);
                match tokio::fs::remove_file(&path).await {
                    Ok(()) => Ok(()),
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
                    Err(err) => Err(err.into()),
                }
            }
            Self::Memory { key } => {
                MEM_SLOTS
                    .lock()
                    .expect("session slot mutex poisoned")
                    .remove(key);
                Ok(())
            }
        }
    }
}
