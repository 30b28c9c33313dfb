use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::{GuildDelta, GuildId, RegistryError, reconcile};

/// Persistent storage for the authorized guild list.
pub trait GuildStore {
    fn load(&self) -> Result<HashSet<GuildId>, RegistryError>;

    fn save(&self, ids: &HashSet<GuildId>) -> Result<(), RegistryError>;

    /// Held across a load/reconcile/save cycle so concurrent syncs in one
    /// process cannot lose each other's writes.
    fn lock(&self) -> MutexGuard<'_, ()>;
}

/// Reconcile the store against live membership and persist the result.
///
/// Returns the delta that was applied. Running it again with the same `live`
/// set returns an empty delta and leaves the store untouched.
pub fn sync<S: GuildStore + ?Sized>(
    store: &S,
    live: &HashSet<GuildId>,
) -> Result<GuildDelta, RegistryError> {
    let _guard = store.lock();

    let mut persisted = store.load()?;
    let delta = reconcile(&persisted, live);

    if delta.is_empty() {
        debug!(guilds = persisted.len(), "guild registry already up to date");
        return Ok(delta);
    }

    delta.apply(&mut persisted);
    store.save(&persisted)?;

    info!(
        added = ?sorted(&delta.to_add),
        removed = ?sorted(&delta.to_remove),
        guilds = persisted.len(),
        "guild registry updated"
    );
    Ok(delta)
}

fn sorted(ids: &HashSet<GuildId>) -> Vec<GuildId> {
    let mut ids: Vec<GuildId> = ids.iter().copied().collect();
    ids.sort();
    ids
}

/// Guild ids stored as a JSON array in a single file.
///
/// A missing file reads as an empty list. Writes go to a sibling temp file
/// that is then renamed over the target.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "guilds.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl GuildStore for JsonFileStore {
    fn load(&self) -> Result<HashSet<GuildId>, RegistryError> {
        let body = match fs::read_to_string(&self.path) {
            Ok(body) => body,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "guild store missing, starting empty");
                return Ok(HashSet::new());
            }
            Err(e) => return Err(e.into()),
        };
        let ids: Vec<GuildId> = serde_json::from_str(&body)?;
        Ok(ids.into_iter().collect())
    }

    fn save(&self, ids: &HashSet<GuildId>) -> Result<(), RegistryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string_pretty(&sorted(ids))?;
        let tmp = self.temp_path();
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// In-memory store, for callers that keep the list elsewhere and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    ids: Mutex<HashSet<GuildId>>,
    lock: Mutex<()>,
}

impl MemoryStore {
    pub fn new(ids: HashSet<GuildId>) -> Self {
        Self {
            ids: Mutex::new(ids),
            lock: Mutex::new(()),
        }
    }
}

impl GuildStore for MemoryStore {
    fn load(&self) -> Result<HashSet<GuildId>, RegistryError> {
        Ok(self.ids.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save(&self, ids: &HashSet<GuildId>) -> Result<(), RegistryError> {
        *self.ids.lock().unwrap_or_else(PoisonError::into_inner) = ids.clone();
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
