//! Key-value persistence for progress snapshots.
//!
//! Progress is a convenience, not a correctness requirement, so the whole
//! layer fails open: a missing, unreadable, or malformed snapshot loads as
//! fresh defaults, and a failed save is silently skipped. Nothing in here
//! ever surfaces an error to the movement feature.

use std::collections::HashMap;
use std::path::PathBuf;

use super::LearningProgress;

/// Storage key for the one progress snapshot vimdrill keeps.
pub const PROGRESS_KEY: &str = "progress";

/// Minimal key-value storage contract.
///
/// Values are JSON strings; the store neither parses nor validates them.
/// Implementations are injected into [`ProgressStore`], never looked up
/// ambiently.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    /// Failures are swallowed; the write is best-effort.
    fn set(&mut self, key: &str, value: &str);

    /// Removes the value stored under `key`, if any.
    fn remove(&mut self, key: &str);
}

impl KeyValueStore for Box<dyn KeyValueStore> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key);
    }
}

/// File-backed store: one JSON file per key in a directory.
///
/// vimdrill keeps its data next to its config, under
/// `~/.config/vimdrill/`. Each key becomes `<key>.json` in that
/// directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given directory.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the default storage directory, `~/.config/vimdrill/`.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("vimdrill");
            path
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if std::fs::create_dir_all(&self.dir).is_err() {
            return;
        }
        let _ = std::fs::write(self.path_for(key), value);
    }

    fn remove(&mut self, key: &str) {
        let _ = std::fs::remove_file(self.path_for(key));
    }
}

/// In-memory store, used in tests and `--no-persist` sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Loads, saves, and clears the progress snapshot.
///
/// Every save writes the full snapshot under [`PROGRESS_KEY`]; there is
/// no partial merge, so the stored value is always a complete
/// [`LearningProgress`].
///
/// # Example
///
/// ```
/// use vimdrill::motion::Direction;
/// use vimdrill::progress::{LearningProgress, MemoryStore, ProgressStore};
///
/// let mut store = ProgressStore::new(MemoryStore::new());
/// let progress = LearningProgress::new().record_attempt(Direction::Down, true);
/// store.save(&progress);
/// assert_eq!(store.load(), progress);
///
/// store.clear();
/// assert_eq!(store.load(), LearningProgress::default());
/// ```
pub struct ProgressStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Creates a progress store over the given key-value backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the saved snapshot, or defaults when absent or malformed.
    pub fn load(&self) -> LearningProgress {
        self.store
            .get(PROGRESS_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Saves a full snapshot. Serialization or write failures skip the
    /// save; the previous snapshot stays in place.
    pub fn save(&mut self, progress: &LearningProgress) {
        if let Ok(json) = serde_json::to_string(progress) {
            self.store.set(PROGRESS_KEY, &json);
        }
    }

    /// Removes the saved snapshot.
    pub fn clear(&mut self) {
        self.store.remove(PROGRESS_KEY);
    }
}
