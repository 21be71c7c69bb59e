use super::{DataStore, Table};
use crate::error::{CatalogError, Result};
use crate::model::{NewPreset, NewSearchFilter, Preset, SearchFilter};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File, OpenOptions, TryLockError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use uuid::Uuid;

const PRESETS_FILE: &str = "presets.json";
const SEARCH_FILTERS_FILE: &str = "search_filters.json";
const LOCK_FILE: &str = ".lock";
const LOCK_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long a writer waits for the store lock before giving up.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(10);

/// File-backed store: one JSON table per collection under `root`.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    lock_timeout: Duration,
}

impl FileStore {
    /// Open (and create if needed) the store directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            fs::create_dir_all(&root).map_err(|e| CatalogError::unavailable(&root, e))?;
        }
        tracing::debug!(path = %root.display(), "opened file store");
        Ok(Self {
            root,
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        })
    }

    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_table<T: DeserializeOwned>(&self, file: &str) -> Result<Table<T>> {
        let path = self.root.join(file);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Table::default()),
            Err(e) => return Err(CatalogError::unavailable(path, e)),
        };
        serde_json::from_str(&content).map_err(|source| CatalogError::Corrupt { path, source })
    }

    fn save_table<T: Serialize>(&self, file: &str, table: &Table<T>) -> Result<()> {
        let target = self.root.join(file);
        let content = serde_json::to_string_pretty(table)?;

        // Atomic Write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", file, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(|e| CatalogError::unavailable(&tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CatalogError::unavailable(target, e));
        }
        Ok(())
    }

    /// Read-modify-write of one table under the store lock.
    fn insert<T, F>(&mut self, file: &str, build: F) -> Result<T>
    where
        T: super::Identified + Clone + Serialize + DeserializeOwned,
        F: FnOnce(i64) -> T,
    {
        let _lock = StoreLock::acquire(&self.root, self.lock_timeout)?;
        let mut table: Table<T> = self.load_table(file)?;
        let row = table.insert_with(build)?;
        self.save_table(file, &table)?;
        Ok(row)
    }
}

impl DataStore for FileStore {
    fn get_preset(&self, id: i64) -> Result<Option<Preset>> {
        let table: Table<Preset> = self.load_table(PRESETS_FILE)?;
        Ok(table.get(id))
    }

    fn list_presets(&self, limit: usize) -> Result<Vec<Preset>> {
        let table: Table<Preset> = self.load_table(PRESETS_FILE)?;
        Ok(table.list(limit))
    }

    fn create_preset(&mut self, preset: NewPreset) -> Result<Preset> {
        self.insert(PRESETS_FILE, |id| preset.into_preset(id))
    }

    fn get_search_filter(&self, id: i64) -> Result<Option<SearchFilter>> {
        let table: Table<SearchFilter> = self.load_table(SEARCH_FILTERS_FILE)?;
        Ok(table.get(id))
    }

    fn list_search_filters(&self, limit: usize) -> Result<Vec<SearchFilter>> {
        let table: Table<SearchFilter> = self.load_table(SEARCH_FILTERS_FILE)?;
        Ok(table.list(limit))
    }

    fn create_search_filter(&mut self, filter: NewSearchFilter) -> Result<SearchFilter> {
        self.insert(SEARCH_FILTERS_FILE, |id| filter.into_search_filter(id))
    }
}

/// Exclusive writer lock: an OS advisory lock on `.lock`.
///
/// The lock belongs to the open handle, so it is released when the guard
/// drops and also when the holding process dies. The file itself stays.
#[derive(Debug)]
pub struct StoreLock {
    _file: File,
}

impl StoreLock {
    /// Wait up to `timeout` for the lock, then fail with `StoreLocked`.
    pub fn acquire(root: &Path, timeout: Duration) -> Result<Self> {
        let path = root.join(LOCK_FILE);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| CatalogError::unavailable(&path, e))?;

        let deadline = Instant::now() + timeout;
        loop {
            match file.try_lock() {
                Ok(()) => return Ok(Self { _file: file }),
                Err(TryLockError::WouldBlock) if Instant::now() < deadline => {
                    thread::sleep(LOCK_POLL_INTERVAL)
                }
                Err(TryLockError::WouldBlock) => {
                    tracing::warn!(path = %path.display(), ?timeout, "gave up waiting for store lock");
                    return Err(CatalogError::StoreLocked { path });
                }
                Err(TryLockError::Error(e)) => return Err(CatalogError::unavailable(path, e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DEFAULT_LIST_LIMIT;
    use std::collections::BTreeSet;
    use std::sync::{Arc, Barrier};
    use tempfile::tempdir;

    fn filter(name: &str) -> NewSearchFilter {
        NewSearchFilter {
            name: name.to_string(),
            search_query: "tinywhoop".to_string(),
            author: "Luki".to_string(),
            tags: vec!["throttle".to_string()],
        }
    }

    #[test]
    fn empty_store_lists_nothing() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("db")).unwrap();
        assert!(store.list_presets(DEFAULT_LIST_LIMIT).unwrap().is_empty());
        assert!(store.get_preset(1).unwrap().is_none());
        assert!(store.get_search_filter(1).unwrap().is_none());
    }

    #[test]
    fn create_then_get_preset() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        let submitted = NewPreset::new("Save Settings", "save")
            .with_tags(["action", "settings"])
            .with_author("BFQuickLoad");
        let created = store.create_preset(submitted.clone()).unwrap();
        assert_eq!(created.id, 1);

        let fetched = store.get_preset(created.id).unwrap().unwrap();
        assert_eq!(fetched, submitted.into_preset(1));
    }

    #[test]
    fn ids_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.create_preset(NewPreset::new("a", "")).unwrap();
            store.create_preset(NewPreset::new("b", "")).unwrap();
        }

        let mut store = FileStore::open(dir.path()).unwrap();
        let third = store.create_preset(NewPreset::new("c", "")).unwrap();
        assert_eq!(third.id, 3);

        let names: Vec<String> = store
            .list_presets(DEFAULT_LIST_LIMIT)
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn collections_have_independent_ids() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.create_preset(NewPreset::new("a", "")).unwrap();
        store.create_preset(NewPreset::new("b", "")).unwrap();

        let created = store.create_search_filter(filter("whoops")).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(store.get_search_filter(1).unwrap().unwrap().name, "whoops");
        assert_eq!(store.list_search_filters(DEFAULT_LIST_LIMIT).unwrap().len(), 1);
    }

    #[test]
    fn list_limit_caps_rows() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.create_preset(NewPreset::new("a", "")).unwrap();
        store.create_preset(NewPreset::new("b", "")).unwrap();

        assert!(store.list_presets(0).unwrap().is_empty());
        let one = store.list_presets(1).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].id, 1);
    }

    #[test]
    fn held_lock_times_out_as_locked() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path())
            .unwrap()
            .with_lock_timeout(Duration::from_millis(50));

        let guard = StoreLock::acquire(dir.path(), DEFAULT_LOCK_TIMEOUT).unwrap();
        let err = store.create_preset(NewPreset::new("a", "")).unwrap_err();
        assert!(matches!(err, CatalogError::StoreLocked { .. }));
        assert!(store.list_presets(DEFAULT_LIST_LIMIT).unwrap().is_empty());

        drop(guard);
        assert_eq!(store.create_preset(NewPreset::new("a", "")).unwrap().id, 1);
    }

    #[test]
    fn writer_waits_for_a_released_lock() {
        let dir = tempdir().unwrap();
        let guard = StoreLock::acquire(dir.path(), DEFAULT_LOCK_TIMEOUT).unwrap();

        let root = dir.path().to_path_buf();
        let writer = thread::spawn(move || {
            let mut store = FileStore::open(root).unwrap();
            store.create_preset(NewPreset::new("late", "")).map(|p| p.id)
        });
        thread::sleep(Duration::from_millis(100));
        drop(guard);

        assert_eq!(writer.join().unwrap().unwrap(), 1);
    }

    #[test]
    fn leftover_lock_file_does_not_block_writes() {
        // A writer killed mid-write leaves the file behind but no OS lock.
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(LOCK_FILE), "").unwrap();

        let mut store = FileStore::open(dir.path())
            .unwrap()
            .with_lock_timeout(Duration::from_millis(50));
        for expected in 1..=3 {
            let created = store.create_preset(NewPreset::new("after crash", "")).unwrap();
            assert_eq!(created.id, expected);
        }
    }

    #[test]
    fn lock_is_released_after_a_write() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.create_preset(NewPreset::new("a", "")).unwrap();
        assert!(StoreLock::acquire(dir.path(), Duration::ZERO).is_ok());
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        const WRITERS: usize = 8;
        const PER_WRITER: usize = 5;

        let dir = tempdir().unwrap();
        let barrier = Arc::new(Barrier::new(WRITERS));
        let handles: Vec<_> = (0..WRITERS)
            .map(|w| {
                let root = dir.path().to_path_buf();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let mut store = FileStore::open(root).unwrap();
                    barrier.wait();
                    (0..PER_WRITER)
                        .map(|i| {
                            store
                                .create_preset(NewPreset::new(format!("w{w}-{i}"), ""))
                                .map(|p| p.id)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = BTreeSet::new();
        for handle in handles {
            for created in handle.join().unwrap() {
                assert!(ids.insert(created.unwrap()), "id handed out twice");
            }
        }
        let expected: BTreeSet<i64> = (1..=(WRITERS * PER_WRITER) as i64).collect();
        assert_eq!(ids, expected);

        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            store.list_presets(DEFAULT_LIST_LIMIT).unwrap().len(),
            WRITERS * PER_WRITER
        );
    }

    #[test]
    fn stale_counter_on_disk_is_moved_past_stored_rows() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(PRESETS_FILE),
            r#"{"next_id": 1, "rows": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]}"#,
        )
        .unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        let created = store.create_preset(NewPreset::new("c", "")).unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(store.get_preset(1).unwrap().unwrap().name, "a");
    }

    #[test]
    fn exhausted_id_sequence_writes_nothing() {
        let dir = tempdir().unwrap();
        let table = format!(r#"{{"next_id": {}, "rows": []}}"#, i64::MAX);
        fs::write(dir.path().join(PRESETS_FILE), &table).unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        let err = store.create_preset(NewPreset::new("a", "")).unwrap_err();
        assert!(matches!(err, CatalogError::Store(_)));
        assert_eq!(fs::read_to_string(dir.path().join(PRESETS_FILE)).unwrap(), table);
    }

    #[test]
    fn corrupt_table_is_reported() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PRESETS_FILE), "{ not json").unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let err = store.list_presets(DEFAULT_LIST_LIMIT).unwrap_err();
        assert!(matches!(err, CatalogError::Corrupt { .. }));
    }

    #[test]
    fn root_that_is_a_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("db");
        fs::write(&blocker, "").unwrap();

        let err = FileStore::open(&blocker).unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn rows_missing_optional_fields_load_with_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(PRESETS_FILE),
            r#"{"next_id": 2, "rows": [{"id": 1, "name": "Get Version", "content": "version"}]}"#,
        )
        .unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let preset = store.get_preset(1).unwrap().unwrap();
        assert_eq!(preset.author, "unknown");
        assert!(preset.tags.is_empty());
        assert_eq!(preset.description, "");
    }
}
