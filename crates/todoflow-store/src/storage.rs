use std::path::Path;
use std::path::PathBuf;

use todoflow_core::Todo;
use todoflow_core::TodoId;
use tracing::trace;

use crate::error::StorageError;

/// The single persistent slot holding the serialized todo collection.
///
/// `load` and `store` are the raw slot primitives; the provided methods
/// define the write semantics every implementation shares: `save_all` merges
/// the incoming set into what is already persisted (incoming wins by id,
/// records absent from the incoming set survive), while `delete` overwrites
/// the slot with the filtered set directly, bypassing the merge. The
/// asymmetry is deliberate and load-bearing.
pub trait StorageAdapter {
    /// Read the stored collection. An absent slot is an empty collection;
    /// an unreadable or unparseable slot is an error.
    fn load(&self) -> Result<Vec<Todo>, StorageError>;

    /// Overwrite the slot with exactly this set.
    fn store(&mut self, todos: &[Todo]) -> Result<(), StorageError>;

    fn save_all(&mut self, incoming: &[Todo]) -> Result<(), StorageError> {
        let merged = merge_by_id(self.load()?, incoming);
        self.store(&merged)
    }

    fn add(&mut self, todo: &Todo) -> Result<(), StorageError> {
        let mut todos = self.load()?;
        todos.push(todo.clone());
        self.save_all(&todos)
    }

    /// Replace the persisted record with the same id; silent no-op when the
    /// id is not persisted.
    fn update(&mut self, todo: &Todo) -> Result<(), StorageError> {
        let mut todos = self.load()?;
        if let Some(slot) = todos.iter_mut().find(|stored| stored.id == todo.id) {
            *slot = todo.clone();
            self.save_all(&todos)?;
        }
        Ok(())
    }

    /// Remove by id and overwrite the slot with the filtered set. No merge.
    fn delete(&mut self, id: &TodoId) -> Result<(), StorageError> {
        let todos = self.load()?;
        let remaining: Vec<Todo> = todos
            .into_iter()
            .filter(|stored| stored.id != *id)
            .collect();
        self.store(&remaining)
    }
}

/// Merge `incoming` into `existing` by id: survivors keep their stored
/// order, incoming records win on conflict, new records append in incoming
/// order.
pub fn merge_by_id(existing: Vec<Todo>, incoming: &[Todo]) -> Vec<Todo> {
    let mut merged = existing;
    for todo in incoming {
        match merged.iter_mut().find(|stored| stored.id == todo.id) {
            Some(slot) => *slot = todo.clone(),
            None => merged.push(todo.clone()),
        }
    }
    merged
}

/// One JSON file as the storage slot.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

impl StorageAdapter for JsonFileStorage {
    fn load(&self) -> Result<Vec<Todo>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = std::fs::read(&self.path)?;
        let todos = serde_json::from_slice::<Vec<Todo>>(&bytes)?;
        trace!(count = todos.len(), path = %self.path.display(), "slot loaded");
        Ok(todos)
    }

    fn store(&mut self, todos: &[Todo]) -> Result<(), StorageError> {
        let encoded = serde_json::to_vec(todos)?;
        std::fs::write(&self.path, encoded)?;
        trace!(count = todos.len(), path = %self.path.display(), "slot written");
        Ok(())
    }
}

/// In-memory slot with the same semantics, plus fail switches for driving
/// the failure paths in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Option<Vec<Todo>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(todos: Vec<Todo>) -> Self {
        Self {
            slot: Some(todos),
            ..Self::default()
        }
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn slot(&self) -> &[Todo] {
        self.slot.as_deref().unwrap_or(&[])
    }
}

impl StorageAdapter for MemoryStorage {
    fn load(&self) -> Result<Vec<Todo>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("read refused".to_string()));
        }
        Ok(self.slot.clone().unwrap_or_default())
    }

    fn store(&mut self, todos: &[Todo]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("write refused".to_string()));
        }
        self.slot = Some(todos.to_vec());
        Ok(())
    }
}
