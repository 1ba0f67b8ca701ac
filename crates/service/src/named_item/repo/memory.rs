//! In-memory store with the transactional contract of the SeaORM store:
//! writes are staged until commit, uniqueness is checked again at commit,
//! row locks are held until the transaction ends and referenced rows refuse
//! to be deleted.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use models::named_item::NamedItem;
use tokio::sync::{Mutex as RowLock, OwnedMutexGuard};

use crate::errors::StoreError;
use crate::named_item::repository::{NamedItemStore, NamedItemTx};

#[derive(Default)]
struct Table {
    rows: BTreeMap<String, NamedItem>,
    // ids pointed at by rows of some other table
    referenced: HashSet<String>,
}

type RowLocks = Arc<Mutex<HashMap<String, Arc<RowLock<()>>>>>;

fn lock_table(table: &Mutex<Table>) -> Result<MutexGuard<'_, Table>, StoreError> {
    table.lock().map_err(|_| StoreError::Db("memory table lock poisoned".into()))
}

#[derive(Clone)]
pub struct MemoryNamedItemStore {
    kind: &'static str,
    table: Arc<Mutex<Table>>,
    locks: RowLocks,
}

impl MemoryNamedItemStore {
    pub fn new(kind: &'static str) -> Self {
        Self { kind, table: Arc::default(), locks: Arc::default() }
    }

    pub fn with_items(kind: &'static str, items: impl IntoIterator<Item = NamedItem>) -> Self {
        let store = Self::new(kind);
        if let Ok(mut table) = store.table.lock() {
            table.rows.extend(items.into_iter().map(|item| (item.id.clone(), item)));
        }
        store
    }

    /// Simulate a foreign key from another table pointing at `id`.
    pub fn add_reference(&self, id: &str) -> Result<(), StoreError> {
        lock_table(&self.table)?.referenced.insert(id.to_owned());
        Ok(())
    }

    pub fn remove_reference(&self, id: &str) -> Result<(), StoreError> {
        lock_table(&self.table)?.referenced.remove(id);
        Ok(())
    }
}

#[async_trait]
impl NamedItemStore for MemoryNamedItemStore {
    type Tx = MemoryNamedItemTx;

    fn kind(&self) -> &'static str { self.kind }

    async fn list(&self, include_disabled: bool) -> Result<Vec<NamedItem>, StoreError> {
        let table = lock_table(&self.table)?;
        Ok(table.rows.values().filter(|item| include_disabled || !item.is_disabled).cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<NamedItem>, StoreError> {
        Ok(lock_table(&self.table)?.rows.get(id).cloned())
    }

    async fn begin(&self) -> Result<Self::Tx, StoreError> {
        Ok(MemoryNamedItemTx {
            table: Arc::clone(&self.table),
            locks: Arc::clone(&self.locks),
            staged: BTreeMap::new(),
            held: HashMap::new(),
        })
    }
}

enum Staged {
    Insert(NamedItem),
    Update(NamedItem),
    Delete,
}

pub struct MemoryNamedItemTx {
    table: Arc<Mutex<Table>>,
    locks: RowLocks,
    staged: BTreeMap<String, Staged>,
    held: HashMap<String, OwnedMutexGuard<()>>,
}

impl MemoryNamedItemTx {
    fn committed(&self, id: &str) -> Result<Option<NamedItem>, StoreError> {
        Ok(lock_table(&self.table)?.rows.get(id).cloned())
    }

    fn visible(&self, id: &str) -> Result<Option<NamedItem>, StoreError> {
        match self.staged.get(id) {
            Some(Staged::Insert(item)) | Some(Staged::Update(item)) => Ok(Some(item.clone())),
            Some(Staged::Delete) => Ok(None),
            None => self.committed(id),
        }
    }

    fn row_lock(&self, id: &str) -> Result<Arc<RowLock<()>>, StoreError> {
        let mut locks = self.locks.lock().map_err(|_| StoreError::Db("memory row locks poisoned".into()))?;
        Ok(Arc::clone(locks.entry(id.to_owned()).or_default()))
    }

    /// Take the row lock of a committed row, once per transaction.
    async fn lock_row(&mut self, id: &str) -> Result<(), StoreError> {
        let exists = self.committed(id)?.is_some();
        if exists && !self.held.contains_key(id) {
            let row_lock = self.row_lock(id)?;
            let guard = row_lock.lock_owned().await;
            self.held.insert(id.to_owned(), guard);
        }
        Ok(())
    }
}

#[async_trait]
impl NamedItemTx for MemoryNamedItemTx {
    async fn find(&mut self, id: &str) -> Result<Option<NamedItem>, StoreError> {
        self.visible(id)
    }

    async fn find_for_update(&mut self, id: &str) -> Result<Option<NamedItem>, StoreError> {
        self.lock_row(id).await?;
        // re-read: the previous holder may have changed or removed the row
        self.visible(id)
    }

    async fn insert(&mut self, item: &NamedItem) -> Result<(), StoreError> {
        if self.visible(&item.id)?.is_some() {
            return Err(StoreError::UniqueViolation(format!("{} already exists", item.id)));
        }
        let staged = match self.staged.get(&item.id) {
            Some(Staged::Delete) => Staged::Update(item.clone()),
            _ => Staged::Insert(item.clone()),
        };
        self.staged.insert(item.id.clone(), staged);
        Ok(())
    }

    async fn update(&mut self, item: &NamedItem) -> Result<(), StoreError> {
        if self.visible(&item.id)?.is_none() {
            return Ok(());
        }
        let staged = match self.staged.get(&item.id) {
            Some(Staged::Insert(_)) => Staged::Insert(item.clone()),
            _ => Staged::Update(item.clone()),
        };
        self.staged.insert(item.id.clone(), staged);
        Ok(())
    }

    async fn delete(&mut self, id: &str) -> Result<u64, StoreError> {
        // DELETE waits on a row held FOR UPDATE
        self.lock_row(id).await?;
        if self.visible(id)?.is_none() {
            return Ok(0);
        }
        if lock_table(&self.table)?.referenced.contains(id) {
            return Err(StoreError::ForeignKeyViolation(format!("{id} is still referenced")));
        }
        if let Some(Staged::Insert(_)) = self.staged.get(id) {
            self.staged.remove(id);
        } else {
            self.staged.insert(id.to_owned(), Staged::Delete);
        }
        Ok(1)
    }

    async fn commit(self) -> Result<(), StoreError> {
        let mut table = lock_table(&self.table)?;
        for (id, op) in &self.staged {
            if matches!(op, Staged::Insert(_)) && table.rows.contains_key(id) {
                return Err(StoreError::UniqueViolation(format!("{id} already exists")));
            }
        }
        for (id, op) in self.staged {
            match op {
                Staged::Insert(item) => {
                    table.rows.insert(id, item);
                }
                // an UPDATE of a row removed meanwhile touches nothing
                Staged::Update(item) => {
                    if let Some(row) = table.rows.get_mut(&id) {
                        *row = item;
                    }
                }
                Staged::Delete => {
                    table.rows.remove(&id);
                }
            }
        }
        Ok(())
    }
}
