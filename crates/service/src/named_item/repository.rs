use async_trait::async_trait;
use models::named_item::NamedItem;

use crate::errors::StoreError;

/// Transactional access to the table of one concrete named-item type.
///
/// Reads that need no isolation go straight through the store; every
/// mutation happens inside a [`NamedItemTx`].
#[async_trait]
pub trait NamedItemStore: Send + Sync {
    type Tx: NamedItemTx + 'static;

    /// Label of the concrete type, used in logs.
    fn kind(&self) -> &'static str;

    async fn list(&self, include_disabled: bool) -> Result<Vec<NamedItem>, StoreError>;
    async fn get(&self, id: &str) -> Result<Option<NamedItem>, StoreError>;
    async fn begin(&self) -> Result<Self::Tx, StoreError>;
}

/// One open transaction. Dropping it without [`NamedItemTx::commit`] rolls
/// every staged write back.
#[async_trait]
pub trait NamedItemTx: Send + Sized {
    async fn find(&mut self, id: &str) -> Result<Option<NamedItem>, StoreError>;

    /// Like `find`, but holds an exclusive lock on the row until the
    /// transaction ends. A missing row is not locked.
    async fn find_for_update(&mut self, id: &str) -> Result<Option<NamedItem>, StoreError>;

    async fn insert(&mut self, item: &NamedItem) -> Result<(), StoreError>;
    async fn update(&mut self, item: &NamedItem) -> Result<(), StoreError>;

    /// Number of rows removed (0 or 1).
    async fn delete(&mut self, id: &str) -> Result<u64, StoreError>;

    async fn commit(self) -> Result<(), StoreError>;
}
