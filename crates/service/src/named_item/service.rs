use std::sync::Arc;

use models::named_item::{NamedItem, NamedItemPatch, NewNamedItem};
use tracing::{debug, info, instrument, warn};

use crate::errors::{ServiceError, StoreError};
use crate::named_item::repository::{NamedItemStore, NamedItemTx};

/// A losing racer on a missing id gets one more go, as an update.
const UPSERT_ATTEMPTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(NamedItem),
    /// The id is taken; the existing row was left untouched.
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// Another table still points at this row.
    Referenced,
}

/// Business rules for one concrete named-item type, independent of the web
/// framework and of the storage backend.
pub struct NamedItemService<S: NamedItemStore> {
    store: Arc<S>,
}

impl<S: NamedItemStore> NamedItemService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    pub fn kind(&self) -> &'static str { self.store.kind() }

    /// Rows of this type; disabled rows only when `include_disabled` is `Some(true)`.
    #[instrument(skip(self), fields(kind = self.store.kind()))]
    pub async fn list(&self, include_disabled: Option<bool>) -> Result<Vec<NamedItem>, ServiceError> {
        let include_disabled = include_disabled.unwrap_or(false);
        let items = self.store.list(include_disabled).await?;
        debug!(count = items.len(), include_disabled, "listed named items");
        Ok(items)
    }

    pub async fn get(&self, id: &str) -> Result<Option<NamedItem>, ServiceError> {
        Ok(self.store.get(id).await?)
    }

    /// Insert a new row unless the id is already in use.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::named_item::NewNamedItem;
    /// use service::named_item::{CreateOutcome, MemoryNamedItemStore, NamedItemService};
    ///
    /// let svc = NamedItemService::new(Arc::new(MemoryNamedItemStore::new("team")));
    /// let input = NewNamedItem { id: "team-a".into(), name: Some("Team A".into()), is_disabled: None };
    /// let first = tokio_test::block_on(svc.create(input.clone())).unwrap();
    /// assert!(matches!(first, CreateOutcome::Created(ref item) if !item.is_disabled));
    /// let again = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(again, CreateOutcome::AlreadyExists);
    /// ```
    #[instrument(skip(self, input), fields(kind = self.store.kind(), id = %input.id))]
    pub async fn create(&self, input: NewNamedItem) -> Result<CreateOutcome, ServiceError> {
        let item = input.into_item();
        let mut tx = self.store.begin().await?;

        if let Some(existing) = tx.find(&item.id).await? {
            info!(name = ?existing.name, "create refused, id already in use");
            return Ok(CreateOutcome::AlreadyExists);
        }

        // The lookup above does not lock anything; a concurrent create can
        // still win, and the primary key turns that into a unique violation.
        let written = match tx.insert(&item).await {
            Ok(()) => tx.commit().await,
            Err(e) => Err(e),
        };
        match written {
            Ok(()) => {
                info!(name = ?item.name, is_disabled = item.is_disabled, "named item created");
                Ok(CreateOutcome::Created(item))
            }
            Err(StoreError::UniqueViolation(detail)) => {
                info!(%detail, "create lost a race on the id");
                Ok(CreateOutcome::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Create the row if missing, otherwise merge the supplied fields into it.
    /// Returns the row as stored.
    #[instrument(skip(self, patch), fields(kind = self.store.kind()))]
    pub async fn upsert(&self, id: &str, patch: NamedItemPatch) -> Result<NamedItem, ServiceError> {
        let mut attempt = 1;
        loop {
            match self.try_upsert(id, &patch).await {
                Err(ServiceError::Store(StoreError::UniqueViolation(detail))) if attempt < UPSERT_ATTEMPTS => {
                    warn!(%detail, attempt, "concurrent insert won, retrying as update");
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    async fn try_upsert(&self, id: &str, patch: &NamedItemPatch) -> Result<NamedItem, ServiceError> {
        let mut tx = self.store.begin().await?;

        let stored = match tx.find_for_update(id).await? {
            None => {
                let item = patch.clone().into_new(id);
                info!(name = ?item.name, "creating named item through upsert");
                tx.insert(&item).await?;
                item
            }
            Some(mut item) => {
                patch.apply_to(&mut item);
                info!(name = ?item.name, is_disabled = item.is_disabled, "updating named item");
                tx.update(&item).await?;
                item
            }
        };

        tx.commit().await?;
        Ok(stored)
    }

    /// Physically remove the row. A row still referenced elsewhere stays.
    #[instrument(skip(self), fields(kind = self.store.kind()))]
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome, ServiceError> {
        let mut tx = self.store.begin().await?;

        let removed = match tx.delete(id).await {
            Ok(n) => n,
            Err(StoreError::ForeignKeyViolation(detail)) => {
                warn!(%detail, "delete refused, row is referenced");
                return Ok(DeleteOutcome::Referenced);
            }
            Err(e) => return Err(e.into()),
        };
        if removed == 0 {
            return Ok(DeleteOutcome::NotFound);
        }

        // deferred constraints report at commit
        match tx.commit().await {
            Ok(()) => {
                info!("named item deleted");
                Ok(DeleteOutcome::Deleted)
            }
            Err(StoreError::ForeignKeyViolation(detail)) => {
                warn!(%detail, "delete refused at commit, row is referenced");
                Ok(DeleteOutcome::Referenced)
            }
            Err(e) => Err(e.into()),
        }
    }
}
