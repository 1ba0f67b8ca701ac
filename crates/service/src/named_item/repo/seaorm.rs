use std::marker::PhantomData;

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use models::named_item::{NamedItem, NamedItemEntity};
use tracing::debug;

use crate::errors::StoreError;
use crate::named_item::repository::{NamedItemStore, NamedItemTx};

/// SeaORM-backed store for the table behind entity `E`.
pub struct SeaOrmNamedItemStore<E> {
    pub db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E: NamedItemEntity> SeaOrmNamedItemStore<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _entity: PhantomData }
    }
}

#[async_trait::async_trait]
impl<E: NamedItemEntity> NamedItemStore for SeaOrmNamedItemStore<E> {
    type Tx = SeaOrmNamedItemTx<E>;

    fn kind(&self) -> &'static str { E::KIND }

    async fn list(&self, include_disabled: bool) -> Result<Vec<NamedItem>, StoreError> {
        let mut select = E::find();
        if !include_disabled {
            select = select.filter(E::is_disabled_column().eq(false));
        }
        let rows = select.order_by_asc(E::id_column()).all(&self.db).await?;
        Ok(rows.into_iter().map(E::into_item).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<NamedItem>, StoreError> {
        let row = E::find().filter(E::id_column().eq(id)).one(&self.db).await?;
        Ok(row.map(E::into_item))
    }

    async fn begin(&self) -> Result<Self::Tx, StoreError> {
        let txn = self.db.begin().await?;
        Ok(SeaOrmNamedItemTx { txn, _entity: PhantomData })
    }
}

pub struct SeaOrmNamedItemTx<E> {
    txn: DatabaseTransaction,
    _entity: PhantomData<fn() -> E>,
}

#[async_trait::async_trait]
impl<E: NamedItemEntity> NamedItemTx for SeaOrmNamedItemTx<E> {
    async fn find(&mut self, id: &str) -> Result<Option<NamedItem>, StoreError> {
        let row = E::find().filter(E::id_column().eq(id)).one(&self.txn).await?;
        Ok(row.map(E::into_item))
    }

    async fn find_for_update(&mut self, id: &str) -> Result<Option<NamedItem>, StoreError> {
        // SELECT ... FOR UPDATE
        let row = E::find()
            .filter(E::id_column().eq(id))
            .lock_exclusive()
            .one(&self.txn)
            .await?;
        debug!(kind = E::KIND, %id, found = row.is_some(), "row locked for update");
        Ok(row.map(E::into_item))
    }

    async fn insert(&mut self, item: &NamedItem) -> Result<(), StoreError> {
        E::insert(E::active_model(item)).exec(&self.txn).await?;
        Ok(())
    }

    async fn update(&mut self, item: &NamedItem) -> Result<(), StoreError> {
        E::update_many()
            .col_expr(E::name_column(), Expr::value(item.name.clone()))
            .col_expr(E::is_disabled_column(), Expr::value(item.is_disabled))
            .filter(E::id_column().eq(item.id.as_str()))
            .exec(&self.txn)
            .await?;
        Ok(())
    }

    async fn delete(&mut self, id: &str) -> Result<u64, StoreError> {
        let res = E::delete_many().filter(E::id_column().eq(id)).exec(&self.txn).await?;
        Ok(res.rows_affected)
    }

    async fn commit(self) -> Result<(), StoreError> {
        self.txn.commit().await?;
        Ok(())
    }
}
