use std::time::Duration;

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, TransactionTrait};

use super::{setup_test_db, unique_id};
use crate::named_item::{NamedItem, NamedItemEntity};
use crate::team;

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let item = NamedItem { id: unique_id("rollback"), name: Some("Rollback".into()), is_disabled: false };
    let txn = db.begin().await?;
    team::Entity::active_model(&item).insert(&txn).await?;
    txn.rollback().await?;

    assert!(team::Entity::find_by_id(item.id).one(&db).await?.is_none());
    Ok(())
}

/// Dropping a transaction without commit behaves like a rollback
#[tokio::test]
async fn test_dropped_transaction_discards_writes() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let item = NamedItem { id: unique_id("dropped"), name: Some("Dropped".into()), is_disabled: false };
    {
        let txn = db.begin().await?;
        team::Entity::active_model(&item).insert(&txn).await?;
    }

    assert!(team::Entity::find_by_id(item.id).one(&db).await?.is_none());
    Ok(())
}

/// A second `FOR UPDATE` on the same row waits for the first transaction
#[tokio::test]
async fn test_exclusive_lock_blocks_second_locker() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let item = NamedItem { id: unique_id("locked"), name: Some("Locked".into()), is_disabled: false };
    team::Entity::active_model(&item).insert(&db).await?;

    let first = db.begin().await?;
    let held = team::Entity::find()
        .filter(team::Column::Id.eq(item.id.clone()))
        .lock_exclusive()
        .one(&first)
        .await?;
    assert!(held.is_some());

    let db2 = db.clone();
    let id = item.id.clone();
    let waiter = tokio::spawn(async move {
        let second = db2.begin().await?;
        let row = team::Entity::find()
            .filter(team::Column::Id.eq(id))
            .lock_exclusive()
            .one(&second)
            .await?;
        second.commit().await?;
        Ok::<_, sea_orm::DbErr>(row)
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!waiter.is_finished(), "second locker should be blocked");

    first.commit().await?;
    let row = waiter.await??;
    assert!(row.is_some());

    team::Entity::delete_by_id(item.id).exec(&db).await?;
    Ok(())
}
