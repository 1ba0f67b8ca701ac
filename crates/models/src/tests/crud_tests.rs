use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};

use super::{setup_test_db, unique_id};
use crate::named_item::{NamedItem, NamedItemEntity};
use crate::{activity_type, application_type, project, team};

#[tokio::test]
async fn named_item_round_trip_through_entity() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let item = NamedItem { id: unique_id("crud"), name: Some("Crud".into()), is_disabled: false };
    application_type::Entity::active_model(&item).insert(&db).await?;

    let found = application_type::Entity::find_by_id(item.id.clone()).one(&db).await?;
    let found = found.map(application_type::Entity::into_item);
    assert_eq!(found.as_ref(), Some(&item));

    application_type::Entity::delete_by_id(item.id.clone()).exec(&db).await?;
    assert!(application_type::Entity::find_by_id(item.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn is_disabled_filter_uses_generic_column() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let active = NamedItem { id: unique_id("active"), name: Some("Active".into()), is_disabled: false };
    let disabled = NamedItem { id: unique_id("disabled"), name: Some("Disabled".into()), is_disabled: true };
    team::Entity::active_model(&active).insert(&db).await?;
    team::Entity::active_model(&disabled).insert(&db).await?;

    let visible = team::Entity::find()
        .filter(team::Entity::is_disabled_column().eq(false))
        .all(&db)
        .await?;
    assert!(visible.iter().any(|t| t.id == active.id));
    assert!(!visible.iter().any(|t| t.id == disabled.id));

    team::Entity::delete_by_id(active.id).exec(&db).await?;
    team::Entity::delete_by_id(disabled.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn project_reference_blocks_team_delete() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let t = NamedItem { id: unique_id("owner"), name: Some("Owner".into()), is_disabled: false };
    let a = NamedItem { id: unique_id("dev"), name: Some("Dev".into()), is_disabled: false };
    team::Entity::active_model(&t).insert(&db).await?;
    activity_type::Entity::active_model(&a).insert(&db).await?;
    let p = project::create(&db, "Apollo", &t.id, Some(&a.id)).await?;

    let err = team::Entity::delete_by_id(t.id.clone()).exec(&db).await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))));
    assert!(team::Entity::find_by_id(t.id.clone()).one(&db).await?.is_some());

    project::delete(&db, p.id).await?;
    team::Entity::delete_by_id(t.id).exec(&db).await?;
    activity_type::Entity::delete_by_id(a.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn named_item_name_is_nullable() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let item = NamedItem { id: unique_id("nameless"), name: None, is_disabled: false };
    team::Entity::active_model(&item).insert(&db).await?;

    let found = team::Entity::find_by_id(item.id.clone()).one(&db).await?.map(team::Entity::into_item);
    assert_eq!(found, Some(item.clone()));

    team::Entity::delete_by_id(item.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn project_requires_name() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let err = project::create(&db, "  ", "whatever", None).await.unwrap_err();
    assert!(matches!(err, crate::errors::ModelError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn duplicate_id_is_a_unique_violation() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let item = NamedItem { id: unique_id("dup"), name: Some("Dup".into()), is_disabled: false };
    activity_type::Entity::active_model(&item).insert(&db).await?;
    let err = activity_type::Entity::active_model(&item).insert(&db).await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))));

    activity_type::Entity::delete_by_id(item.id).exec(&db).await?;
    Ok(())
}
