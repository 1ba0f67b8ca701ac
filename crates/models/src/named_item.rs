//! Shape shared by every concrete named-item type: an externally supplied
//! id, a display name and a soft-delete flag.
//!
//! Each concrete type is its own SeaORM entity and table; the
//! [`NamedItemEntity`] trait is the capability set the service layer works
//! against, so nothing above this crate needs to know which table it is
//! talking to.

use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Persisted state of a named item. All three fields are serialized; a row
/// created without a name carries `"name": null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedItem {
    pub id: String,
    pub name: Option<String>,
    pub is_disabled: bool,
}

/// Caller-supplied fields. `None` means "not specified", which is different
/// from an explicit `false` for `is_disabled`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedItemPatch {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_disabled: Option<bool>,
}

impl NamedItemPatch {
    /// Overwrite only the fields this patch carries.
    pub fn apply_to(&self, item: &mut NamedItem) {
        if let Some(name) = &self.name {
            item.name = Some(name.clone());
        }
        if let Some(flag) = self.is_disabled {
            item.is_disabled = flag;
        }
    }

    /// Build a fresh row keyed by `id`, whatever id the payload carried.
    pub fn into_new(self, id: &str) -> NamedItem {
        NamedItem { id: id.to_owned(), name: self.name, is_disabled: self.is_disabled.unwrap_or(false) }
    }
}

/// Validated input of a create: the id is known and well formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewNamedItem {
    pub id: String,
    pub name: Option<String>,
    pub is_disabled: Option<bool>,
}

impl NewNamedItem {
    pub fn into_item(self) -> NamedItem {
        NamedItem { id: self.id, name: self.name, is_disabled: self.is_disabled.unwrap_or(false) }
    }
}

impl TryFrom<NamedItemPatch> for NewNamedItem {
    type Error = ModelError;

    fn try_from(patch: NamedItemPatch) -> Result<Self, Self::Error> {
        let id = patch.id.ok_or(ModelError::MissingField("id"))?;
        validate_id(&id)?;
        Ok(Self { id, name: patch.name, is_disabled: patch.is_disabled })
    }
}

/// Ids are non-empty and limited to `a-z`, `0-9` and `-`.
pub fn validate_id(id: &str) -> Result<(), ModelError> {
    let valid = !id.is_empty()
        && id.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !valid {
        return Err(ModelError::invalid("id", "must contain only a-z, 0-9 or -"));
    }
    Ok(())
}

/// A SeaORM entity with the named-item columns.
pub trait NamedItemEntity: EntityTrait {
    /// Label used in logs, e.g. `"team"`.
    const KIND: &'static str;

    fn id_column() -> Self::Column;
    fn name_column() -> Self::Column;
    fn is_disabled_column() -> Self::Column;

    fn into_item(model: Self::Model) -> NamedItem;
    fn active_model(item: &NamedItem) -> Self::ActiveModel;
}

/// Implements [`NamedItemEntity`] for the `Entity` of the calling module,
/// which must declare `id`, `name` and `is_disabled` columns.
macro_rules! impl_named_item_entity {
    ($kind:literal) => {
        impl $crate::named_item::NamedItemEntity for Entity {
            const KIND: &'static str = $kind;

            fn id_column() -> Column { Column::Id }
            fn name_column() -> Column { Column::Name }
            fn is_disabled_column() -> Column { Column::IsDisabled }

            fn into_item(model: Model) -> $crate::named_item::NamedItem {
                $crate::named_item::NamedItem { id: model.id, name: model.name, is_disabled: model.is_disabled }
            }

            fn active_model(item: &$crate::named_item::NamedItem) -> ActiveModel {
                ActiveModel {
                    id: sea_orm::Set(item.id.clone()),
                    name: sea_orm::Set(item.name.clone()),
                    is_disabled: sea_orm::Set(item.is_disabled),
                }
            }
        }
    };
}

pub(crate) use impl_named_item_entity;
