use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing an asset owned by a person. `person_name` is a
/// projection joined from the owner row on every read, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub id: i32,
    pub person_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub value: f64,
    pub acquired_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub person_name: String,
}

/// Input model for creating a new asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAsset {
    pub person_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub value: f64,
    pub acquired_date: NaiveDate,
}

impl NewAsset {
    /// Validates the new asset data
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.name, self.value)
    }
}

/// Input model for updating an existing asset. Replaces all mutable fields,
/// including the owner reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetUpdate {
    pub person_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub value: f64,
    pub acquired_date: NaiveDate,
}

impl AssetUpdate {
    /// Validates the asset update data
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.name, self.value)
    }
}

fn validate_fields(name: &str, value: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Asset name cannot be empty".to_string(),
        )));
    }
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Asset value must be a non-negative number".to_string(),
        )));
    }
    Ok(())
}

/// Database model for assets
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    #[diesel(skip_insertion)]
    pub id: i32,
    pub person_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub value: f64,
    pub acquired_date: NaiveDate,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
}

/// Changeset applied by update operations. `treat_none_as_null` so a missing
/// description replaces the stored one instead of being skipped.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(treat_none_as_null = true)]
pub struct AssetChangeset {
    pub person_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub value: f64,
    pub acquired_date: NaiveDate,
}

// Conversion implementations
impl From<(AssetDB, String)> for Asset {
    fn from((db, owner_name): (AssetDB, String)) -> Self {
        Self {
            id: db.id,
            person_id: db.person_id,
            name: db.name,
            description: db.description,
            value: db.value,
            acquired_date: db.acquired_date,
            created_at: db.created_at,
            person_name: owner_name,
        }
    }
}

impl From<NewAsset> for AssetDB {
    fn from(domain: NewAsset) -> Self {
        Self {
            // id and created_at are assigned by the database
            id: 0,
            person_id: domain.person_id,
            name: domain.name,
            description: domain.description,
            value: domain.value,
            acquired_date: domain.acquired_date,
            created_at: NaiveDateTime::default(),
        }
    }
}

impl From<AssetUpdate> for AssetChangeset {
    fn from(domain: AssetUpdate) -> Self {
        Self {
            person_id: domain.person_id,
            name: domain.name,
            description: domain.description,
            value: domain.value,
            acquired_date: domain.acquired_date,
        }
    }
}
