use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::{assets, persons};

use super::assets_model::{Asset, AssetChangeset, AssetDB, AssetUpdate, NewAsset};

/// Repository for managing asset rows in the database. All reads go through
/// the owner join so `person_name` is recomputed on every access.
pub struct AssetRepository {
    pool: Arc<DbPool>,
}

impl AssetRepository {
    /// Creates a new AssetRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Creates a new asset and returns the stored row enriched with the
    /// owner's name.
    pub fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;

        let asset_db: AssetDB = new_asset.into();
        let owner_id = asset_db.person_id;

        let inserted = {
            let mut conn = get_connection(&self.pool)?;
            diesel::insert_into(assets::table)
                .values(&asset_db)
                .returning(AssetDB::as_returning())
                .get_result::<AssetDB>(&mut conn)
                .map_err(|e| map_owner_fk_violation(e, owner_id))?
        };

        self.get_by_id(inserted.id)
    }

    /// Replaces all mutable fields of an existing asset and returns the
    /// updated row enriched with the owner's name.
    pub fn update(&self, asset_id: i32, asset_update: AssetUpdate) -> Result<Asset> {
        asset_update.validate()?;

        let changeset: AssetChangeset = asset_update.into();
        let owner_id = changeset.person_id;

        {
            let mut conn = get_connection(&self.pool)?;
            let affected = diesel::update(assets::table.find(asset_id))
                .set(&changeset)
                .execute(&mut conn)
                .map_err(|e| map_owner_fk_violation(e, owner_id))?;

            if affected == 0 {
                return Err(Error::NotFound(format!(
                    "Asset with id {} not found",
                    asset_id
                )));
            }
        }

        self.get_by_id(asset_id)
    }

    /// Retrieves an asset by its ID, joined with the owner's name
    pub fn get_by_id(&self, asset_id: i32) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;

        assets::table
            .inner_join(persons::table)
            .filter(assets::id.eq(asset_id))
            .select((AssetDB::as_select(), persons::name))
            .first::<(AssetDB, String)>(&mut conn)
            .map(Asset::from)
            .map_err(|e| match e {
                DieselError::NotFound => {
                    Error::NotFound(format!("Asset with id {} not found", asset_id))
                }
                other => other.into(),
            })
    }

    /// Lists all assets joined with their owners' names, most recently
    /// created first
    pub fn list(&self) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        assets::table
            .inner_join(persons::table)
            .select((AssetDB::as_select(), persons::name))
            .order(assets::created_at.desc())
            .load::<(AssetDB, String)>(&mut conn)
            .map(|rows| rows.into_iter().map(Asset::from).collect())
            .map_err(Into::into)
    }

    /// Lists the assets owned by a given person, most recently created first
    pub fn list_by_person(&self, person_id: i32) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        assets::table
            .inner_join(persons::table)
            .filter(assets::person_id.eq(person_id))
            .select((AssetDB::as_select(), persons::name))
            .order(assets::created_at.desc())
            .load::<(AssetDB, String)>(&mut conn)
            .map(|rows| rows.into_iter().map(Asset::from).collect())
            .map_err(Into::into)
    }

    /// Deletes an asset by its ID
    pub fn delete(&self, asset_id: i32) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::delete(assets::table.find(asset_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Asset with id {} not found",
                asset_id
            )));
        }

        Ok(affected)
    }
}

// Callers are expected to confirm the owner exists before writing; the
// foreign key backs that up when they race with a person delete.
fn map_owner_fk_violation(e: DieselError, owner_id: i32) -> Error {
    match &e {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            Error::NotFound(format!("Person with id {} not found", owner_id))
        }
        DieselError::DatabaseError(_, info) if info.message().contains("FOREIGN KEY") => {
            Error::NotFound(format!("Person with id {} not found", owner_id))
        }
        _ => e.into(),
    }
}
