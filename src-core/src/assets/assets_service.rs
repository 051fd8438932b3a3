use log::debug;
use std::sync::Arc;

use super::assets_model::{Asset, AssetUpdate, NewAsset};
use super::assets_repository::AssetRepository;
use super::assets_traits::AssetServiceTrait;
use crate::errors::Result;

/// Service for managing assets
pub struct AssetService {
    repository: Arc<AssetRepository>,
}

impl AssetService {
    /// Creates a new AssetService instance
    pub fn new(repository: Arc<AssetRepository>) -> Self {
        Self { repository }
    }
}

impl AssetServiceTrait for AssetService {
    fn list_assets(&self) -> Result<Vec<Asset>> {
        self.repository.list()
    }

    fn get_asset(&self, asset_id: i32) -> Result<Asset> {
        self.repository.get_by_id(asset_id)
    }

    fn list_assets_by_person(&self, person_id: i32) -> Result<Vec<Asset>> {
        self.repository.list_by_person(person_id)
    }

    fn create_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        debug!("Creating asset for person {}", new_asset.person_id);
        self.repository.create(new_asset)
    }

    fn update_asset(&self, asset_id: i32, asset_update: AssetUpdate) -> Result<Asset> {
        self.repository.update(asset_id, asset_update)
    }

    fn delete_asset(&self, asset_id: i32) -> Result<()> {
        debug!("Deleting asset {}", asset_id);
        self.repository.delete(asset_id)?;
        Ok(())
    }
}
