use super::assets_model::{Asset, AssetUpdate, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset service operations.
pub trait AssetServiceTrait: Send + Sync {
    fn list_assets(&self) -> Result<Vec<Asset>>;
    fn get_asset(&self, asset_id: i32) -> Result<Asset>;
    fn list_assets_by_person(&self, person_id: i32) -> Result<Vec<Asset>>;
    fn create_asset(&self, new_asset: NewAsset) -> Result<Asset>;
    fn update_asset(&self, asset_id: i32, asset_update: AssetUpdate) -> Result<Asset>;
    fn delete_asset(&self, asset_id: i32) -> Result<()>;
}
