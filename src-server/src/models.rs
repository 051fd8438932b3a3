use assetledger_core::{assets as core_assets, persons as core_persons};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<core_persons::Person> for Person {
    fn from(p: core_persons::Person) -> Self {
        Self {
            id: p.id,
            name: p.name,
            email: p.email,
            phone: p.phone,
            created_at: p.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
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

impl From<core_assets::Asset> for Asset {
    fn from(a: core_assets::Asset) -> Self {
        Self {
            id: a.id,
            person_id: a.person_id,
            name: a.name,
            description: a.description,
            value: a.value,
            acquired_date: a.acquired_date,
            created_at: a.created_at,
            person_name: a.person_name,
        }
    }
}

/// Request body for creating or replacing a person. Fields are optional at
/// the parsing stage so a missing field is reported as a 400 instead of a
/// deserialization rejection.
#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
pub struct PersonPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl PersonPayload {
    fn required_fields(self) -> Result<(String, String, Option<String>), ApiError> {
        match (self.name, self.email) {
            (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {
                Ok((name, email, self.phone))
            }
            _ => Err(ApiError::BadRequest(
                "Name and email are required".to_string(),
            )),
        }
    }

    pub fn into_new_person(self) -> Result<core_persons::NewPerson, ApiError> {
        let (name, email, phone) = self.required_fields()?;
        Ok(core_persons::NewPerson { name, email, phone })
    }

    pub fn into_person_update(self) -> Result<core_persons::PersonUpdate, ApiError> {
        let (name, email, phone) = self.required_fields()?;
        Ok(core_persons::PersonUpdate { name, email, phone })
    }
}

/// Request body for creating or replacing an asset.
#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
pub struct AssetPayload {
    pub person_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub acquired_date: Option<NaiveDate>,
}

impl AssetPayload {
    fn required_fields(self) -> Result<AssetFields, ApiError> {
        match (self.person_id, self.name, self.value, self.acquired_date) {
            (Some(person_id), Some(name), Some(value), Some(acquired_date))
                if !name.is_empty() =>
            {
                Ok(AssetFields {
                    person_id,
                    name,
                    description: self.description,
                    value,
                    acquired_date,
                })
            }
            _ => Err(ApiError::BadRequest(
                "Person ID, name, value, and acquired date are required".to_string(),
            )),
        }
    }

    pub fn into_new_asset(self) -> Result<core_assets::NewAsset, ApiError> {
        let f = self.required_fields()?;
        Ok(core_assets::NewAsset {
            person_id: f.person_id,
            name: f.name,
            description: f.description,
            value: f.value,
            acquired_date: f.acquired_date,
        })
    }

    pub fn into_asset_update(self) -> Result<core_assets::AssetUpdate, ApiError> {
        let f = self.required_fields()?;
        Ok(core_assets::AssetUpdate {
            person_id: f.person_id,
            name: f.name,
            description: f.description,
            value: f.value,
            acquired_date: f.acquired_date,
        })
    }
}

struct AssetFields {
    person_id: i32,
    name: String,
    description: Option<String>,
    value: f64,
    acquired_date: NaiveDate,
}

/// Body returned by delete endpoints.
#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
