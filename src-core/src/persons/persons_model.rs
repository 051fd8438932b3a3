use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a person that can own assets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new person
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl NewPerson {
    /// Validates the new person data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Person name cannot be empty".to_string(),
            )));
        }
        if self.email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Person email cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing person. Replaces all mutable fields;
/// a `None` phone clears the stored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonUpdate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl PersonUpdate {
    /// Validates the person update data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Person name cannot be empty".to_string(),
            )));
        }
        if self.email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Person email cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Database model for persons
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::persons)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PersonDB {
    #[diesel(skip_insertion)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
}

/// Changeset applied by update operations. `treat_none_as_null` so a missing
/// phone replaces the stored one instead of being skipped.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::persons)]
#[diesel(treat_none_as_null = true)]
pub struct PersonChangeset {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

// Conversion implementations
impl From<PersonDB> for Person {
    fn from(db: PersonDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            phone: db.phone,
            created_at: db.created_at,
        }
    }
}

impl From<NewPerson> for PersonDB {
    fn from(domain: NewPerson) -> Self {
        Self {
            // id and created_at are assigned by the database
            id: 0,
            name: domain.name,
            email: domain.email,
            phone: domain.phone,
            created_at: NaiveDateTime::default(),
        }
    }
}

impl From<PersonUpdate> for PersonChangeset {
    fn from(domain: PersonUpdate) -> Self {
        Self {
            name: domain.name,
            email: domain.email,
            phone: domain.phone,
        }
    }
}
