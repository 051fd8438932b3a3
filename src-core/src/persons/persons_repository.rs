use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::persons;

use super::persons_model::{NewPerson, Person, PersonChangeset, PersonDB, PersonUpdate};

const EMAIL_CONFLICT: &str = "A person with this email already exists";

/// Repository for managing person rows in the database
pub struct PersonRepository {
    pool: Arc<DbPool>,
}

impl PersonRepository {
    /// Creates a new PersonRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Creates a new person; the id and creation timestamp are assigned by
    /// the database and returned with the row.
    pub fn create(&self, new_person: NewPerson) -> Result<Person> {
        new_person.validate()?;

        let person_db: PersonDB = new_person.into();
        let mut conn = get_connection(&self.pool)?;

        diesel::insert_into(persons::table)
            .values(&person_db)
            .returning(PersonDB::as_returning())
            .get_result::<PersonDB>(&mut conn)
            .map(Person::from)
            .map_err(map_email_conflict)
    }

    /// Replaces all mutable fields of an existing person and returns the
    /// updated row.
    pub fn update(&self, person_id: i32, person_update: PersonUpdate) -> Result<Person> {
        person_update.validate()?;

        let mut conn = get_connection(&self.pool)?;
        let changeset: PersonChangeset = person_update.into();

        diesel::update(persons::table.find(person_id))
            .set(&changeset)
            .returning(PersonDB::as_returning())
            .get_result::<PersonDB>(&mut conn)
            .map(Person::from)
            .map_err(|e| match e {
                DieselError::NotFound => {
                    Error::NotFound(format!("Person with id {} not found", person_id))
                }
                other => map_email_conflict(other),
            })
    }

    /// Retrieves a person by its ID
    pub fn get_by_id(&self, person_id: i32) -> Result<Person> {
        let mut conn = get_connection(&self.pool)?;

        persons::table
            .find(person_id)
            .first::<PersonDB>(&mut conn)
            .map(Person::from)
            .map_err(|e| match e {
                DieselError::NotFound => {
                    Error::NotFound(format!("Person with id {} not found", person_id))
                }
                other => other.into(),
            })
    }

    /// Lists all persons, most recently created first
    pub fn list(&self) -> Result<Vec<Person>> {
        let mut conn = get_connection(&self.pool)?;

        persons::table
            .order(persons::created_at.desc())
            .load::<PersonDB>(&mut conn)
            .map(|results| results.into_iter().map(Person::from).collect())
            .map_err(Into::into)
    }

    /// Deletes a person by its ID; owned assets go with it via the cascading
    /// foreign key.
    pub fn delete(&self, person_id: i32) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::delete(persons::table.find(person_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Person with id {} not found",
                person_id
            )));
        }

        Ok(affected)
    }
}

fn map_email_conflict(e: DieselError) -> Error {
    match e {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            Error::ConstraintViolation(EMAIL_CONFLICT.to_string())
        }
        other => other.into(),
    }
}
