use log::debug;
use std::sync::Arc;

use super::persons_model::{NewPerson, Person, PersonUpdate};
use super::persons_repository::PersonRepository;
use super::persons_traits::PersonServiceTrait;
use crate::errors::Result;

/// Service for managing persons
pub struct PersonService {
    repository: Arc<PersonRepository>,
}

impl PersonService {
    /// Creates a new PersonService instance
    pub fn new(repository: Arc<PersonRepository>) -> Self {
        Self { repository }
    }
}

impl PersonServiceTrait for PersonService {
    fn list_persons(&self) -> Result<Vec<Person>> {
        self.repository.list()
    }

    fn get_person(&self, person_id: i32) -> Result<Person> {
        self.repository.get_by_id(person_id)
    }

    fn create_person(&self, new_person: NewPerson) -> Result<Person> {
        debug!("Creating person with email {}", new_person.email);
        self.repository.create(new_person)
    }

    fn update_person(&self, person_id: i32, person_update: PersonUpdate) -> Result<Person> {
        self.repository.update(person_id, person_update)
    }

    fn delete_person(&self, person_id: i32) -> Result<()> {
        debug!("Deleting person {} and owned assets", person_id);
        self.repository.delete(person_id)?;
        Ok(())
    }
}
