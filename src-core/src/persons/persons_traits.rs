use super::persons_model::{NewPerson, Person, PersonUpdate};
use crate::errors::Result;

/// Trait defining the contract for Person service operations.
pub trait PersonServiceTrait: Send + Sync {
    fn list_persons(&self) -> Result<Vec<Person>>;
    fn get_person(&self, person_id: i32) -> Result<Person>;
    fn create_person(&self, new_person: NewPerson) -> Result<Person>;
    fn update_person(&self, person_id: i32, person_update: PersonUpdate) -> Result<Person>;
    fn delete_person(&self, person_id: i32) -> Result<()>;
}
