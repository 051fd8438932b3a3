// Module declarations
pub(crate) mod persons_model;
pub(crate) mod persons_repository;
pub(crate) mod persons_service;
pub(crate) mod persons_traits;

// Re-export the public interface
pub use persons_model::{NewPerson, Person, PersonDB, PersonUpdate};
pub use persons_repository::PersonRepository;
pub use persons_service::PersonService;
pub use persons_traits::PersonServiceTrait;
