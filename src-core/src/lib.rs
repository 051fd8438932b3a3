pub mod db;

pub mod assets;
pub mod persons;

pub mod errors;
pub mod schema;

pub use errors::{Error, Result};
