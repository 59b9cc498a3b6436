//! kennel-core - Core types and traits for the kennel dog-service client.

pub mod demo;
pub mod dog;
pub mod error;
pub mod traits;
pub mod types;

pub use dog::{Dog, NewDog};
pub use error::{Error, TransportError};
pub use traits::{DogStore, DogsObserver};
pub use types::{BaseUrl, join_id};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
