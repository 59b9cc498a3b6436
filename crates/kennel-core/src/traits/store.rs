//! Dog store trait.

use async_trait::async_trait;

use crate::Result;
use crate::dog::{Dog, NewDog};

/// A backend holding dog records.
///
/// Each method is a single asynchronous unit of work; the store imposes no
/// ordering across independent calls. Callers that need "create, then read"
/// semantics await each operation before issuing the next.
#[async_trait]
pub trait DogStore: Send + Sync {
    /// Fetch every dog in the store.
    async fn list_dogs(&self) -> Result<Vec<Dog>>;

    /// Fetch a single dog by id.
    async fn get_dog(&self, id: i64) -> Result<Dog>;

    /// Create a dog. The returned record carries the assigned id.
    async fn create_dog(&self, dog: &NewDog) -> Result<Dog>;

    /// Replace an existing dog, matched by `dog.id`.
    async fn update_dog(&self, dog: &Dog) -> Result<Dog>;

    /// Delete a dog by id.
    async fn delete_dog(&self, id: i64) -> Result<()>;
}
