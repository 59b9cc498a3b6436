//! In-memory dog storage.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use kennel_core::{Dog, DogStore, Error, NewDog, Result};

/// An in-memory dog store.
///
/// Behaves like a dog service with the network removed: ids are assigned
/// sequentially on create, and operations on unknown ids fail with
/// `Error::BadStatus(404)`, matching what a REST backend returns.
///
/// Cloning the store shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct MemDogStore {
    inner: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    last_id: i64,
    dogs: BTreeMap<i64, Dog>,
}

impl MemDogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `dogs`.
    ///
    /// The id sequence resumes after the highest seeded id.
    pub fn with_dogs(dogs: impl IntoIterator<Item = Dog>) -> Self {
        let dogs: BTreeMap<i64, Dog> = dogs.into_iter().map(|d| (d.id, d)).collect();
        let last_id = dogs.keys().next_back().copied().unwrap_or(0);

        Self {
            inner: Arc::new(Mutex::new(State { last_id, dogs })),
        }
    }

    /// Create a store seeded with the fixture kennel.
    pub fn seeded() -> Self {
        Self::with_dogs([
            Dog {
                id: 1,
                name: "Comet".to_string(),
                breed: "Whippet".to_string(),
            },
            Dog {
                id: 2,
                name: "Oscar".to_string(),
                breed: "Labrador".to_string(),
            },
            Dog {
                id: 3,
                name: "Snoopy".to_string(),
                breed: "Beagle".to_string(),
            },
        ])
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.inner.lock().expect("dog store lock poisoned")
    }
}

#[async_trait]
impl DogStore for MemDogStore {
    async fn list_dogs(&self) -> Result<Vec<Dog>> {
        Ok(self.lock().dogs.values().cloned().collect())
    }

    async fn get_dog(&self, id: i64) -> Result<Dog> {
        self.lock().dogs.get(&id).cloned().ok_or(Error::BadStatus(404))
    }

    async fn create_dog(&self, dog: &NewDog) -> Result<Dog> {
        let mut state = self.lock();
        state.last_id += 1;

        let dog = Dog {
            id: state.last_id,
            name: dog.name.clone(),
            breed: dog.breed.clone(),
        };
        debug!(id = dog.id, "stored dog");

        state.dogs.insert(dog.id, dog.clone());
        Ok(dog)
    }

    async fn update_dog(&self, dog: &Dog) -> Result<Dog> {
        let mut state = self.lock();
        if !state.dogs.contains_key(&dog.id) {
            return Err(Error::BadStatus(404));
        }

        state.dogs.insert(dog.id, dog.clone());
        Ok(dog.clone())
    }

    async fn delete_dog(&self, id: i64) -> Result<()> {
        self.lock()
            .dogs
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::BadStatus(404))
    }
}
