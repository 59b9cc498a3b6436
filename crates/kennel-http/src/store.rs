//! HTTP-backed dog store.

use async_trait::async_trait;
use tracing::{debug, instrument};

use kennel_core::{BaseUrl, Dog, DogStore, NewDog, Result};

use crate::http::HttpClient;

/// A dog store backed by a REST dog service.
///
/// Holds only the collection URL and an [`HttpClient`]; no state is carried
/// between calls. The service is expected to echo the full record, including
/// the assigned id, from create and update responses.
#[derive(Debug, Clone)]
pub struct HttpDogStore {
    base: BaseUrl,
    client: HttpClient,
}

impl HttpDogStore {
    /// Create a new store for the given collection URL.
    pub fn new(base: BaseUrl) -> Self {
        Self {
            base,
            client: HttpClient::new(),
        }
    }

    /// Returns the collection URL this store is configured for.
    pub fn url(&self) -> &BaseUrl {
        &self.base
    }
}

#[async_trait]
impl DogStore for HttpDogStore {
    #[instrument(skip(self), fields(url = %self.base))]
    async fn list_dogs(&self) -> Result<Vec<Dog>> {
        debug!("listing dogs");
        self.client.get(self.base.as_str()).await
    }

    #[instrument(skip(self), fields(url = %self.base))]
    async fn get_dog(&self, id: i64) -> Result<Dog> {
        debug!(id, "getting dog");
        self.client.get(&self.base.item_url(id)).await
    }

    #[instrument(skip(self, dog), fields(url = %self.base, name = %dog.name))]
    async fn create_dog(&self, dog: &NewDog) -> Result<Dog> {
        debug!("creating dog");
        self.client.post(self.base.as_str(), dog).await
    }

    #[instrument(skip(self, dog), fields(url = %self.base, id = dog.id))]
    async fn update_dog(&self, dog: &Dog) -> Result<Dog> {
        debug!("updating dog");
        self.client.put(&self.base.item_url(dog.id), dog).await
    }

    #[instrument(skip(self), fields(url = %self.base))]
    async fn delete_dog(&self, id: i64) -> Result<()> {
        debug!(id, "deleting dog");
        self.client.delete(self.base.as_str(), id).await
    }
}
