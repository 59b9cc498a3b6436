//! Walkthrough flow exercising every store operation.

use tracing::info;

use crate::Result;
use crate::dog::NewDog;
use crate::traits::{DogStore, DogsObserver};

/// Run the create, read, update, delete, list sequence against a store.
///
/// Each step awaits the previous one. The first failure aborts the rest of
/// the sequence and propagates to the caller; steps already performed are not
/// rolled back. On success the fetched collection is handed to `observer`
/// exactly once.
pub async fn run<S, O>(store: &S, observer: &O) -> Result<()>
where
    S: DogStore + ?Sized,
    O: DogsObserver + ?Sized,
{
    let created = store
        .create_dog(&NewDog::new("Clarice", "Whippet"))
        .await?;
    info!(id = created.id, "created dog");

    let mut dog = store.get_dog(1).await?;
    info!(%dog, "first dog");

    dog.name = "Moo".to_string();
    dog.breed = "Cow".to_string();
    let _ = store.update_dog(&dog).await?;

    store.delete_dog(2).await?;

    let dogs = store.list_dogs().await?;
    for dog in &dogs {
        info!(%dog, "fetched dog");
    }

    observer.dogs_loaded(dogs);
    Ok(())
}
