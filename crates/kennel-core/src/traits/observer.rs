//! Observer seam for the externally-visible dog collection.

use crate::dog::Dog;

/// Receives the dog collection after a successful bulk fetch.
///
/// The implementor decides where the update is applied; a UI layer with a
/// main-thread contract performs the hop to its main context inside
/// [`dogs_loaded`](DogsObserver::dogs_loaded).
pub trait DogsObserver: Send + Sync {
    /// Called exactly once per successful bulk-fetch flow.
    fn dogs_loaded(&self, dogs: Vec<Dog>);
}

impl<F> DogsObserver for F
where
    F: Fn(Vec<Dog>) + Send + Sync,
{
    fn dogs_loaded(&self, dogs: Vec<Dog>) {
        self(dogs)
    }
}
