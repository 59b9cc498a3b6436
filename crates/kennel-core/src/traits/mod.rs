//! Core traits for store backends and observers.

mod observer;
mod store;

pub use observer::DogsObserver;
pub use store::DogStore;
