//! Dog record types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dog record as held by the service.
///
/// The id is assigned by the server; the client never invents one. Each
/// operation sends or fetches a fresh representation, so no copy of this
/// struct is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    /// Server-assigned identifier.
    pub id: i64,
    pub name: String,
    pub breed: String,
}

/// Payload for creating a dog.
///
/// Structurally a [`Dog`] minus the identifier, which is not known until the
/// server assigns one. Having no `id` field at all keeps creation requests
/// unambiguous about resource identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDog {
    pub name: String,
    pub breed: String,
}

impl NewDog {
    /// Create a new creation payload.
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
        }
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is a {}", self.name, self.breed)
    }
}

impl fmt::Display for NewDog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is a {}", self.name, self.breed)
    }
}
