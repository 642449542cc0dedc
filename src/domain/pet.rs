//! Pet entity and its shared type reference data.

use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable reference data describing a kind of pet.
///
/// Shared by many pets and compared by value; a pet never holds a privately
/// mutated copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetType {
    pub id: i32,
    pub name: String,
}

/// A pet belonging to exactly one [`Owner`](crate::domain::Owner).
///
/// The identifier is `None` until the persistence adapter assigns one on
/// first save. The owner back-reference is navigational only: it is an
/// identifier stamped by [`Owner::add_pet`](crate::domain::Owner::add_pet),
/// never an owning handle.
#[derive(Debug, Clone)]
pub struct Pet {
    pub id: Option<i32>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub pet_type: PetType,
    owner: Option<i32>,
}

impl Pet {
    /// Construct an unpersisted pet with no owner attached yet.
    pub fn new(name: impl Into<String>, birth_date: Option<NaiveDate>, pet_type: PetType) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date,
            pet_type,
            owner: None,
        }
    }

    /// Identifier of the owner this pet belongs to, if any.
    pub fn owner(&self) -> Option<i32> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: Option<i32>) {
        self.owner = owner;
    }
}

// Equality deliberately excludes the pet's own identifier: an unpersisted
// pet compares equal to its freshly saved counterpart. The owner
// back-reference and the value-equal type participate.
impl PartialEq for Pet {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.birth_date == other.birth_date
            && self.pet_type == other.pet_type
            && self.owner == other.owner
    }
}

impl Eq for Pet {}

impl Hash for Pet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.birth_date.hash(state);
        self.pet_type.hash(state);
        self.owner.hash(state);
    }
}
