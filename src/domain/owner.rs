//! Owner aggregate root.
//!
//! The owner exclusively holds its pets; the collection is only reachable
//! through [`Owner::add_pet`] and [`Owner::pets`], which together keep the
//! aggregate invariants true:
//!
//! - every pet stored here carries this owner's identifier as its
//!   back-reference, and
//! - the externally observable pet list is sorted ascending by name with
//!   ties left in arrival order.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::domain::Pet;

/// A pet owner and the aggregate of pets they own.
///
/// The identifier is `None` until the persistence adapter assigns one.
#[derive(Debug, Clone, Default)]
pub struct Owner {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pets: Vec<Pet>,
}

impl Owner {
    /// Construct an unpersisted owner with no pets.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            telephone: telephone.into(),
            pets: Vec::new(),
        }
    }

    /// Insert a pet into the aggregate and stamp its back-reference.
    ///
    /// This is the single mutation point for the pet collection. Re-adding a
    /// pet that is already present under the same persisted identifier
    /// overwrites that entry in place rather than duplicating it. Returns the
    /// pet as stored, back-reference applied, so callers can hand it straight
    /// to the persistence port.
    pub fn add_pet(&mut self, mut pet: Pet) -> Pet {
        pet.set_owner(self.id);
        match pet.id {
            Some(id) => {
                if let Some(existing) = self
                    .pets
                    .iter_mut()
                    .find(|stored| stored.id == Some(id))
                {
                    *existing = pet.clone();
                } else {
                    self.pets.push(pet.clone());
                }
            }
            None => self.pets.push(pet.clone()),
        }
        pet
    }

    /// The pet list sorted ascending by name, arrival order on ties.
    ///
    /// Pure and restartable: repeated calls over unchanged state yield the
    /// same ordering. The underlying storage has no intrinsic order.
    pub fn pets(&self) -> Vec<&Pet> {
        let mut pets: Vec<&Pet> = self.pets.iter().collect();
        pets.sort_by(|a, b| a.name.cmp(&b.name));
        pets
    }
}

// Equality and hashing cover the identifier and scalar fields only; the pet
// collection does not participate.
impl PartialEq for Owner {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.address == other.address
            && self.city == other.city
            && self.telephone == other.telephone
    }
}

impl Eq for Owner {}

impl Hash for Owner {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.first_name.hash(state);
        self.last_name.hash(state);
        self.address.hash(state);
        self.city.hash(state);
        self.telephone.hash(state);
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Owner[id={},lastName={},firstName={},address={},city={},telephone={}]",
            self.id.map_or_else(|| "new".to_owned(), |id| id.to_string()),
            self.last_name,
            self.first_name,
            self.address,
            self.city,
            self.telephone,
        )
    }
}
