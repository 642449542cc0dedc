//! In-memory persistence adapter.
//!
//! Backs both repository ports with `RwLock`-guarded tables. Owner rows hold
//! scalars only; pets live in their own table keyed by pet id and carry the
//! owner back-reference, so aggregates are reassembled on read through
//! `Owner::add_pet` and the aggregate invariants hold for loaded entities
//! too. Locks are never held across an await point.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{
    OwnerRepository, OwnerRepositoryError, PetRepository, PetRepositoryError,
};
use crate::domain::{Owner, Pet, PetType};

#[derive(Debug, Default)]
struct Tables {
    owners: HashMap<i32, Owner>,
    pets: HashMap<i32, Pet>,
    pet_types: Vec<PetType>,
    next_owner_id: i32,
    next_pet_id: i32,
}

/// Process-local store implementing both customer repository ports.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Tables>,
}

const POISONED: &str = "store lock poisoned";

impl InMemoryStore {
    /// Empty store with no pet type reference data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the standard pet type reference rows.
    pub fn seeded() -> Self {
        let pet_types = ["cat", "dog", "lizard", "snake", "bird", "hamster"]
            .iter()
            .enumerate()
            .map(|(index, name)| PetType {
                id: index as i32 + 1,
                name: (*name).to_owned(),
            })
            .collect();
        Self {
            inner: RwLock::new(Tables {
                pet_types,
                ..Tables::default()
            }),
        }
    }

    fn scalar_row(owner: &Owner) -> Owner {
        let mut row = Owner::new(
            owner.first_name.clone(),
            owner.last_name.clone(),
            owner.address.clone(),
            owner.city.clone(),
            owner.telephone.clone(),
        );
        row.id = owner.id;
        row
    }

    fn assemble(tables: &Tables, id: i32) -> Option<Owner> {
        let mut owner = tables.owners.get(&id).map(Self::scalar_row)?;
        let mut pets: Vec<&Pet> = tables
            .pets
            .values()
            .filter(|pet| pet.owner() == Some(id))
            .collect();
        pets.sort_by_key(|pet| pet.id);
        for pet in pets {
            owner.add_pet(pet.clone());
        }
        Some(owner)
    }
}

#[async_trait]
impl OwnerRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, OwnerRepositoryError> {
        let tables = self
            .inner
            .read()
            .map_err(|_| OwnerRepositoryError::connection(POISONED))?;
        Ok(Self::assemble(&tables, id))
    }

    async fn find_all(&self) -> Result<Vec<Owner>, OwnerRepositoryError> {
        let tables = self
            .inner
            .read()
            .map_err(|_| OwnerRepositoryError::connection(POISONED))?;
        let mut ids: Vec<i32> = tables.owners.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids
            .into_iter()
            .filter_map(|id| Self::assemble(&tables, id))
            .collect())
    }

    async fn save(&self, mut owner: Owner) -> Result<Owner, OwnerRepositoryError> {
        let mut tables = self
            .inner
            .write()
            .map_err(|_| OwnerRepositoryError::connection(POISONED))?;
        let id = match owner.id {
            Some(id) => id,
            None => {
                tables.next_owner_id += 1;
                tables.next_owner_id
            }
        };
        owner.id = Some(id);
        let row = Self::scalar_row(&owner);
        tables.owners.insert(id, row);
        Ok(owner)
    }
}

#[async_trait]
impl PetRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, PetRepositoryError> {
        let tables = self
            .inner
            .read()
            .map_err(|_| PetRepositoryError::connection(POISONED))?;
        Ok(tables.pets.get(&id).cloned())
    }

    async fn save(&self, mut pet: Pet) -> Result<Pet, PetRepositoryError> {
        let mut tables = self
            .inner
            .write()
            .map_err(|_| PetRepositoryError::connection(POISONED))?;
        let id = match pet.id {
            Some(id) => id,
            None => {
                tables.next_pet_id += 1;
                tables.next_pet_id
            }
        };
        pet.id = Some(id);
        tables.pets.insert(id, pet.clone());
        Ok(pet)
    }

    async fn find_pet_types(&self) -> Result<Vec<PetType>, PetRepositoryError> {
        let tables = self
            .inner
            .read()
            .map_err(|_| PetRepositoryError::connection(POISONED))?;
        Ok(tables.pet_types.clone())
    }

    async fn find_pet_type_by_id(&self, id: i32) -> Result<Option<PetType>, PetRepositoryError> {
        let tables = self
            .inner
            .read()
            .map_err(|_| PetRepositoryError::connection(POISONED))?;
        Ok(tables.pet_types.iter().find(|t| t.id == id).cloned())
    }
}
