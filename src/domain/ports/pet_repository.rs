//! Port abstraction for pet persistence adapters and their errors.
//!
//! The pet port also serves the [`PetType`] reference data: types are
//! read-only lookup rows resolved by identifier, never created through this
//! boundary.

use async_trait::async_trait;

use crate::domain::{Pet, PetType};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by pet repository adapters.
    pub enum PetRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "pet repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "pet repository query failed: {message}",
    }
}

/// Port for pet persistence and pet type lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Fetch a pet by its own identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, PetRepositoryError>;

    /// Persist a pet, assigning an identifier on first save.
    async fn save(&self, pet: Pet) -> Result<Pet, PetRepositoryError>;

    /// All known pet types, in the order the adapter provides them.
    async fn find_pet_types(&self) -> Result<Vec<PetType>, PetRepositoryError>;

    /// Resolve a pet type by identifier.
    async fn find_pet_type_by_id(&self, id: i32) -> Result<Option<PetType>, PetRepositoryError>;
}

/// Fixture implementation for tests that do not exercise pet persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePetRepository;

#[async_trait]
impl PetRepository for FixturePetRepository {
    async fn find_by_id(&self, _id: i32) -> Result<Option<Pet>, PetRepositoryError> {
        Ok(None)
    }

    async fn save(&self, mut pet: Pet) -> Result<Pet, PetRepositoryError> {
        if pet.id.is_none() {
            pet.id = Some(1);
        }
        Ok(pet)
    }

    async fn find_pet_types(&self) -> Result<Vec<PetType>, PetRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_pet_type_by_id(&self, _id: i32) -> Result<Option<PetType>, PetRepositoryError> {
        Ok(None)
    }
}
