//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod owner_repository;
mod pet_repository;

#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
pub use owner_repository::{FixtureOwnerRepository, OwnerRepository, OwnerRepositoryError};
#[cfg(test)]
pub use pet_repository::MockPetRepository;
pub use pet_repository::{FixturePetRepository, PetRepository, PetRepositoryError};
