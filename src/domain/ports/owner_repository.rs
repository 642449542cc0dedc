//! Port abstraction for owner persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::Owner;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by owner repository adapters.
    pub enum OwnerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "owner repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "owner repository query failed: {message}",
    }
}

/// Port for owner aggregate persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Fetch an owner aggregate, pets included, by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, OwnerRepositoryError>;

    /// Fetch every known owner in whatever order the adapter provides.
    async fn find_all(&self) -> Result<Vec<Owner>, OwnerRepositoryError>;

    /// Persist an owner, assigning an identifier on first save.
    async fn save(&self, owner: Owner) -> Result<Owner, OwnerRepositoryError>;
}

/// Fixture implementation for tests that do not exercise owner persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOwnerRepository;

#[async_trait]
impl OwnerRepository for FixtureOwnerRepository {
    async fn find_by_id(&self, _id: i32) -> Result<Option<Owner>, OwnerRepositoryError> {
        Ok(None)
    }

    async fn find_all(&self) -> Result<Vec<Owner>, OwnerRepositoryError> {
        Ok(Vec::new())
    }

    async fn save(&self, mut owner: Owner) -> Result<Owner, OwnerRepositoryError> {
        if owner.id.is_none() {
            owner.id = Some(1);
        }
        Ok(owner)
    }
}
