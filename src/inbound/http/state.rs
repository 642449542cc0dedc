//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{OwnerRepository, PetRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub owners: Arc<dyn OwnerRepository>,
    pub pets: Arc<dyn PetRepository>,
}

impl HttpState {
    /// Bundle repository ports for injection into the Actix app.
    pub fn new(owners: Arc<dyn OwnerRepository>, pets: Arc<dyn PetRepository>) -> Self {
        Self { owners, pets }
    }
}
