//! Domain primitives and the customer aggregate.
//!
//! Purpose: define the Owner/Pet aggregate and the ports the resource layer
//! depends on. Types document their invariants in Rustdoc; the aggregate
//! raises no errors of its own.
//!
//! Public surface:
//! - Owner — aggregate root owning its pets.
//! - Pet / PetType — entity plus shared reference data.
//! - Error / ErrorCode — transport-agnostic failure taxonomy.
//! - ports — repository traits consumed by inbound adapters.

pub mod error;
pub mod owner;
pub mod pet;
pub mod ports;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::owner::Owner;
pub use self::pet::{Pet, PetType};
