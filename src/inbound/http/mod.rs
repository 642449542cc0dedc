//! HTTP inbound adapter exposing the customer REST endpoints.

pub mod error;
pub mod health;
pub mod owners;
pub mod pets;
pub mod state;
pub mod validation;

pub use error::ApiResult;
