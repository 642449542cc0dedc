//! Outbound adapters behind the domain ports.

pub mod persistence;
