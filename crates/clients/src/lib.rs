//! Clients domain module (households owning grocery lists).
//!
//! Password hashing and verification live outside this crate; a client only
//! carries the opaque hash.

pub mod client;
pub mod role;

pub use client::Client;
pub use grocery_core::ClientId;
pub use role::Role;
