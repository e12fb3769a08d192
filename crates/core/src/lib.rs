//! Domain logic for the merchandising back-office.
//!
//! Everything in this crate is free of database and HTTP concerns. The
//! placement engine talks to storage only through the
//! [`placement::PlacementGateway`] trait, which `merch-db` implements.

pub mod error;
pub mod placement;
pub mod types;
