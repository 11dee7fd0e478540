//! Domain models shared by the bootstrap, services and repositories.
//!
//! Database rows are represented by the SeaORM models of the `entity` crate; the types
//! here describe values that are computed before they become rows, such as normalized
//! dancer levels, ledger entries derived from legacy fees and the reference catalog.

pub mod dancer;
pub mod ledger;
pub mod reference;
