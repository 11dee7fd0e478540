//! Data access layer repositories.
//!
//! Repositories wrap the SeaORM queries the bootstrap needs, one per table. They only
//! touch the columns they are given so they work against partially patched schemas as
//! long as the patch steps that introduce those columns have already run.

pub mod accounting_connection;
pub mod dancer;
pub mod fee;
pub mod fee_type;
pub mod transaction;

#[cfg(test)]
mod tests;
