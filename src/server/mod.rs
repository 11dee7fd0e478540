//! Server-side core of the Pointe studio back office.
//!
//! This module holds everything the host process runs before it serves traffic: reading
//! configuration, connecting to the database and bootstrapping the schema. The bootstrap
//! applies baseline migrations and incremental patches, normalizes dancer profiles,
//! backfills the transaction ledger from legacy fees and seeds reference data.

pub mod bootstrap;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
