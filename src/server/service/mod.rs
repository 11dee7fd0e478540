//! Services run by the startup bootstrap once the schema patches are in place.
//!
//! - `dancer` - brings dancer levels and birthdates to their canonical form
//! - `backfill` - copies legacy fees into the transaction ledger
//! - `seed` - inserts the fee type catalog and accounting connection stubs

pub mod backfill;
pub mod dancer;
pub mod seed;
