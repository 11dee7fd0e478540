//! Utility functions shared by the bootstrap and its services.
//!
//! `legacy` turns free-form values from pre-ledger tables into typed values with silent
//! fallbacks, and `dedupe` provides the insert-if-absent filter the backfill relies on.

pub mod dedupe;
pub mod legacy;
