//! Fixtures for inserting rows during Phase 2 of a test.

pub mod studio;
