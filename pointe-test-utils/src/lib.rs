//! Test utilities for the Pointe workspace.
//!
//! Tests run in two phases. Phase 1 declares the schema with [`TestBuilder`]; phase 2 uses
//! the resulting [`TestContext`] and its fixtures to insert rows and exercise the code
//! under test against an in-memory SQLite database.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::studio::factory, TestBuilder, TestContext, TestError};
}
