//! Error types for the Pointe server.
//!
//! `Error` aggregates configuration failures and database errors into one type so every
//! startup step can propagate with `?`. Nothing in the bootstrap catches an error: the first
//! failure aborts startup and the next run resumes from whatever was already applied.

pub mod config;

use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Main error type for the Pointe server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (connection issues, failed DDL, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

#[cfg(test)]
impl From<Error> for pointe_test_utils::TestError {
    fn from(err: Error) -> Self {
        match err {
            Error::DbErr(e) => pointe_test_utils::TestError::DbErr(e),
            other => pointe_test_utils::TestError::DbErr(sea_orm::DbErr::Custom(other.to_string())),
        }
    }
}
