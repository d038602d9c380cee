//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// Connection, transaction or statement failure reported by the driver.
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// No list matched the given user and list id.
    #[error("row not found")]
    NotFound,

    /// An update was requested without any field to change.
    #[error("update has no fields to set")]
    EmptyUpdate,

    #[error("invalid table name: '{0}'")]
    InvalidTableName(String),
}
