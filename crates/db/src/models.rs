//! Row structs and input payloads for the todo-list tables.
//!
//! These are *persistence* models; validation beyond "is there anything to
//! update" belongs to the caller.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::DbError;

/// A persisted todo list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TodoList {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Payload for creating a list. The id is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodoList {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl NewTodoList {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Ownership link between a user and a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserListLink {
    pub user_id: i64,
    pub list_id: i64,
}

/// Partial update of a list. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateListInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateListInput {
    /// Reject an update that would render an empty SET clause.
    pub fn validate(&self) -> Result<(), DbError> {
        if self.title.is_none() && self.description.is_none() {
            return Err(DbError::EmptyUpdate);
        }
        Ok(())
    }
}
