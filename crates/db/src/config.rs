//! Table-name configuration for [`crate::TodoListStore`].
//!
//! Table names cannot be bound as query parameters, so they are spliced into
//! the SQL text. They are validated once here, at construction.

use crate::DbError;

pub const DEFAULT_LISTS_TABLE: &str = "todo_lists";
pub const DEFAULT_USERS_LISTS_TABLE: &str = "users_lists";

/// Names of the two tables the store reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    lists: String,
    users_lists: String,
}

impl TableNames {
    /// Build a validated pair of table names.
    ///
    /// Each name must be a plain SQL identifier (`[A-Za-z_][A-Za-z0-9_]*`),
    /// optionally qualified by a schema (`schema.table`).
    pub fn new(lists: impl Into<String>, users_lists: impl Into<String>) -> Result<Self, DbError> {
        let lists = lists.into();
        let users_lists = users_lists.into();
        validate_table_name(&lists)?;
        validate_table_name(&users_lists)?;
        Ok(Self { lists, users_lists })
    }

    pub fn lists(&self) -> &str {
        &self.lists
    }

    pub fn users_lists(&self) -> &str {
        &self.users_lists
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            lists: DEFAULT_LISTS_TABLE.to_string(),
            users_lists: DEFAULT_USERS_LISTS_TABLE.to_string(),
        }
    }
}

fn validate_table_name(name: &str) -> Result<(), DbError> {
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > 2 || !parts.iter().all(|part| is_identifier(part)) {
        return Err(DbError::InvalidTableName(name.to_string()));
    }
    Ok(())
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
