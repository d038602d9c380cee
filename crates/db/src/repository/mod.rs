//! Repository layer — the [`TodoListStore`] and the trait it implements.
//!
//! Every operation takes the owning user's id and returns a
//! `Result<T, DbError>`. No business logic, pure SQL.

pub mod set_clause;
pub mod todo_lists;

pub use set_clause::SetClause;
pub use todo_lists::{TodoListRepository, TodoListStore};
