//! `db` crate — persistence layer for todo lists.
//!
//! Provides a connection pool, typed row structs, and [`TodoListStore`], the
//! repository that owns every query against the lists and user-link tables.
//! No HTTP or authentication concerns live here.

pub mod config;
pub mod error;
pub mod models;
pub mod pool;
pub mod repository;

pub use config::TableNames;
pub use error::DbError;
pub use models::{NewTodoList, TodoList, UpdateListInput, UserListLink};
pub use pool::DbPool;
pub use repository::{TodoListRepository, TodoListStore};
