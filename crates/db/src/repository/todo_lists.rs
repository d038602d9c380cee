//! Todo list CRUD operations, scoped by the owning user.
//!
//! Lists live in one table and ownership in a user-to-list join table.
//! Writes that touch both tables run inside a single transaction which is
//! rolled back explicitly on the first failure.

use async_trait::async_trait;
use sqlx::{Any, Transaction};
use tracing::{debug, info, instrument, warn};

use crate::{
    DbError, DbPool, TableNames,
    models::{NewTodoList, TodoList, UpdateListInput},
    repository::SetClause,
};

/// Operations the HTTP layer needs from list storage.
#[async_trait]
pub trait TodoListRepository: Send + Sync {
    /// Insert a list and link it to `user_id`. Returns the new list id.
    async fn create(&self, user_id: i64, list: &NewTodoList) -> Result<i64, DbError>;

    /// All lists linked to `user_id`, ordered by id.
    async fn get_all(&self, user_id: i64) -> Result<Vec<TodoList>, DbError>;

    /// A single list owned by `user_id`, or [`DbError::NotFound`].
    async fn get_by_id(&self, user_id: i64, list_id: i64) -> Result<TodoList, DbError>;

    /// Delete a list owned by `user_id` together with its link row.
    ///
    /// Returns [`DbError::NotFound`] when the user owns no such list; the
    /// list row is never deleted by id alone.
    async fn delete(&self, user_id: i64, list_id: i64) -> Result<(), DbError>;

    /// Apply a partial update to a list owned by `user_id`.
    ///
    /// Returns [`DbError::EmptyUpdate`] without touching the database when
    /// `input` carries no field.
    async fn update(&self, user_id: i64, list_id: i64, input: &UpdateListInput)
        -> Result<(), DbError>;
}

/// Postgres/SQLite-backed implementation of [`TodoListRepository`].
///
/// Cloning is cheap; the pool handle is shared.
#[derive(Debug, Clone)]
pub struct TodoListStore {
    pool: DbPool,
    tables: TableNames,
}

impl TodoListStore {
    /// Store over the default `todo_lists` / `users_lists` tables.
    pub fn new(pool: DbPool) -> Self {
        Self::with_tables(pool, TableNames::default())
    }

    pub fn with_tables(pool: DbPool, tables: TableNames) -> Self {
        Self { pool, tables }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn tables(&self) -> &TableNames {
        &self.tables
    }

    async fn insert_list_with_link(
        &self,
        tx: &mut Transaction<'_, Any>,
        user_id: i64,
        list: &NewTodoList,
    ) -> Result<i64, DbError> {
        let id = sqlx::query_scalar::<_, i64>(&format!(
            "INSERT INTO {} (title, description) VALUES ($1, $2) RETURNING id",
            self.tables.lists()
        ))
        .bind(list.title.as_str())
        .bind(list.description.as_str())
        .fetch_one(&mut **tx)
        .await?;

        sqlx::query(&format!(
            "INSERT INTO {} (user_id, list_id) VALUES ($1, $2)",
            self.tables.users_lists()
        ))
        .bind(user_id)
        .bind(id)
        .execute(&mut **tx)
        .await?;

        Ok(id)
    }

    async fn delete_owned_list(
        &self,
        tx: &mut Transaction<'_, Any>,
        user_id: i64,
        list_id: i64,
    ) -> Result<(), DbError> {
        let deleted = sqlx::query(&format!(
            "DELETE FROM {} WHERE id IN (SELECT list_id FROM {} WHERE user_id = $1 AND list_id = $2)",
            self.tables.lists(),
            self.tables.users_lists()
        ))
        .bind(user_id)
        .bind(list_id)
        .execute(&mut **tx)
        .await?;

        if deleted.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        // Already gone when the link table cascades; still required otherwise.
        sqlx::query(&format!(
            "DELETE FROM {} WHERE user_id = $1 AND list_id = $2",
            self.tables.users_lists()
        ))
        .bind(user_id)
        .bind(list_id)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    fn select_owned_sql(&self) -> String {
        format!(
            "SELECT tl.id, tl.title, tl.description FROM {} tl \
             INNER JOIN {} ul ON tl.id = ul.list_id \
             WHERE ul.user_id = $1",
            self.tables.lists(),
            self.tables.users_lists()
        )
    }
}

/// Commit on success; otherwise roll back and hand back the original error.
async fn finish<T>(
    tx: Transaction<'_, Any>,
    result: Result<T, DbError>,
) -> Result<T, DbError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!(error = %rollback_err, "transaction rollback failed");
            }
            Err(err)
        }
    }
}

#[async_trait]
impl TodoListRepository for TodoListStore {
    #[instrument(skip(self, list))]
    async fn create(&self, user_id: i64, list: &NewTodoList) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;
        let result = self.insert_list_with_link(&mut tx, user_id, list).await;
        let id = finish(tx, result).await?;

        info!(list_id = id, "created todo list");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_all(&self, user_id: i64) -> Result<Vec<TodoList>, DbError> {
        let sql = format!("{} ORDER BY tl.id", self.select_owned_sql());
        let lists = sqlx::query_as::<_, TodoList>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(lists)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, user_id: i64, list_id: i64) -> Result<TodoList, DbError> {
        let sql = format!("{} AND ul.list_id = $2", self.select_owned_sql());
        let list = sqlx::query_as::<_, TodoList>(&sql)
            .bind(user_id)
            .bind(list_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound)?;

        Ok(list)
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: i64, list_id: i64) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;
        let result = self.delete_owned_list(&mut tx, user_id, list_id).await;
        finish(tx, result).await?;

        info!("deleted todo list");
        Ok(())
    }

    #[instrument(skip(self, input))]
    async fn update(
        &self,
        user_id: i64,
        list_id: i64,
        input: &UpdateListInput,
    ) -> Result<(), DbError> {
        input.validate()?;

        let clause = SetClause::from(input);
        let (assignments, next) = clause.render();
        let sql = format!(
            "UPDATE {} AS tl SET {} FROM {} AS ul \
             WHERE tl.id = ul.list_id AND ul.list_id = ${} AND ul.user_id = ${}",
            self.tables.lists(),
            assignments,
            self.tables.users_lists(),
            next,
            next + 1
        );
        debug!(query = %sql, params = clause.len() + 2, "update todo list");

        let mut query = sqlx::query(&sql);
        for value in clause.values() {
            query = query.bind(value);
        }
        let updated = query
            .bind(list_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if updated.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        Ok(())
    }
}
