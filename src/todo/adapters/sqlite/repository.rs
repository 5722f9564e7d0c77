//! `SQLite` repository implementation for to-do storage.

use super::{
    models::{NewTodoRow, TodoChangesetRow, TodoRow},
    schema::{CREATE_TODOS_TABLE, todos},
};
use crate::todo::{
    domain::{NewTodoItem, PersistedTodoData, TodoId, TodoItem},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;

/// `SQLite` connection pool type used by to-do adapters.
pub type TodoSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// `SQLite`-backed to-do repository.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: TodoSqlitePool,
}

impl SqliteTodoRepository {
    /// Creates a repository from a pool whose database already holds the
    /// `todos` table.
    #[must_use]
    pub const fn new(pool: TodoSqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a fresh in-memory database and creates the `todos` table.
    ///
    /// Every `SQLite` connection to `:memory:` sees its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the pool cannot be
    /// built or the schema cannot be created.
    pub fn in_memory() -> TodoRepositoryResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = Pool::builder()
            .max_size(1)
            .min_idle(Some(1))
            .idle_timeout(None)
            .max_lifetime(None)
            .build(manager)
            .map_err(TodoRepositoryError::persistence)?;

        {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            diesel::sql_query(CREATE_TODOS_TABLE)
                .execute(&mut *connection)
                .map_err(TodoRepositoryError::persistence)?;
        }

        tracing::debug!("opened in-memory SQLite to-do store");
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn find(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(id.value())
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            Ok(row.map(row_to_item))
        })
        .await
    }

    async fn list_all(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        self.run_blocking(|connection| {
            let rows = todos::table
                .order(todos::id.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_item).collect())
        })
        .await
    }

    async fn insert(&self, item: &NewTodoItem) -> TodoRepositoryResult<TodoItem> {
        let new_row = to_new_row(item);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(row_to_item(row))
        })
        .await
    }

    async fn replace(&self, item: &TodoItem) -> TodoRepositoryResult<Option<TodoItem>> {
        let id = item.id();
        let changeset = to_changeset(item);
        self.run_blocking(move |connection| {
            let row = diesel::update(todos::table.find(id.value()))
                .set(&changeset)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            Ok(row.map(row_to_item))
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(todos::table.find(id.value()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn to_new_row(item: &NewTodoItem) -> NewTodoRow {
    NewTodoRow {
        title: item.title().to_owned(),
        description: item.description().map(ToOwned::to_owned),
        created_at: item.created_at().naive_utc(),
    }
}

fn to_changeset(item: &TodoItem) -> TodoChangesetRow {
    TodoChangesetRow {
        title: item.title().to_owned(),
        description: item.description().map(ToOwned::to_owned),
        completed_at: item.completed_at().map(|at| at.naive_utc()),
    }
}

fn row_to_item(row: TodoRow) -> TodoItem {
    let TodoRow {
        id,
        title,
        description,
        created_at,
        completed_at,
    } = row;

    TodoItem::from_persisted(PersistedTodoData {
        id: TodoId::new(id),
        title,
        description,
        created_at: created_at.and_utc(),
        completed_at: completed_at.map(|at| at.and_utc()),
    })
}
