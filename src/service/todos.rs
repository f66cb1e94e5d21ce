use crate::error::AppError;
use crate::models::TodoItem;
use sqlx::SqlitePool;

/// Persistence façade over the todo_items table. Each method is a single
/// query; status-code decisions belong to the handlers.
pub struct TodoService;

impl TodoService {
    /// Insert the default item when the table is empty. Runs ahead of every
    /// request, so the seed row reappears after the last item is deleted.
    pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todo_items")
            .fetch_one(pool)
            .await?;
        if count == 0 {
            tracing::debug!("seeding empty store with Item1");
            sqlx::query("INSERT INTO todo_items (name, is_complete) VALUES ('Item1', 0)")
                .execute(pool)
                .await?;
        }
        Ok(())
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<TodoItem>, AppError> {
        let items = sqlx::query_as::<_, TodoItem>(
            "SELECT id, name, is_complete FROM todo_items ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(items)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<TodoItem>, AppError> {
        let item = sqlx::query_as::<_, TodoItem>(
            "SELECT id, name, is_complete FROM todo_items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(item)
    }

    /// Insert one item. Id 0 means the store assigns the next key; any other
    /// id is stored as given.
    pub async fn create(pool: &SqlitePool, item: TodoItem) -> Result<TodoItem, AppError> {
        let id = if item.id == 0 {
            let result = sqlx::query("INSERT INTO todo_items (name, is_complete) VALUES (?, ?)")
                .bind(&item.name)
                .bind(item.is_complete)
                .execute(pool)
                .await?;
            result.last_insert_rowid()
        } else {
            sqlx::query("INSERT INTO todo_items (id, name, is_complete) VALUES (?, ?, ?)")
                .bind(item.id)
                .bind(&item.name)
                .bind(item.is_complete)
                .execute(pool)
                .await?;
            item.id
        };
        Ok(TodoItem { id, ..item })
    }

    /// Full replace by id. Returns false when no row has that id.
    pub async fn update(pool: &SqlitePool, item: &TodoItem) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE todo_items SET name = ?, is_complete = ? WHERE id = ?")
            .bind(&item.name)
            .bind(item.is_complete)
            .bind(item.id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove by id. Returns false when no row has that id.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
