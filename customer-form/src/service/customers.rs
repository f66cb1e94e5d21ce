use crate::error::AppError;
use crate::models::Customer;
use sqlx::SqlitePool;

/// Persistence façade over the customers table.
pub struct CustomerService;

impl CustomerService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Customer>, AppError> {
        let customers =
            sqlx::query_as::<_, Customer>("SELECT id, name FROM customers ORDER BY id")
                .fetch_all(pool)
                .await?;
        Ok(customers)
    }

    pub async fn create(pool: &SqlitePool, name: &str) -> Result<Customer, AppError> {
        let result = sqlx::query("INSERT INTO customers (name) VALUES (?)")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(Customer {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }
}
