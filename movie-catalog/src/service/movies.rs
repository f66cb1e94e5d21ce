use crate::error::AppError;
use crate::models::{Movie, MovieForm};
use sqlx::SqlitePool;

/// Persistence façade over the movies table.
pub struct MovieService;

impl MovieService {
    /// List movies, optionally narrowed to titles containing `title_filter`
    /// (case-insensitive for ASCII, SQLite LIKE semantics).
    pub async fn list(
        pool: &SqlitePool,
        title_filter: Option<&str>,
    ) -> Result<Vec<Movie>, AppError> {
        let movies = match title_filter.filter(|t| !t.is_empty()) {
            Some(t) => {
                sqlx::query_as::<_, Movie>(
                    r"SELECT id, title, release_date, genre, price FROM movies
                      WHERE title LIKE ? ESCAPE '\' ORDER BY id",
                )
                .bind(format!("%{}%", like_escape(t)))
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Movie>(
                    "SELECT id, title, release_date, genre, price FROM movies ORDER BY id",
                )
                .fetch_all(pool)
                .await?
            }
        };
        Ok(movies)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Movie>, AppError> {
        let movie = sqlx::query_as::<_, Movie>(
            "SELECT id, title, release_date, genre, price FROM movies WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(movie)
    }

    pub async fn create(pool: &SqlitePool, form: &MovieForm) -> Result<Movie, AppError> {
        let result = sqlx::query(
            "INSERT INTO movies (title, release_date, genre, price) VALUES (?, ?, ?, ?)",
        )
        .bind(&form.title)
        .bind(form.release_date)
        .bind(&form.genre)
        .bind(form.price)
        .execute(pool)
        .await?;
        Ok(Movie {
            id: result.last_insert_rowid(),
            title: form.title.clone(),
            release_date: form.release_date,
            genre: form.genre.clone(),
            price: form.price,
        })
    }

    /// Full replace by id. Returns false when no row has that id.
    pub async fn update(pool: &SqlitePool, id: i64, form: &MovieForm) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE movies SET title = ?, release_date = ?, genre = ?, price = ? WHERE id = ?",
        )
        .bind(&form.title)
        .bind(form.release_date)
        .bind(&form.genre)
        .bind(form.price)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove by id. Returns false when no row has that id.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape LIKE metacharacters in user input; pairs with `ESCAPE '\'`.
fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
