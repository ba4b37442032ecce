//! SQL query layer for the snippet store.
//!
//! All queries are single round trips: a parameterized insert, a point
//! lookup by id, and a small newest-first listing. Expiry is enforced in
//! the queries themselves, so expired rows are unqueryable without being
//! deleted.

use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use cortex_core::{NewSnippet, Snippet};

/// Maximum number of snippets returned by [`SnippetStore::latest`].
pub const LATEST_LIMIT: i64 = 10;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS snippets (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    title   TEXT NOT NULL,
    content TEXT NOT NULL,
    created TEXT NOT NULL,
    expires TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_snippets_created ON snippets(created);
";

/// Snippet store over a SQLite connection pool.
#[derive(Clone)]
pub struct SnippetStore {
    pool: SqlitePool,
}

impl SnippetStore {
    /// Connect to the database at `url` and ensure the schema exists.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new().connect(url).await?;
        Self::with_pool(pool).await
    }

    /// Wrap an existing pool, ensuring the schema exists.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::raw_sql(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Persist a validated snippet and return its assigned id.
    ///
    /// Creation time is now (UTC); expiry is creation plus the validated
    /// number of days.
    pub async fn insert(&self, snippet: &NewSnippet) -> Result<i64, sqlx::Error> {
        let created = Utc::now();
        let expires = created + chrono::Duration::days(snippet.expires_days);

        let result = sqlx::query(
            "INSERT INTO snippets (title, content, created, expires) VALUES (?, ?, ?, ?)",
        )
        .bind(&snippet.title)
        .bind(&snippet.content)
        .bind(created)
        .bind(expires)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Fetch an unexpired snippet by id.
    ///
    /// Returns `Ok(None)` when no such row exists or its expiry has
    /// passed; the two cases are indistinguishable by design.
    pub async fn get(&self, id: i64) -> Result<Option<Snippet>, sqlx::Error> {
        sqlx::query_as::<_, Snippet>(
            "SELECT id, title, content, created, expires FROM snippets \
             WHERE expires > ? AND id = ?",
        )
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// List the most recently created unexpired snippets, newest first.
    pub async fn latest(&self) -> Result<Vec<Snippet>, sqlx::Error> {
        sqlx::query_as::<_, Snippet>(
            "SELECT id, title, content, created, expires FROM snippets \
             WHERE expires > ? ORDER BY id DESC LIMIT ?",
        )
        .bind(Utc::now())
        .bind(LATEST_LIMIT)
        .fetch_all(&self.pool)
        .await
    }
}
