//! SQLite-backed note store.

use entities::Note;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::NoteStoreResult;

/// Payload for inserting a note.
#[derive(Debug, Clone)]
pub struct NewNote {
    /// Note body.
    pub text: String,
}

/// Row shape of the `notes` table.
#[derive(Debug, sqlx::FromRow)]
struct NoteRow {
    id: i64,
    text: String,
    is_completed: bool,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note {
            id: row.id,
            text: row.text,
            is_completed: row.is_completed,
        }
    }
}

/// Note store over a sqlx connection pool.
#[derive(Debug, Clone)]
pub struct NoteStore {
    pool: SqlitePool,
}

impl NoteStore {
    /// Connects to the database and ensures the `notes` table exists.
    pub async fn connect(database_url: &str) -> NoteStoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        tracing::info!(database_url, "Note store connected");
        Ok(store)
    }

    async fn init_schema(&self) -> NoteStoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS notes (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 text TEXT NOT NULL,
                 is_completed BOOLEAN NOT NULL DEFAULT FALSE
             )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Inserts a note and returns it with the table-assigned id.
    pub async fn create(&self, note: NewNote) -> NoteStoreResult<Note> {
        let row: NoteRow = sqlx::query_as(
            "INSERT INTO notes (text) VALUES (?)
             RETURNING id, text, is_completed",
        )
        .bind(&note.text)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(note_id = row.id, "Note created");
        Ok(row.into())
    }

    /// Lists all notes, id ascending.
    pub async fn list(&self) -> NoteStoreResult<Vec<Note>> {
        let rows: Vec<NoteRow> = sqlx::query_as(
            "SELECT id, text, is_completed FROM notes
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    /// Gets a note by id.
    pub async fn get(&self, id: i64) -> NoteStoreResult<Option<Note>> {
        let row: Option<NoteRow> = sqlx::query_as(
            "SELECT id, text, is_completed FROM notes
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Note::from))
    }
}
