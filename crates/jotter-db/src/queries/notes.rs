use chrono::Utc;
use rusqlite::{params, Row};

use jotter_core::note::{Note, NoteDraft};

use crate::{Db, DbError};

fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        body: row.get("body")?,
        created_at: row.get("created_at")?,
    })
}

impl Db {
    /// Insert a validated draft, assigning the id and creation timestamp.
    pub fn insert_note(&self, draft: &NoteDraft) -> Result<Note, DbError> {
        self.with_conn(|conn| {
            let now = Utc::now();
            conn.execute(
                "INSERT INTO notes (title, body, created_at) VALUES (?1, ?2, ?3)",
                params![draft.title, draft.body, now],
            )?;
            let id = conn.last_insert_rowid();
            let note = conn.query_row(
                "SELECT * FROM notes WHERE id = ?1",
                params![id],
                row_to_note,
            )?;
            Ok(note)
        })
    }

    pub fn get_note(&self, id: i64) -> Result<Note, DbError> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT * FROM notes WHERE id = ?1",
                params![id],
                row_to_note,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("note {id}")),
                other => DbError::Sqlite(other),
            })
        })
    }

    /// All notes in insertion order.
    pub fn list_notes(&self) -> Result<Vec<Note>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT * FROM notes ORDER BY id")?;
            let notes = stmt
                .query_map([], row_to_note)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(notes)
        })
    }

    pub fn count_notes(&self) -> Result<i64, DbError> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}
