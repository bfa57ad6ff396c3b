use super::{now, Result};
use crate::models::{EvaluationResult, NoteEntry};
use rusqlite::{Connection, OptionalExtension, Row};

/// A finished, evaluated note-making session.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedNoteSession {
    pub id: i64,
    pub topic: String,
    pub time_limit_minutes: u32,
    pub sections: Vec<NoteEntry>,
    pub compiled_notes: String,
    pub evaluation: EvaluationResult,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteSessionSummary {
    pub id: i64,
    pub topic: String,
    pub created_at: i64,
}

pub fn save_note_session(
    conn: &Connection,
    topic: &str,
    time_limit_minutes: u32,
    sections: &[NoteEntry],
    compiled_notes: &str,
    evaluation: &EvaluationResult,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO note_sessions (topic, time_limit_minutes, sections, compiled_notes, evaluation, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
        rusqlite::params![
            topic,
            time_limit_minutes,
            serde_json::to_string(sections)?,
            compiled_notes,
            serde_json::to_string(evaluation)?,
            now()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_note_sessions(conn: &Connection, limit: usize) -> Result<Vec<NoteSessionSummary>> {
    let mut stmt = conn.prepare(
        "SELECT id, topic, created_at FROM note_sessions
         ORDER BY created_at DESC, id DESC LIMIT ?",
    )?;

    let sessions = stmt
        .query_map([limit as i64], |row| {
            Ok(NoteSessionSummary {
                id: row.get(0)?,
                topic: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(sessions)
}

struct RawSession {
    id: i64,
    topic: String,
    time_limit_minutes: u32,
    sections: String,
    compiled_notes: String,
    evaluation: String,
    created_at: i64,
}

fn raw_from_row(row: &Row<'_>) -> rusqlite::Result<RawSession> {
    Ok(RawSession {
        id: row.get(0)?,
        topic: row.get(1)?,
        time_limit_minutes: row.get(2)?,
        sections: row.get(3)?,
        compiled_notes: row.get(4)?,
        evaluation: row.get(5)?,
        created_at: row.get(6)?,
    })
}

pub fn get_note_session(conn: &Connection, id: i64) -> Result<Option<SavedNoteSession>> {
    let raw = conn
        .query_row(
            "SELECT id, topic, time_limit_minutes, sections, compiled_notes, evaluation, created_at
             FROM note_sessions WHERE id = ?",
            [id],
            raw_from_row,
        )
        .optional()?;

    let Some(raw) = raw else {
        return Ok(None);
    };

    Ok(Some(SavedNoteSession {
        id: raw.id,
        topic: raw.topic,
        time_limit_minutes: raw.time_limit_minutes,
        sections: serde_json::from_str(&raw.sections)?,
        compiled_notes: raw.compiled_notes,
        evaluation: serde_json::from_str(&raw.evaluation)?,
        created_at: raw.created_at,
    }))
}

pub fn delete_note_session(conn: &Connection, id: i64) -> Result<bool> {
    let deleted = conn.execute("DELETE FROM note_sessions WHERE id = ?", [id])?;
    Ok(deleted > 0)
}
