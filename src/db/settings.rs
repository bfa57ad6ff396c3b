use super::{now, Result};
use crate::models::Theme;
use rusqlite::{Connection, OptionalExtension};

const THEME_KEY: &str = "theme";

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM settings WHERE key = ?", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        rusqlite::params![key, value, now()],
    )?;
    Ok(())
}

/// The saved theme, if any. Unknown values are treated as unset.
pub fn load_theme(conn: &Connection) -> Result<Option<Theme>> {
    Ok(get_setting(conn, THEME_KEY)?.as_deref().and_then(Theme::parse))
}

pub fn save_theme(conn: &Connection, theme: Theme) -> Result<()> {
    set_setting(conn, THEME_KEY, theme.as_str())
}
