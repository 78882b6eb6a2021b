// 💾 Preference Store - durable user settings in SQLite
//
// Exactly one preference exists today: the theme flag. It is written on every
// toggle and read once at startup; a missing row means light mode.

use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

const THEME_KEY: &str = "theme";

// ============================================================================
// THEME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored flag. Unknown values fall back to light, same as an
    /// absent row.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// ============================================================================
// DATABASE
// ============================================================================

pub fn setup_database(conn: &Connection) -> Result<()> {
    // WAL keeps the file readable if the app dies mid-write
    conn.pragma_update(None, "journal_mode", "WAL")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS preferences (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

/// Read the theme flag, defaulting to light when never saved
pub fn load_theme(conn: &Connection) -> Result<Theme> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            params![THEME_KEY],
            |row| row.get(0),
        )
        .optional()?;

    Ok(value.as_deref().map(Theme::parse).unwrap_or(Theme::Light))
}

/// Persist the theme flag, overwriting any previous value
pub fn save_theme(conn: &Connection, theme: Theme) -> Result<()> {
    conn.execute(
        "INSERT INTO preferences (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at",
        params![THEME_KEY, theme.as_str(), Utc::now().to_rfc3339()],
    )?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        setup_database(&conn).unwrap();
        conn
    }

    #[test]
    fn test_absent_theme_defaults_to_light() {
        let conn = test_conn();
        assert_eq!(load_theme(&conn).unwrap(), Theme::Light);
    }

    #[test]
    fn test_theme_round_trip() {
        let conn = test_conn();

        save_theme(&conn, Theme::Dark).unwrap();
        assert_eq!(load_theme(&conn).unwrap(), Theme::Dark);

        save_theme(&conn, Theme::Light).unwrap();
        assert_eq!(load_theme(&conn).unwrap(), Theme::Light);
    }

    #[test]
    fn test_repeated_saves_keep_one_row() {
        let conn = test_conn();

        for _ in 0..5 {
            save_theme(&conn, Theme::Dark).unwrap();
        }

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM preferences", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_unknown_stored_value_reads_as_light() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO preferences (key, value, updated_at) VALUES ('theme', 'sepia', '')",
            [],
        )
        .unwrap();

        assert_eq!(load_theme(&conn).unwrap(), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
    }
}
