//! v001 -- Initial schema creation.
//!
//! A single `collections` table: one row per logical collection (`users`,
//! `messages`, `tasks:<userId>`), holding the whole JSON document.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS collections (
    key        TEXT PRIMARY KEY NOT NULL,   -- logical collection name
    value      TEXT NOT NULL,               -- JSON array document
    updated_at TEXT NOT NULL                -- ISO-8601 / RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
