//! Command history - every handled utterance is stored in `history.db` next to the config file
//!
//! Used by `habla history` to show what was heard and what happened.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::domain::{ActionResult, Intent, IntentMatch, Utterance};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS commands (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    utterance TEXT NOT NULL,
    intent TEXT NOT NULL,
    argument TEXT,
    result_text TEXT NOT NULL,
    success INTEGER NOT NULL,
    created_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_commands_created ON commands(created_at);
"#;

/// One stored command
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: i64,
    pub utterance: String,
    pub intent: Intent,
    pub argument: Option<String>,
    pub result_text: String,
    pub success: bool,
    pub created_at: DateTime<Utc>,
}

/// SQLite-backed command log
#[derive(Clone)]
pub struct HistoryLog {
    conn: Arc<Mutex<Connection>>,
}

impl HistoryLog {
    /// Open or create the history database at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create history dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open history db: {}", path.display()))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.execute_batch(SCHEMA_SQL)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        // A panic while holding the lock cannot leave SQLite half-written
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store one handled utterance and its outcome
    pub fn record(
        &self,
        utterance: &Utterance,
        command: &IntentMatch,
        result: &ActionResult,
    ) -> Result<()> {
        let now = Utc::now().timestamp_millis();
        self.conn().execute(
            r#"INSERT INTO commands
               (utterance, intent, argument, result_text, success, created_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
            rusqlite::params![
                utterance.as_str(),
                command.intent.to_string(),
                command.argument(),
                result.text,
                result.success as i32,
                now,
            ],
        )?;
        Ok(())
    }

    /// Most recent entries, newest first
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            r#"SELECT id, utterance, intent, argument, result_text, success, created_at
               FROM commands
               ORDER BY created_at DESC, id DESC
               LIMIT ?1"#,
        )?;

        let rows = stmt.query_map([limit as i64], |row| {
            let intent: String = row.get(2)?;
            let created_at: i64 = row.get(6)?;
            Ok(HistoryEntry {
                id: row.get(0)?,
                utterance: row.get(1)?,
                intent: intent.parse().unwrap_or(Intent::Unknown),
                argument: row.get(3)?,
                result_text: row.get(4)?,
                success: row.get::<_, i32>(5)? != 0,
                created_at: DateTime::from_timestamp_millis(created_at).unwrap_or_default(),
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read command history")
    }

    /// Number of stored commands
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn()
            .query_row("SELECT COUNT(*) FROM commands", [], |r| r.get(0))?;
        Ok(count as usize)
    }

    /// Remove all stored commands
    pub fn clear(&self) -> Result<usize> {
        let removed = self.conn().execute("DELETE FROM commands", [])?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests;
