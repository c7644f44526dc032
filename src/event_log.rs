//! Optional JSON Lines log of game events.
//!
//! One record per line, tagged by `event`:
//!
//! ```text
//! {"event":"session_start","seed":42,"randomizer":"uniform","drop_interval_ms":1000}
//! {"event":"lock","kind":"T","lines_cleared":1,"score_delta":100,"score":300}
//! {"event":"game_over","score":300,"lines":3}
//! ```

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::LockEvent;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart {
        seed: u64,
        randomizer: &'static str,
        drop_interval_ms: u32,
    },
    Lock(LockEvent),
    Paused,
    Resumed,
    GameOver {
        score: u32,
        lines: u32,
    },
    Reset,
}

/// Append-only event sink. A disabled log swallows records.
pub struct EventLog {
    file: Option<File>,
    buf: Vec<u8>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self {
            file: None,
            buf: Vec::new(),
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open event log {}", path.display()))?;
        Ok(Self {
            file: Some(file),
            buf: Vec::with_capacity(256),
        })
    }

    /// `open` when a path is configured, otherwise a disabled log.
    pub fn from_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => Ok(Self::disabled()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Write one record. On a write error the log disables itself.
    pub fn record(&mut self, record: &LogRecord) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if file.write_all(&self.buf).is_err() {
            self.file = None;
        }
    }
}
