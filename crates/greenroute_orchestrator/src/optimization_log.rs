use std::fmt::Display;

use jiff::{Timestamp, tz::TimeZone};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Process,
    Success,
    Error,
}

impl Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            LogKind::Info => "info",
            LogKind::Process => "process",
            LogKind::Success => "success",
            LogKind::Error => "error",
        })
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,

    /// Wall-clock time the entry was appended
    pub timestamp: Timestamp,
}

impl LogEntry {
    pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            timestamp: Timestamp::now(),
        }
    }

    /// `HH:MM:SS` in the system time zone.
    pub fn local_time(&self) -> String {
        self.timestamp
            .to_zoned(TimeZone::system())
            .strftime("%H:%M:%S")
            .to_string()
    }
}

/// Append-only, chronological log of one optimization cycle.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct OptimizationLog {
    entries: Vec<LogEntry>,
}

impl OptimizationLog {
    pub fn push(&mut self, kind: LogKind, message: impl Into<String>) {
        self.entries.push(LogEntry::new(kind, message));
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn count(&self, kind: LogKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }
}
