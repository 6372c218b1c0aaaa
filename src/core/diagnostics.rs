// src/core/diagnostics.rs

use colored::*;
use std::fmt;

/// Severity of a diagnostic. Each level has a fixed textual prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Informational. Reserved for collaborators; the engine never emits it.
    Log,
    /// Something was accepted, but probably not what the user meant.
    Warning,
    /// A value was rejected and the default was kept.
    Error,
}

impl Level {
    /// The prefix printed in front of every message of this level.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Log => "LOG:",
            Self::Warning => "WARNING:",
            Self::Error => "ERROR:",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Receives the user-facing diagnostics produced while parsing.
pub trait DiagnosticSink {
    /// Records one message.
    fn report(&mut self, level: Level, message: &str);

    /// Shorthand for `report(Level::Log, ..)`.
    fn log(&mut self, message: &str) {
        self.report(Level::Log, message);
    }

    /// Shorthand for `report(Level::Warning, ..)`.
    fn warning(&mut self, message: &str) {
        self.report(Level::Warning, message);
    }

    /// Shorthand for `report(Level::Error, ..)`.
    fn error(&mut self, message: &str) {
        self.report(Level::Error, message);
    }
}

/// Writes diagnostics to stderr as `PREFIX message` and mirrors them into the `log` facade.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, level: Level, message: &str) {
        let prefix = match level {
            Level::Log => level.prefix().dimmed(),
            Level::Warning => level.prefix().yellow().bold(),
            Level::Error => level.prefix().red().bold(),
        };
        eprintln!("{} {}", prefix, message);

        match level {
            Level::Log => log::info!("{}", message),
            Level::Warning => log::warn!("{}", message),
            Level::Error => log::error!("{}", message),
        }
    }
}

/// Keeps every diagnostic in memory. Useful for embedding and for tests.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    entries: Vec<(Level, String)>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded diagnostics, oldest first.
    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Messages recorded at `level`.
    pub fn messages(&self, level: Level) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    /// Renders every entry as `PREFIX message`, one per line.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(level, message)| format!("{} {}\n", level, message))
            .collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&mut self, level: Level, message: &str) {
        self.entries.push((level, message.to_string()));
    }
}
