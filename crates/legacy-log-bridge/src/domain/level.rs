//! Legacy levels, backend severities and the fixed mapping between them.
//!
//! The legacy facade knows six levels. The structured backend knows five.
//! `Fatal` has no backend counterpart and collapses onto `Error`: both the
//! predicate (`is_fatal_enabled`) and the emit calls (`fatal`,
//! `fatal_with_cause`) go to error severity.
//!
//! ## Invariants
//!
//! - **LEVEL-MAP**: every legacy level appears exactly once in [`LEVEL_MAP`]
//! - **FATAL-COLLAPSE**: `LegacyLevel::Fatal.severity() == Severity::Error`

use std::fmt;

/// Levels of the legacy logging contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LegacyLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Severities understood by the structured backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Verbose debugging information
    Trace,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
}

/// Legacy level to backend severity. `Fatal` collapses onto `Error`.
pub const LEVEL_MAP: [(LegacyLevel, Severity); 6] = [
    (LegacyLevel::Trace, Severity::Trace),
    (LegacyLevel::Debug, Severity::Debug),
    (LegacyLevel::Info, Severity::Info),
    (LegacyLevel::Warn, Severity::Warn),
    (LegacyLevel::Error, Severity::Error),
    (LegacyLevel::Fatal, Severity::Error),
];

impl LegacyLevel {
    /// All legacy levels, lowest first.
    pub const ALL: [LegacyLevel; 6] = [
        LegacyLevel::Trace,
        LegacyLevel::Debug,
        LegacyLevel::Info,
        LegacyLevel::Warn,
        LegacyLevel::Error,
        LegacyLevel::Fatal,
    ];

    /// Backend severity this level is emitted at.
    pub const fn severity(self) -> Severity {
        // Table order matches discriminant order.
        LEVEL_MAP[self as usize].1
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LegacyLevel::Trace => "trace",
            LegacyLevel::Debug => "debug",
            LegacyLevel::Info => "info",
            LegacyLevel::Warn => "warn",
            LegacyLevel::Error => "error",
            LegacyLevel::Fatal => "fatal",
        }
    }
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Trace => tracing::Level::TRACE,
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warn => tracing::Level::WARN,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}

impl From<LegacyLevel> for Severity {
    fn from(level: LegacyLevel) -> Self {
        level.severity()
    }
}

impl fmt::Display for LegacyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
