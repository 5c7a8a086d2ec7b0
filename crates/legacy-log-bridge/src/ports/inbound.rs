//! Inbound Ports (Driving Ports)
//!
//! The legacy logging contract. Callers of the old facade see exactly this
//! surface: six level predicates and twelve emit methods, each level with a
//! message-only and a message-with-cause form.

use std::error::Error;
use std::fmt::Display;

use crate::domain::LegacyLevel;

/// Legacy logging contract (Driving Port)
///
/// Implementations must never fail or panic on any of these calls; whether
/// a record is produced is up to the backend.
pub trait Log: Send + Sync {
    fn is_trace_enabled(&self) -> bool;
    fn is_debug_enabled(&self) -> bool;
    fn is_info_enabled(&self) -> bool;
    fn is_warn_enabled(&self) -> bool;
    fn is_error_enabled(&self) -> bool;
    fn is_fatal_enabled(&self) -> bool;

    fn trace(&self, message: &dyn Display);
    fn trace_with_cause(&self, message: &dyn Display, cause: &(dyn Error + 'static));

    fn debug(&self, message: &dyn Display);
    fn debug_with_cause(&self, message: &dyn Display, cause: &(dyn Error + 'static));

    fn info(&self, message: &dyn Display);
    fn info_with_cause(&self, message: &dyn Display, cause: &(dyn Error + 'static));

    fn warn(&self, message: &dyn Display);
    fn warn_with_cause(&self, message: &dyn Display, cause: &(dyn Error + 'static));

    fn error(&self, message: &dyn Display);
    fn error_with_cause(&self, message: &dyn Display, cause: &(dyn Error + 'static));

    fn fatal(&self, message: &dyn Display);
    fn fatal_with_cause(&self, message: &dyn Display, cause: &(dyn Error + 'static));
}

/// Shape of a contract member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// `is_<level>_enabled(&self) -> bool`
    Predicate,
    /// `<level>(&self, message)`
    Emit,
    /// `<level>_with_cause(&self, message, cause)`
    EmitWithCause,
}

/// One row of the contract table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractMember {
    pub name: &'static str,
    pub kind: MemberKind,
    pub level: LegacyLevel,
}

const fn member(name: &'static str, kind: MemberKind, level: LegacyLevel) -> ContractMember {
    ContractMember { name, kind, level }
}

/// Every member of [`Log`], by name.
pub static LOG_CONTRACT: [ContractMember; 18] = [
    member("is_trace_enabled", MemberKind::Predicate, LegacyLevel::Trace),
    member("is_debug_enabled", MemberKind::Predicate, LegacyLevel::Debug),
    member("is_info_enabled", MemberKind::Predicate, LegacyLevel::Info),
    member("is_warn_enabled", MemberKind::Predicate, LegacyLevel::Warn),
    member("is_error_enabled", MemberKind::Predicate, LegacyLevel::Error),
    member("is_fatal_enabled", MemberKind::Predicate, LegacyLevel::Fatal),
    member("trace", MemberKind::Emit, LegacyLevel::Trace),
    member("trace_with_cause", MemberKind::EmitWithCause, LegacyLevel::Trace),
    member("debug", MemberKind::Emit, LegacyLevel::Debug),
    member("debug_with_cause", MemberKind::EmitWithCause, LegacyLevel::Debug),
    member("info", MemberKind::Emit, LegacyLevel::Info),
    member("info_with_cause", MemberKind::EmitWithCause, LegacyLevel::Info),
    member("warn", MemberKind::Emit, LegacyLevel::Warn),
    member("warn_with_cause", MemberKind::EmitWithCause, LegacyLevel::Warn),
    member("error", MemberKind::Emit, LegacyLevel::Error),
    member("error_with_cause", MemberKind::EmitWithCause, LegacyLevel::Error),
    member("fatal", MemberKind::Emit, LegacyLevel::Fatal),
    member("fatal_with_cause", MemberKind::EmitWithCause, LegacyLevel::Fatal),
];

impl ContractMember {
    /// Look a member up by name.
    pub fn find(name: &str) -> Option<&'static ContractMember> {
        LOG_CONTRACT.iter().find(|m| m.name == name)
    }

    /// Call this member on `log`.
    ///
    /// Predicates return `Some(enabled)`. Emits return `None`; `cause` is
    /// only passed to `*_with_cause` members.
    pub fn invoke(
        &self,
        log: &dyn Log,
        message: &dyn Display,
        cause: &(dyn Error + 'static),
    ) -> Option<bool> {
        use LegacyLevel as L;
        use MemberKind as K;

        match (self.kind, self.level) {
            (K::Predicate, L::Trace) => Some(log.is_trace_enabled()),
            (K::Predicate, L::Debug) => Some(log.is_debug_enabled()),
            (K::Predicate, L::Info) => Some(log.is_info_enabled()),
            (K::Predicate, L::Warn) => Some(log.is_warn_enabled()),
            (K::Predicate, L::Error) => Some(log.is_error_enabled()),
            (K::Predicate, L::Fatal) => Some(log.is_fatal_enabled()),
            (K::Emit, L::Trace) => {
                log.trace(message);
                None
            }
            (K::Emit, L::Debug) => {
                log.debug(message);
                None
            }
            (K::Emit, L::Info) => {
                log.info(message);
                None
            }
            (K::Emit, L::Warn) => {
                log.warn(message);
                None
            }
            (K::Emit, L::Error) => {
                log.error(message);
                None
            }
            (K::Emit, L::Fatal) => {
                log.fatal(message);
                None
            }
            (K::EmitWithCause, L::Trace) => {
                log.trace_with_cause(message, cause);
                None
            }
            (K::EmitWithCause, L::Debug) => {
                log.debug_with_cause(message, cause);
                None
            }
            (K::EmitWithCause, L::Info) => {
                log.info_with_cause(message, cause);
                None
            }
            (K::EmitWithCause, L::Warn) => {
                log.warn_with_cause(message, cause);
                None
            }
            (K::EmitWithCause, L::Error) => {
                log.error_with_cause(message, cause);
                None
            }
            (K::EmitWithCause, L::Fatal) => {
                log.fatal_with_cause(message, cause);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_contract_has_six_predicates_and_twelve_emits() {
        let predicates = LOG_CONTRACT
            .iter()
            .filter(|m| m.kind == MemberKind::Predicate)
            .count();
        let emits = LOG_CONTRACT.len() - predicates;
        assert_eq!(predicates, 6);
        assert_eq!(emits, 12);
    }

    #[test]
    fn test_member_names_unique() {
        let names: HashSet<_> = LOG_CONTRACT.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), LOG_CONTRACT.len());
    }

    #[test]
    fn test_member_names_follow_level() {
        for m in LOG_CONTRACT.iter() {
            let expected = match m.kind {
                MemberKind::Predicate => format!("is_{}_enabled", m.level),
                MemberKind::Emit => m.level.to_string(),
                MemberKind::EmitWithCause => format!("{}_with_cause", m.level),
            };
            assert_eq!(m.name, expected);
        }
    }

    #[test]
    fn test_find() {
        let m = ContractMember::find("fatal_with_cause").unwrap();
        assert_eq!(m.kind, MemberKind::EmitWithCause);
        assert_eq!(m.level, LegacyLevel::Fatal);
        assert!(ContractMember::find("log").is_none());
    }
}
