//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - the legacy logging contract
//! - Driven Ports (outbound) - the structured logging backend

pub mod inbound;
pub mod outbound;

pub use inbound::{ContractMember, Log, MemberKind, LOG_CONTRACT};
pub use outbound::{BackendLogger, LoggerProvider};
