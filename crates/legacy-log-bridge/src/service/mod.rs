//! Service Layer
//!
//! - `LogAdapter`: implements the legacy `Log` contract over a backend logger
//! - `LogFactory`: resolves adapters by name

pub mod adapter;
pub mod factory;

pub use adapter::LogAdapter;
pub use factory::LogFactory;
