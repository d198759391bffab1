//! Audit logging for Budget Shell
//!
//! Every executed mutation (create, update, delete) is appended to a
//! line-delimited JSON log together with before/after snapshots of the
//! entity. Listing accounts is never logged, and neither is parsing.
//!
//! - `AuditEntry`: one logged operation on one entity
//! - `AuditLogger`: appends entries to the log file and reads them back
//! - `generate_diff`: one-line summary of the fields an update changed

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
