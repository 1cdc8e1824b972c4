//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Commands that need the engine build a host
//! [`ItemControlManager`](crate::control::ItemControlManager) over the
//! catalog file, exactly as a dedicated host would.

pub mod check;
pub mod context;
pub mod dispatcher;
pub mod init;
pub mod query;
pub mod snapshot;
pub mod watch;

pub use context::{CommandContext, CATALOG_FILE};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
