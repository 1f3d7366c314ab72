//! Remote file staging and command execution.
//!
//! The pipeline's working set of stat files lives on a remote host; these
//! modules fetch it into a local working area before processing and push
//! the CSV/chart artifacts back afterwards, verifying every transferred
//! file by checksum. Both capabilities are narrow traits so the core can
//! be exercised with in-memory fakes.

pub mod checksum;
pub mod command;
pub mod scp;

pub use command::{CommandExecutor, ShellExecutor};
pub use scp::{RemoteFileStager, ScpStager};
