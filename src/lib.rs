//! sshwrap: run ssh with per-host hooks and stored sshpass credentials.
//!
//! The wrapper takes exactly the arguments ssh would, finds the connection
//! target among them, and runs `~/.ssh/pre.d/<target>` and
//! `~/.ssh/post.d/<target>` around the real client. If
//! `~/.ssh/sshpass/<target>` exists, the client is started through
//! `sshpass -e` with the file's contents in `SSHPASS`.

pub mod args;
pub mod config;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod orchestrator;
pub mod runner;

pub use error::WrapperError;
