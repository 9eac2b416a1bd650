//! Wireframe CLI
//!
//! Headless driver that loads a scene document from disk, converts it and
//! reports the session's UI traffic on stdout.

mod config;
mod runner;

pub use config::{CliArgs, CliConfig};
pub use runner::run;
