pub mod commands;

pub use commands::{Cli, Outcome, exit_status_for, run};
