//! CLI module for newsdeck.
//!
//! Called early in main() to handle flags before the TUI starts:
//!
//! ```ignore
//! use newsdeck::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Version => handle_version_command(),
//!     CliCommand::Help => handle_help_command(),
//!     CliCommand::RunTui(overrides) => { /* start the TUI */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand, CliOverrides};
pub use version::{handle_version_command, VERSION};

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    print!("{}", usage());
    std::process::exit(0)
}
