//! Command-line interface.
//!
//! `main` parses the arguments first; `--version` and `--help` print and
//! exit before any terminal setup.
//!
//! ```no_run
//! use postpager::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     Ok(CliCommand::Run(options)) => { /* start the TUI */ }
//!     Ok(_) => { /* printed version or help */ }
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, RunOptions};
pub use version::{version_string, USAGE, VERSION};
