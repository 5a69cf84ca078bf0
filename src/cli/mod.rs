//! CLI module for the helper-access toolkit
//!
//! A small debugging front end over the library: it derives helper names and renders accessor expressions exactly as
//! the generator would, so generated code can be checked against expectations by hand.
//!
//! ## Commands
//!
//! - `names <PACKAGE> <OWNER>` - Show public and internal helper names
//! - `get <PACKAGE> <OWNER> <FIELD>` - Render a read expression
//! - `set <PACKAGE> <OWNER> <FIELD> <TARGET> <VALUE>` - Render a write expression
//! - `plan <PACKAGE> <OWNER.FIELD>...` - Record accesses in a session and list the helper methods to emit
//!
//! ## Design
//!
//! Command functions return `CliResult<String>` instead of printing or calling `process::exit`.
//! Only the top-level `run()` function prints, handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{AbsentSeparator, AccessConfig};
use crate::errors::AccessError;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<AccessError> for CliError {
    fn from(err: AccessError) -> Self {
        // Debug-format the report to get miette's rendering with code and help.
        CliError::failure(format!("{:?}", miette::Report::new(err)))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Helper-type names and accessor expressions for package-private fields
#[derive(Parser, Debug)]
#[command(name = "pkgaccess")]
#[command(version = VERSION)]
#[command(about = "Helper-type names and accessor expressions for package-private fields", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Owner type and separator options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct HelperArgs {
    /// Package of the owning type (empty for the default package)
    #[arg(value_name = "PACKAGE")]
    pub package: String,

    /// Simple name of the owning type
    #[arg(value_name = "OWNER")]
    pub owner: String,

    /// Separator between owner name and helper suffix
    #[arg(short, long, value_name = "SEP", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// What to do when no separator is given
    #[arg(long, value_enum, default_value_t = AbsentPolicy::Reject)]
    pub absent_separator: AbsentPolicy,
}

impl HelperArgs {
    pub fn config(&self) -> AccessConfig {
        AccessConfig::new().with_absent_separator(self.absent_separator.into())
    }
}

/// Command-line spelling of [`AbsentSeparator`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsentPolicy {
    Reject,
    Empty,
    Legacy,
}

impl From<AbsentPolicy> for AbsentSeparator {
    fn from(policy: AbsentPolicy) -> Self {
        match policy {
            AbsentPolicy::Reject => AbsentSeparator::Reject,
            AbsentPolicy::Empty => AbsentSeparator::Empty,
            AbsentPolicy::Legacy => AbsentSeparator::LegacyLiteral,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show public and internal helper names
    Names {
        #[command(flatten)]
        helper: HelperArgs,
    },

    /// Render a read expression (short form unless --receiver is given)
    Get {
        #[command(flatten)]
        helper: HelperArgs,
        /// Field name
        #[arg(value_name = "FIELD")]
        field: String,
        /// Receiver expression passed to the getter
        #[arg(short, long, value_name = "EXPR")]
        receiver: Option<String>,
    },

    /// Render a write expression
    Set {
        #[command(flatten)]
        helper: HelperArgs,
        /// Field name
        #[arg(value_name = "FIELD")]
        field: String,
        /// Target expression whose field is written
        #[arg(value_name = "TARGET")]
        target: String,
        /// Value expression
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },

    /// Record field accesses in one session and list the helper methods to emit
    Plan {
        /// Package of every listed owner
        #[arg(value_name = "PACKAGE")]
        package: String,
        /// Accesses as OWNER.FIELD, in request order
        #[arg(value_name = "OWNER.FIELD", required = true)]
        accesses: Vec<String>,
        /// Separator between owner name and helper suffix
        #[arg(short, long, value_name = "SEP", allow_hyphen_values = true)]
        separator: Option<String>,
        /// What to do when no separator is given
        #[arg(long, value_enum, default_value_t = AbsentPolicy::Reject)]
        absent_separator: AbsentPolicy,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return its output.
pub fn execute(cli: Cli) -> CliResult<String> {
    let json = cli.json;
    match cli.command {
        Command::Names { helper } => commands::names(&helper, json),
        Command::Get {
            helper,
            field,
            receiver,
        } => commands::get(&helper, &field, receiver.as_deref(), json),
        Command::Set {
            helper,
            field,
            target,
            value,
        } => commands::set(&helper, &field, &target, &value, json),
        Command::Plan {
            package,
            accesses,
            separator,
            absent_separator,
        } => {
            let config = AccessConfig::new().with_absent_separator(absent_separator.into());
            commands::plan(&config, &package, separator.as_deref(), &accesses, json)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
