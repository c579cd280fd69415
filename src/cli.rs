//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure and its subcommands. It is also
//! compiled by the build script to render the manual page, so it depends on
//! nothing else in the crate.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and validate project IR payloads.
#[derive(Debug, Parser)]
#[command(name = "projgen", author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every subcommand that reads a payload.
#[derive(Debug, Args, PartialEq, Eq, Clone)]
pub struct InputArgs {
    /// IR payload to read; `-` reads standard input.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Reject tags the schema does not define.
    #[arg(long)]
    pub strict: bool,
}

impl InputArgs {
    /// Whether the payload comes from standard input.
    #[must_use]
    pub fn is_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}

/// Available top-level commands.
#[derive(Debug, Subcommand, PartialEq, Eq, Clone)]
pub enum Commands {
    /// Decode a payload and print a one-line summary.
    Check(InputArgs),

    /// Decode a payload and print its canonical encoding.
    Dump {
        /// Payload to read.
        #[command(flatten)]
        input: InputArgs,

        /// Indent the output.
        #[arg(long)]
        pretty: bool,
    },
}
