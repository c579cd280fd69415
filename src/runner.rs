//! CLI execution and command dispatch logic.
//!
//! This module keeps `main` minimal by providing a single entry point that
//! loads the payload named on the command line and reports on it.

use crate::cli::{Cli, Commands, InputArgs};
use crate::project::Project;
use crate::{load, wire};
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::info;

/// Execute the parsed [`Cli`] command, writing results to `out`.
///
/// # Errors
///
/// Returns an error if the payload cannot be read or decoded, or writing to
/// `out` fails.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Commands::Check(input) => {
            let project = load_input(input)?;
            writeln!(out, "{}", summarise(&project)).context("write summary")?;
        }
        Commands::Dump { input, pretty } => {
            let project = load_input(input)?;
            let bytes = if *pretty {
                wire::encode_pretty(&project)
            } else {
                wire::encode(&project)
            }
            .context("encode project")?;
            out.write_all(&bytes).context("write payload")?;
            writeln!(out).context("write payload")?;
        }
    }
    Ok(())
}

/// Decoder configuration selected by the command-line flags.
#[must_use]
pub const fn decoder_config(input: &InputArgs) -> wire::DecoderConfig {
    if input.strict {
        wire::DecoderConfig::strict()
    } else {
        wire::DecoderConfig {
            unknown_tags: wire::UnknownTagPolicy::Ignore,
        }
    }
}

fn load_input(input: &InputArgs) -> Result<Project> {
    let config = decoder_config(input);
    let project = if input.is_stdin() {
        load::from_reader(io::stdin().lock(), &config)?
    } else {
        load::from_path(&input.file, &config)?
    };
    info!(name = project.name(), strict = input.strict, "decoded project");
    Ok(project)
}

/// One-line description of a decoded project.
#[must_use]
pub fn summarise(project: &Project) -> String {
    format!(
        "{}: {} configuration(s), {} hosted target(s), {} extra file(s), minimum version {}",
        project.name(),
        project.ide_configurations().len(),
        project.target_hosts().values().map(Vec::len).sum::<usize>(),
        project.extra_files().len(),
        project.minimum_tool_version(),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "tests use expect for descriptive failures")]
    use super::*;
    use std::path::PathBuf;

    fn input(strict: bool) -> InputArgs {
        InputArgs {
            file: PathBuf::from("ir.json"),
            strict,
        }
    }

    #[test]
    fn strict_flag_selects_reject_policy() {
        assert_eq!(decoder_config(&input(true)), wire::DecoderConfig::strict());
        assert_eq!(decoder_config(&input(false)), wire::DecoderConfig::default());
    }

    #[test]
    fn summary_counts_hosted_targets() {
        let payload = br#"{"n":"App","B":"Debug","g":"//:generator","R":"//:runner","m":"14","i":"ii","x":["Debug","Release"],"t":{"app":["ext","widget"]}}"#;
        let project = wire::decode(payload).expect("decode");
        assert_eq!(
            summarise(&project),
            "App: 2 configuration(s), 2 hosted target(s), 0 extra file(s), minimum version 14.0.0"
        );
    }
}
