//! Command-line front end: `bin2lua <input.png> <output.lua>`.
//!
//! A wrong number of positional arguments is not treated as a failure. The
//! usage line is printed to stdout, nothing on disk is touched, and the
//! process exits normally.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::{convert_file, FileSystem, LiteralOptions, DEFAULT_MAX_LINE_WIDTH, DEFAULT_VARIABLE_NAME};

const DEFAULT_PROGRAM_NAME: &str = "bin2lua";

#[derive(Debug, Parser)]
#[command(name = "bin2lua", version)]
#[command(override_usage = "bin2lua <input.png> <output.lua> [OPTIONS]")]
#[command(about = "Embed a binary file (e.g. a PNG icon) in Lua source as an escaped string literal")]
pub struct CliArgs {
    /// Binary file to embed. Its contents are not validated.
    #[arg(value_name = "input.png", allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Lua file to create or overwrite.
    #[arg(value_name = "output.lua", allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Variable the literal is assigned to.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_VARIABLE_NAME)]
    pub var_name: String,

    /// Maximum counted characters per line before the literal is wrapped.
    #[arg(long, value_name = "COLUMNS", default_value_t = DEFAULT_MAX_LINE_WIDTH)]
    pub max_width: usize,

    /// Log conversion details to stderr.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl CliArgs {
    pub fn literal_options(&self) -> LiteralOptions {
        LiteralOptions::new(self.var_name.clone(), self.max_width)
    }
}

/// What the arguments ask for.
#[derive(Debug)]
pub enum Invocation {
    Convert(CliArgs),
    /// Wrong arguments; carries the usage line.
    Usage(String),
    /// `--help` or `--version`; carries the rendered text.
    Info(String),
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} <input.png> <output.lua>")
}

fn program_name(arg0: Option<&OsString>) -> String {
    arg0.and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// Parses `args`, including the program name in first position.
pub fn parse_args<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(args.first());

    match CliArgs::try_parse_from(&args) {
        Ok(cli_args) => Invocation::Convert(cli_args),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Invocation::Info(e.render().to_string())
            }
            _ => Invocation::Usage(usage(&program)),
        },
    }
}

/// Installs a compact stderr subscriber. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let _ = tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(level)
        .try_init();
}

/// Runs one invocation. Informational text goes to `out`; conversion
/// failures are returned.
pub fn run<I, T, F, W>(args: I, fs: &F, out: &mut W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: FileSystem,
    W: Write,
{
    match parse_args(args) {
        Invocation::Usage(text) => {
            writeln!(out, "{text}").context("Failed to print usage")?;
        }
        Invocation::Info(text) => {
            write!(out, "{text}").context("Failed to print help")?;
        }
        Invocation::Convert(cli_args) => {
            init_tracing(cli_args.verbose);
            let options = cli_args.literal_options();
            tracing::debug!(?options, "starting conversion");

            let stats = convert_file(fs, &cli_args.input, &cli_args.output, &options)
                .with_context(|| {
                    format!("Failed to embed {} as Lua source", cli_args.input.display())
                })?;
            tracing::info!(
                bytes = stats.input_bytes,
                lines = stats.lines,
                "wrote {}",
                cli_args.output.display()
            );
        }
    }

    Ok(())
}
