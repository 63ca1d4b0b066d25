//! Command-line interface.
//!
//! [`run`] holds all command logic and works on caller-supplied streams so
//! tests can drive it without touching the process's stdio.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, info, LevelFilter};
use sift_filter::check::check_at_most_one;
use sift_filter::{Boundary, ExistenceFilter, FilterSpec, MatchMode, RangeFilter};

use crate::config::{load_spec, render_spec};

/// Filter ordered lists of lines by range markers and patterns.
#[derive(Debug, Parser)]
#[command(name = "sift", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter lines from a file or stdin
    Filter(FilterArgs),

    /// Validate a spec file and print its normalized form
    Check {
        /// Spec file to validate
        #[arg(long)]
        spec: PathBuf,
    },

    /// Convert a YAML table (a list of rows) into CSV
    Yaml2csv {
        /// YAML file to read
        origin: PathBuf,
        /// CSV file to write
        target: PathBuf,
    },
}

#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Input file; stdin when omitted
    pub input: Option<PathBuf>,

    /// Read the filter spec from a YAML file
    #[arg(long)]
    pub spec: Option<PathBuf>,

    /// Range start: an index, or a pattern (repeat for several)
    #[arg(long, allow_hyphen_values = true)]
    pub start: Vec<String>,

    /// Range end: an index (0 = end of input), or a pattern (repeat for several)
    #[arg(long, allow_hyphen_values = true)]
    pub end: Vec<String>,

    /// Keep the line that closes the range
    #[arg(long)]
    pub include_end: bool,

    /// Keep only lines matching one of these patterns
    #[arg(long)]
    pub include: Vec<String>,

    /// Drop lines matching one of these patterns
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Treat patterns as regular expressions anchored at line start
    #[arg(long)]
    pub regex: bool,
}

impl FilterArgs {
    fn has_inline_spec(&self) -> bool {
        !self.start.is_empty()
            || !self.end.is_empty()
            || self.include_end
            || !self.include.is_empty()
            || !self.exclude.is_empty()
            || self.regex
    }

    /// Builds the spec described by the inline options, if any.
    pub fn inline_spec(&self) -> Result<Option<FilterSpec>> {
        if !self.has_inline_spec() {
            return Ok(None);
        }

        let mode = MatchMode::from_regex_flag(self.regex);
        let range = if !self.start.is_empty() || !self.end.is_empty() || self.include_end {
            Some(
                RangeFilter::builder()
                    .start(parse_boundary(&self.start)?)
                    .end(parse_boundary(&self.end)?)
                    .include_end(self.include_end)
                    .mode(mode)
                    .build()?,
            )
        } else {
            None
        };

        let existence = |patterns: &[String]| -> Result<Option<ExistenceFilter>> {
            if patterns.is_empty() {
                Ok(None)
            } else {
                Ok(Some(ExistenceFilter::new(patterns.iter().cloned(), mode)?))
            }
        };

        let spec = FilterSpec::new(range, existence(&self.include)?, existence(&self.exclude)?)?;
        Ok(Some(spec))
    }

    /// Resolves the spec from `--spec` or the inline options.
    ///
    /// Both at once is an error; neither means no filtering.
    pub fn resolve_spec(&self) -> Result<Option<FilterSpec>> {
        check_at_most_one(&[
            ("--spec", self.spec.is_some()),
            ("inline filter options", self.has_inline_spec()),
        ])?;

        match &self.spec {
            Some(path) => Ok(Some(load_spec(path)?)),
            None => self.inline_spec(),
        }
    }
}

/// Reads a boundary from repeated command-line values.
///
/// No values is the default literal `0`; a single integer is a literal
/// index; anything else is a pattern set.
fn parse_boundary(values: &[String]) -> Result<Boundary> {
    match values {
        [] => Ok(Boundary::default()),
        [single] => match single.parse::<i64>() {
            Ok(index) => Ok(Boundary::Literal(index)),
            Err(_) => Ok(Boundary::from(single.as_str())),
        },
        many => Ok(Boundary::patterns(many.iter().cloned())?),
    }
}

/// Maps `-v` occurrences to a log level.
pub fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes logging. `RUST_LOG`, when set, takes precedence over `-v`.
pub fn init_logging(verbose: u8) {
    let default = log_level(verbose).as_str().to_ascii_lowercase();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Executes a parsed command.
///
/// `input` is read only by `filter` when no input file is given.
pub fn run(cli: &Cli, input: &mut dyn Read, output: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Filter(args) => run_filter(args, input, output)?,
        Command::Check { spec } => {
            let parsed =
                load_spec(spec).with_context(|| format!("checking {}", spec.display()))?;
            write!(output, "{}", render_spec(&parsed)?)?;
        }
        Command::Yaml2csv { origin, target } => {
            sift_files::yaml_to_csv(origin, target).with_context(|| {
                format!("converting {} to {}", origin.display(), target.display())
            })?;
            info!("wrote {}", target.display());
        }
    }

    output.flush()?;
    Ok(())
}

fn run_filter(args: &FilterArgs, input: &mut dyn Read, output: &mut dyn Write) -> Result<()> {
    let spec = args.resolve_spec()?;

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            input.read_to_string(&mut buffer).context("reading stdin")?;
            buffer
        }
    };

    let lines: Vec<&str> = text.lines().collect();
    debug!("read {} lines", lines.len());

    for line in sift_filter::filter_sequence(&lines, spec.as_ref()) {
        writeln!(output, "{line}")?;
    }
    Ok(())
}
