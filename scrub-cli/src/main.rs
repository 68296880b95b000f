//! `scrub`: redact sensitive fields in a JSON file.
//!
//! ```text
//! scrub sensitive_fields.txt input.json [--output output.json]
//! ```

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use scrub::{
    files::{self, OutputStyle},
    Redactor, ScalarRedactionPolicy, ScrubError, BOOLEAN_MARKER, DEFAULT_MASK_CHAR,
};
use slog::{debug, error, info, o, Drain, Level, Logger};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text file listing sensitive field names, one per line or comma separated.
    sensitive_fields: Option<PathBuf>,
    /// JSON document to redact.
    input: Option<PathBuf>,
    /// Where to write the redacted document; `-` writes to stdout.
    #[arg(long, short, default_value = "output.json")]
    output: PathBuf,
    /// Write the document on a single line.
    #[arg(long, default_value_t = false)]
    compact: bool,
    /// Character written over letters and digits.
    #[arg(long, default_value_t = DEFAULT_MASK_CHAR)]
    mask_char: char,
    /// Replacement for sensitive booleans.
    #[arg(long, default_value = BOOLEAN_MARKER)]
    boolean_marker: String,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::Info,
            1 => Level::Debug,
            _ => Level::Trace,
        }
    }

    fn output_style(&self) -> OutputStyle {
        if self.compact {
            OutputStyle::Compact
        } else {
            OutputStyle::Pretty
        }
    }
}

fn build_logger(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = drain.filter_level(level).fuse();
    Logger::root(drain, o!("app" => "scrub"))
}

fn run(args: &Args, log: &Logger) -> scrub::Result<()> {
    let (Some(fields_path), Some(input_path)) = (&args.sensitive_fields, &args.input) else {
        return Err(ScrubError::MissingArguments);
    };

    let fields = files::load_field_set(fields_path)?;
    let field_names: Vec<&str> = fields.iter().collect();
    debug!(log, "loaded sensitive fields";
        "path" => %fields_path.display(),
        "fields" => ?field_names);

    let document = files::load_document(input_path)?;
    debug!(log, "parsed document"; "path" => %input_path.display());

    let policy = ScalarRedactionPolicy::new()
        .with_mask_char(args.mask_char)
        .with_boolean_marker(args.boolean_marker.clone());
    let redactor = Redactor::new(fields).with_policy(policy);
    let (redacted, report) = redactor.redact_with_report(document);

    files::write_document(&args.output, &redacted, args.output_style())?;
    info!(log, "wrote redacted document";
        "output" => %args.output.display(),
        "nodes" => report.nodes_visited,
        "redacted" => report.scalars_redacted,
        "max_depth" => report.max_depth);
    Ok(())
}

fn exit_code(err: &ScrubError) -> ExitCode {
    match err {
        ScrubError::MissingArguments => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let log = build_logger(args.log_level());

    match run(&args, &log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(log, "{}", err; "code" => err.code());
            exit_code(&err)
        }
    }
}
