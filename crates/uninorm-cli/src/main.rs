use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use uninorm_core::{Error, NormalizationForm, NormalizeOptions, Normalizer, Report};

mod logging;

use logging::LogLevel;

/// uninorm — rewrite a text file in a single Unicode normalization form
///
/// Reads INPUT as UTF-8, normalizes it, and writes the result to OUTPUT
/// (or back to INPUT when OUTPUT is omitted).
#[derive(Parser)]
#[command(name = "uninorm", version, about, long_about = None)]
struct Cli {
    /// File to normalize
    input: PathBuf,

    /// Destination file (default: rewrite INPUT in place)
    output: Option<PathBuf>,

    /// Unicode normalization form
    #[arg(long, default_value = "NFC", value_parser = parse_form)]
    form: NormalizationForm,

    /// Logging verbosity
    #[arg(
        long = "log_level",
        visible_alias = "log-level",
        value_enum,
        ignore_case = true,
        default_value = "INFO"
    )]
    log_level: LogLevel,

    /// Only report whether INPUT is normalized; exit 1 if it is not
    #[arg(long, conflicts_with = "output")]
    check: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

/// Exit codes: 0 = success, 1 = not normalized (--check), 2 = error
const EXIT_OK: i32 = 0;
const EXIT_NOT_NORMALIZED: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn parse_form(s: &str) -> uninorm_core::Result<NormalizationForm> {
    s.parse()
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let normalizer = Normalizer::new(NormalizeOptions {
        form: cli.form,
        output: cli.output.clone(),
        check_only: cli.check,
    });

    let exit_code = match normalizer.run(&cli.input) {
        Ok(report) => {
            print_report(&report, cli.json);
            if cli.check && report.changed {
                EXIT_NOT_NORMALIZED
            } else {
                EXIT_OK
            }
        }
        Err(err) => {
            print_error(&err, cli.json);
            EXIT_ERROR
        }
    };

    process::exit(exit_code);
}

fn print_report(report: &Report, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} could not serialize report: {}", "error:".red().bold(), e),
        }
        return;
    }

    let marker = if report.changed && report.output.is_none() {
        "✗".yellow()
    } else {
        "✓".green()
    };
    println!("{} {}", marker, report.summary());
}

fn print_error(err: &Error, json: bool) {
    debug!(kind = err.kind(), "run failed");
    eprintln!("{} {}", "error:".red().bold(), err);
    if json {
        let value = serde_json::json!({
            "error": err.kind(),
            "message": err.to_string(),
        });
        println!("{}", value);
    }
}
