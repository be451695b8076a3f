// src/bin/mlog.rs

//! Driver program _mlog_ drives the [_mloglib_].
//!
//! Processes user-passed command-line arguments. Then, for the `info`
//! subcommand, processes each passed log file path in order using
//! [`process_file`]. Output for each file is bracketed by begin and end
//! markers on stdout.
//!
//! A failed file is printed to stderr. By default processing continues
//! with the next file; with `--strict` the program exits at the first failed
//! file.
//!
//! [_mloglib_]: mloglib
//! [`process_file`]: mloglib::readers::infoprocessor::process_file

#![allow(non_camel_case_types)]

use std::io::{BufWriter, Write};
use std::process::ExitCode;

use ::anyhow::Context;
use ::clap::{error::ErrorKind, Parser, Subcommand, ValueEnum};
use ::const_format::concatcp;
use ::mloglib::common::{FPath, FPaths};
use ::mloglib::e_err;
use ::mloglib::printer::printers::{
    print_colored_stderr,
    write_file_begin,
    write_file_end,
    ColorChoice,
    COLOR_ERROR,
};
use ::mloglib::readers::infoprocessor::process_file;
use ::mloglib::readers::startupaccumulator::{AccumulatorConfig, Variant};
use ::mloglib::readers::summary::PassSummary;
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Process exit code: all files processed.
const EXIT_OK: u8 = 0;
/// Process exit code: at least one file failed.
const EXIT_FILE_FAILED: u8 = 1;
/// Process exit code: a file failed and `--strict` was passed.
const EXIT_STRICT_FAILED: u8 = 2;
/// Process exit code: bad command-line usage.
const EXIT_USAGE: u8 = 3;

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

/// CLI enum that maps to [`Variant`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    ValueEnum, // from `clap`
)]
enum CLI_Variant {
    /// Startup messages of component CONTROL only.
    baseline,
    /// Also log rotation and replica set messages of component REPL.
    extended,
}

#[cfg(debug_assertions)]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "\nDEBUG BUILD";
#[cfg(not(debug_assertions))]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "";

/// `--help` _afterword_ message.
const CLI_HELP_AFTER: &str = concatcp!(
    "\
Log files must be MongoDB structured (JSON lines) log files, as written by
MongoDB 4.4 and later.

Exit codes:
    0  all files processed
    1  at least one file failed
    2  a file failed and --strict was passed
    3  bad command-line usage
",
    CLI_HELP_AFTER_NOTE_DEBUG,
);

// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "mlog",
    // write expanded information for the `--version` output
    version = concatcp!(
        "\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Repository: ", env!("CARGO_PKG_REPOSITORY"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    subcommand_required = true,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Choose to print errors using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        global = true,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    #[clap(subcommand)]
    command: CLI_Command,
}

#[derive(Subcommand, Debug)]
enum CLI_Command {
    /// Print the startup and log rotation information and the time range
    /// of each log file.
    #[clap(verbatim_doc_comment)]
    Info(CLI_Info_Args),
}

#[derive(clap::Args, Debug)]
struct CLI_Info_Args {
    /// Path(s) of MongoDB structured log files.
    #[clap(required = true, verbatim_doc_comment)]
    paths: Vec<String>,

    /// Set of recognized startup messages.
    #[clap(
        long = "variant",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Variant::extended,
    )]
    variant: CLI_Variant,

    /// Clear replica set information after every report.
    /// By default replica set information of an earlier startup is
    /// repeated in later reports until new replica set membership is seen.
    #[clap(long = "clear-replica", verbatim_doc_comment, default_value_t = false)]
    clear_replica: bool,

    /// Exit at the first failed file.
    #[clap(long = "strict", verbatim_doc_comment, default_value_t = false)]
    strict: bool,
}

/// Map the CLI color choice to the `termcolor` choice.
fn cli_color_choice(color_choice: CLI_Color_Choice) -> ColorChoice {
    match color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    }
}

/// Derive the library `AccumulatorConfig` from the `info` arguments.
fn cli_accumulator_config(args: &CLI_Info_Args) -> AccumulatorConfig {
    let variant: Variant = match args.variant {
        CLI_Variant::baseline => Variant::Baseline,
        CLI_Variant::extended => Variant::Extended,
    };
    let mut config = AccumulatorConfig::new(variant);
    config.clear_replica_on_report = args.clear_replica;

    config
}

/// Parse the command-line `args`.
///
/// `--help` and `--version` are printed here and are `Err(EXIT_OK)`.
/// Usage errors are printed here and are `Err(EXIT_USAGE)`.
fn cli_process_args<I, T>(args: I) -> Result<CLI_Args, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match CLI_Args::try_parse_from(args) {
        Ok(args) => {
            defo!("args {:?}", args);

            Ok(args)
        }
        Err(err) => {
            #[allow(clippy::match_single_binding)]
            match err.print() {
                _ => {}
            }
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Err(EXIT_OK),
                _ => Err(EXIT_USAGE),
            }
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// processing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Run the `info` pass over one file, adding the file as context to any
/// error.
fn info_file<W: Write>(
    path: &FPath,
    out: &mut W,
    config: &AccumulatorConfig,
) -> anyhow::Result<PassSummary> {
    process_file(path, out, config).with_context(|| format!("mlog info error for file {:?}", path))
}

/// Print a failed file to stderr.
fn print_file_error(err: &anyhow::Error, color_choice: ColorChoice) {
    let message: String = format!("ERROR: {:#}\n", err);
    if print_colored_stderr(COLOR_ERROR, Some(color_choice), message.as_bytes()).is_err() {
        e_err!("{:#}", err);
    }
}

/// Run the `info` pass over each of `paths` in order. Returns the process
/// exit code.
fn info_paths(
    paths: &FPaths,
    config: &AccumulatorConfig,
    strict: bool,
    color_choice: ColorChoice,
) -> u8 {
    defn!("({:?}, {:?}, strict {})", paths, config, strict);
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failed: usize = 0;

    for path in paths.iter() {
        let result: anyhow::Result<PassSummary> = write_file_begin(&mut out, path)
            .context("error writing output")
            .and_then(|_| info_file(path, &mut out, config));
        // the error goes after whatever the pass wrote before failing
        #[allow(clippy::match_single_binding)]
        match out.flush() {
            _ => {}
        }
        match result {
            Ok(_summary) => {
                defo!("{:?}", _summary);
            }
            Err(err) => {
                failed += 1;
                print_file_error(&err, color_choice);
                if strict {
                    defx!("strict, return {}", EXIT_STRICT_FAILED);
                    return EXIT_STRICT_FAILED;
                }
            }
        }
        if let Err(err) = write_file_end(&mut out, path).and_then(|_| out.flush()) {
            // stdout is gone, e.g. `mlog info a.log | head`
            e_err!("error writing output: {}", err);
            defx!("return {}", EXIT_FILE_FAILED);
            return EXIT_FILE_FAILED;
        }
    }
    let exitcode: u8 = if failed > 0 { EXIT_FILE_FAILED } else { EXIT_OK };
    defx!("failed {}, return {}", failed, exitcode);

    exitcode
}

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let args: CLI_Args = match cli_process_args(std::env::args_os()) {
        Ok(args) => args,
        Err(exitcode) => {
            defx!("exitcode {}", exitcode);
            return ExitCode::from(exitcode);
        }
    };
    let color_choice: ColorChoice = cli_color_choice(args.color_choice);
    let exitcode: u8 = match args.command {
        CLI_Command::Info(info_args) => {
            let config: AccumulatorConfig = cli_accumulator_config(&info_args);
            info_paths(&info_args.paths, &config, info_args.strict, color_choice)
        }
    };
    defx!("exitcode {}", exitcode);

    ExitCode::from(exitcode)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    use ::test_case::test_case;

    fn parse(args: &[&str]) -> Result<CLI_Args, u8> {
        cli_process_args(args.iter())
    }

    #[test]
    fn test_cli_info_defaults() {
        let args = parse(&["mlog", "info", "a.log", "b.log"]).unwrap();
        assert_eq!(args.color_choice, CLI_Color_Choice::auto);
        let CLI_Command::Info(info_args) = args.command;
        assert_eq!(info_args.paths, vec!["a.log".to_string(), "b.log".to_string()]);
        assert!(!info_args.strict);
        let config = cli_accumulator_config(&info_args);
        assert_eq!(config, AccumulatorConfig::new(Variant::Extended));
    }

    #[test]
    fn test_cli_info_options() {
        let args = parse(&[
            "mlog",
            "--color",
            "never",
            "info",
            "--variant",
            "baseline",
            "--clear-replica",
            "--strict",
            "a.log",
        ])
        .unwrap();
        assert_eq!(cli_color_choice(args.color_choice), ColorChoice::Never);
        let CLI_Command::Info(info_args) = args.command;
        assert!(info_args.strict);
        let config = cli_accumulator_config(&info_args);
        assert_eq!(config.variant, Variant::Baseline);
        assert_eq!(config.components, vec!["CONTROL".to_string()]);
        assert!(config.clear_replica_on_report);
    }

    #[test_case(&["mlog"]; "no subcommand")]
    #[test_case(&["mlog", "info"]; "no paths")]
    #[test_case(&["mlog", "bogus", "a.log"]; "unknown subcommand")]
    #[test_case(&["mlog", "info", "--variant", "bogus", "a.log"]; "bad variant")]
    fn test_cli_usage_error(args: &[&str]) {
        assert_eq!(parse(args).unwrap_err(), EXIT_USAGE);
    }

    #[test]
    fn test_cli_version() {
        assert_eq!(parse(&["mlog", "--version"]).unwrap_err(), EXIT_OK);
    }
}
