// CABC converter: CLI entry point.
//
// Converts Carnatic ABC files (swaras S R G M P D N) into standard ABC and
// writes the plain, swara-annotated and lyrics variants next to each song.
//
// Usage:
//   cabc -i songs/sri-govinda/input/notes-lyrics.cabc.abc
//   cabc -i songs/varaveena/input/notes.cabc.abc -o test_outputs/
//   cabc --all [--songs-dir songs]
//
// Options:
//   -i, --input <FILE>        Convert one .cabc.abc file
//   -o, --output <DIR>        Output directory (default: output/ next to input/)
//   --all                     Convert every song under the songs directory
//   --songs-dir <DIR>         Songs directory for --all (default: songs)
//   --annotate <STYLE>        Swara annotation style: lyric (default) or inline
//   --labels <STYLE>          Swara labels: letter (default) or syllable
//   --report                  Print a JSON run summary on stdout
//   -v, --verbose             Debug logging
//   -h, --help                Show this help
//
// Exit status: 0 on success, 1 when a swara could not be mapped (a converter
// defect), 2 on invalid arguments. Unreadable songs are logged and skipped.

use std::path::PathBuf;
use std::process;

use cabc_converter::converters::cabc_to_abc::ConversionSettings;
use cabc_converter::songs::{is_cabc_file, process_file, RunSummary, SongRunner, INPUT_EXTENSION};

const USAGE: &str = "\
Convert Carnatic ABC (CABC) notation to standard ABC notation

Usage:
  cabc -i <FILE> [-o <DIR>] [OPTIONS]
  cabc --all [--songs-dir <DIR>] [OPTIONS]

Options:
  -i, --input <FILE>     Convert one .cabc.abc file
  -o, --output <DIR>     Output directory (default: output/ next to input/)
      --all              Convert every song under the songs directory
      --songs-dir <DIR>  Songs directory for --all (default: songs)
      --annotate <STYLE> Swara annotation style: lyric or inline
      --labels <STYLE>   Swara labels: letter or syllable
      --report           Print a JSON run summary on stdout
  -v, --verbose          Debug logging
  -h, --help             Show this help";

#[derive(Debug, Clone, PartialEq)]
struct CliArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    all: bool,
    songs_dir: PathBuf,
    settings: ConversionSettings,
    report: bool,
    verbose: bool,
    help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            all: false,
            songs_dir: PathBuf::from("songs"),
            settings: ConversionSettings::default(),
            report: false,
            verbose: false,
            help: false,
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("error: {msg}\n\n{USAGE}");
            process::exit(2);
        }
    };
    if cli.help {
        println!("{USAGE}");
        return;
    }

    // Keep the handle alive until exit so buffered log lines are flushed.
    let _logger = match cabc_converter::logging::init_logging(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {e}");
            None
        }
    };

    let summary = if cli.all {
        let runner = SongRunner::new(cli.songs_dir.clone(), cli.settings);
        match runner.process_all() {
            Ok(summary) => summary,
            Err(e) => {
                log::error!("{e}");
                RunSummary::default()
            }
        }
    } else {
        let Some(input) = cli.input.as_deref() else {
            eprintln!("error: either --input or --all is required\n\n{USAGE}");
            process::exit(2);
        };
        if let Err(msg) = validate_input(input) {
            eprintln!("error: {msg}");
            process::exit(2);
        }

        log::info!("processing {}", input.display());
        let mut summary = RunSummary::default();
        summary.record(input, process_file(input, cli.output.as_deref(), &cli.settings));
        summary
    };

    if cli.report {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("cannot serialize run summary: {e}"),
        }
    }

    log::info!(
        "{} file(s) converted, {} failed",
        summary.converted.len(),
        summary.failed.len()
    );
    if summary.has_defects() {
        process::exit(1);
    }
}

fn validate_input(input: &std::path::Path) -> Result<(), String> {
    if !input.exists() {
        return Err(format!("input file '{}' does not exist", input.display()));
    }
    if !is_cabc_file(input) {
        return Err(format!("input file must have {INPUT_EXTENSION} extension"));
    }
    Ok(())
}

/// Parse command-line arguments. Uses simple slice matching, no clap.
fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "-i" | "--input" => {
                i += 1;
                cli.input = Some(PathBuf::from(value(args, i, "--input")?));
            }
            "-o" | "--output" => {
                i += 1;
                cli.output = Some(PathBuf::from(value(args, i, "--output")?));
            }
            "--songs-dir" => {
                i += 1;
                cli.songs_dir = PathBuf::from(value(args, i, "--songs-dir")?);
            }
            "--annotate" => {
                i += 1;
                cli.settings.annotation_style = value(args, i, "--annotate")?.parse()?;
            }
            "--labels" => {
                i += 1;
                cli.settings.label_style = value(args, i, "--labels")?.parse()?;
            }
            "--all" => cli.all = true,
            "--report" => cli.report = true,
            "-v" | "--verbose" => cli.verbose = true,
            "-h" | "--help" => cli.help = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
        i += 1;
    }

    if cli.all && cli.input.is_some() {
        return Err("--all and --input cannot be combined".to_string());
    }
    Ok(cli)
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabc_converter::converters::cabc_to_abc::AnnotationStyle;
    use cabc_converter::models::LabelStyle;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_single_input() {
        let cli = parse_args(&args(&["-i", "songs/a/input/notes.cabc.abc", "-o", "out"])).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("songs/a/input/notes.cabc.abc")));
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert!(!cli.all);
    }

    #[test]
    fn test_parse_all_with_styles() {
        let cli = parse_args(&args(&[
            "--all",
            "--songs-dir",
            "fixtures",
            "--annotate",
            "inline",
            "--labels",
            "syllable",
            "--report",
            "-v",
        ]))
        .unwrap();
        assert!(cli.all && cli.report && cli.verbose);
        assert_eq!(cli.songs_dir, PathBuf::from("fixtures"));
        assert_eq!(cli.settings.annotation_style, AnnotationStyle::Inline);
        assert_eq!(cli.settings.label_style, LabelStyle::Syllable);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--input"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["--labels", "names"])).is_err());
        assert!(parse_args(&args(&["--all", "-i", "x.cabc.abc"])).is_err());
    }
}
