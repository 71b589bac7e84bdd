mod debug_report;

use std::io::{self, IsTerminal, Read};

use lottoscan::{Options, PlainTextRenderer, Renderer, SeriesDetection, match_tickets, parse_verbose_with};
use tracing::Level;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let level = if config.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(level).init();

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

struct CliConfig {
    input: Option<String>,
    tickets: Vec<String>,
    options: Options,
    json: bool,
    color: bool,
    verbose: bool,
}

fn run(config: &CliConfig) -> Result<(), String> {
    let raw = read_input(config.input.as_deref())?;
    let text = PlainTextRenderer.render_to_flat_text(&raw).map_err(|err| err.to_string())?;

    let res = parse_verbose_with(&text, &config.options).map_err(|err| err.to_string())?;
    let winners = match_tickets(&res.results, &config.tickets);

    if config.json {
        let out = serde_json::json!({ "results": res.results, "winners": winners });
        let pretty = serde_json::to_string_pretty(&out).map_err(|err| err.to_string())?;
        println!("{pretty}");
    } else {
        debug_report::print_run(&res, &config.tickets, &winners, config.color);
    }

    Ok(())
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut tickets = Vec::new();
    let mut options = Options::default();
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut verbose = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("lottoscan {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "-v" | "--verbose" => verbose = true,
            "--series-fallback" => options.series = SeriesDetection::FirstTicketPrefix,
            "-t" | "--ticket" => {
                let value = args.next().ok_or_else(|| "error: --ticket expects a value".to_string())?;
                tickets.push(value);
            }
            "--" => {
                if let Some(path) = args.next() {
                    set_input(&mut input, path)?;
                }
                if args.next().is_some() {
                    return Err("error: only one input file may be given".to_string());
                }
                break;
            }
            _ if arg.starts_with("--ticket=") => {
                tickets.push(arg.trim_start_matches("--ticket=").to_string());
            }
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => set_input(&mut input, arg)?,
        }
    }

    Ok(CliConfig { input, tickets, options, json, color, verbose })
}

fn set_input(input: &mut Option<String>, path: String) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(path);
    Ok(())
}

/// Read the document from `path`, or stdin when absent or `-`.
fn read_input(path: Option<&str>) -> Result<Vec<u8>, String> {
    match path {
        Some(path) if path != "-" => std::fs::read(path).map_err(|err| format!("failed to read {path}: {err}")),
        _ => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer).map_err(|err| format!("failed to read stdin: {err}"))?;
            Ok(buffer)
        }
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "lottoscan {version}

Parse a flattened lottery result document and check tickets against it.

Usage:
  lottoscan [OPTIONS] [--] [FILE]

  FILE is a text file holding the rendered document (one line per row is
  fine). Reads stdin when FILE is omitted or '-'.

Options:
  -t, --ticket <ticket>      Ticket to check, e.g. AB123456. Repeatable.
  --series-fallback          Take the series from the first full ticket when
                             no bracketed series letter is printed.
  --json                     Print results and winners as JSON.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -v, --verbose              Log debug events to stderr.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Input could not be read or parsed.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
