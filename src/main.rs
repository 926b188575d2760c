mod debug_report;
mod logging;

use clap::Parser;
use extractnum::output::{BuiltinChart, RouteConfig, TableStyle, route};
use extractnum::{DEFAULT_PLACEHOLDER, Options, PatternMode, compile_patterns, extract_reader};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "extractnum",
    version,
    about = "Extract number arrays from an unstructured log file, then plot or tabulate them",
    after_help = "Output targets (-o):
  *.svg            save a line chart
  *.csv            aligned table as CSV
  *.json           raw arrays as JSON
  *.txt / stdout   aligned text table to the file / standard output
  anything else    draw the chart on the terminal"
)]
struct Cli {
    /// Text file to parse, `-` for stdin
    file: PathBuf,

    /// Pattern(s) for extracting values. In plain mode `acc: {accuracy}`
    /// captures the number after `acc: ` under the label `accuracy`.
    #[arg(short, long = "pattern", value_name = "PATTERN", num_args = 1..)]
    patterns: Vec<String>,

    /// Interpret patterns as regexes with named groups, e.g. `acc:\s(?P<accuracy>\d+)`
    #[arg(long)]
    regex: bool,

    /// Regex substituted for each `{label}` in plain patterns
    #[arg(long, visible_alias = "placehold-pattern", value_name = "REGEX", default_value = DEFAULT_PLACEHOLDER)]
    placeholder: String,

    /// Label whose values become the X axis of the chart (default: 0, 1, 2, …)
    #[arg(long, value_name = "LABEL")]
    x: Option<String>,

    /// Output target, see below
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Exponential moving average weight applied when plotting, in [0, 1)
    #[arg(long, value_name = "WEIGHT", default_value_t = 0.0)]
    smooth: f64,

    /// Number of lines to skip before parsing
    #[arg(long, value_name = "N", default_value_t = 0)]
    offset: usize,

    /// Maximum number of values kept per label (0 = no limit)
    #[arg(long, value_name = "N", default_value_t = 0)]
    limit: usize,

    /// Text table renderer: rich or plain
    #[arg(long, value_name = "STYLE", default_value_t = TableStyle::Rich)]
    table_style: TableStyle,

    /// Print debug logs and a scan report to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> extractnum::Result<()> {
    let route_config =
        RouteConfig { output: cli.output, x_label: cli.x, smooth: cli.smooth, table_style: cli.table_style };
    route_config.validate()?;

    let mode = if cli.regex { PatternMode::Regex } else { PatternMode::Plain };
    let patterns = compile_patterns(&cli.patterns, mode, &cli.placeholder)?;

    let options = Options { offset: cli.offset, limit: cli.limit, verbose: cli.verbose };
    let report = extract_reader(open_input(&cli.file)?, &patterns, &options)?;

    if options.verbose {
        let source = cli.file.display().to_string();
        debug_report::print_scan(&source, &patterns, &report.series, &report.metrics, io::stderr().is_terminal());
    }

    route(report.series, &route_config, &BuiltinChart::default())?;
    Ok(())
}

fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}
