// ============================================================================
// Command Line Interface
// Argument parsing, dispatch and exit-code mapping for the `renard` binary
// ============================================================================

use crate::domain::{key_from_name, precision, series, Direction, PresentationConfig, SeriesKey};
use crate::engine::{find, find_nearest, find_nearest_few, rrange, MAX_NEAREST};
use crate::format::format_value;
use crate::numeric::RenardError;
use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};

/// Successful termination
pub const EX_OK: i32 = 0;
/// Command line usage error
pub const EX_USAGE: i32 = 64;
/// Input data was incorrect
pub const EX_DATAERR: i32 = 65;
/// Output could not be written
pub const EX_IOERR: i32 = 74;

const PROGRAM: &str = "renard";

// ============================================================================
// Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = PROGRAM)]
#[command(version, about = "Look up values in Renard preferred number series")]
pub struct Cli {
    /// Use verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// A series and a query value
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Renard series name, e.g. R20
    #[arg(value_name = "RENARD-SERIES")]
    pub series: String,

    /// Query value
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Use the SI magnitude prefix symbol
    #[arg(short, long)]
    pub symbol: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// The nearest value in a Renard series
    Nearest(QueryArgs),

    /// Three nearby values, at least one below and one above the given value
    Nearby(QueryArgs),

    /// The smallest value greater than the given value
    Gt(QueryArgs),

    /// The smallest value greater than or equal to the given value
    Ge(QueryArgs),

    /// The largest value less than the given value
    Lt(QueryArgs),

    /// The largest value less than or equal to the given value
    Le(QueryArgs),

    /// The base values for the given Renard series
    Series {
        /// Renard series name, e.g. R20
        #[arg(value_name = "RENARD-SERIES")]
        series: String,
    },

    /// All values in the given Renard series from start to stop inclusive
    Range {
        /// Renard series name, e.g. R20
        #[arg(value_name = "RENARD-SERIES")]
        series: String,

        /// Lower bound of the range
        #[arg(value_name = "START-VALUE", allow_negative_numbers = true)]
        start: String,

        /// Upper bound of the range
        #[arg(value_name = "STOP-VALUE", allow_negative_numbers = true)]
        stop: String,

        /// Use the SI magnitude prefix symbol
        #[arg(short, long)]
        symbol: bool,
    },

    /// The multiple to which the base values in the series are rounded
    Precision {
        /// Renard series name, e.g. R20
        #[arg(value_name = "RENARD-SERIES")]
        series: String,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Nearest(_) => "nearest",
            Command::Nearby(_) => "nearby",
            Command::Gt(_) => "gt",
            Command::Ge(_) => "ge",
            Command::Lt(_) => "lt",
            Command::Le(_) => "le",
            Command::Series { .. } => "series",
            Command::Range { .. } => "range",
            Command::Precision { .. } => "precision",
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Failures while executing a parsed command
#[derive(Debug)]
pub enum CliError {
    /// Text could not be parsed as a number
    InvalidValue { text: String, name: &'static str },
    /// The series lookup or query failed
    Renard(RenardError),
    /// Writing results failed
    Io(io::Error),
}

impl CliError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidValue { .. } | CliError::Renard(_) => EX_DATAERR,
            CliError::Io(_) => EX_IOERR,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidValue { text, name } => write!(
                f,
                "{:?} could not be interpreted as a Renard series {}",
                text, name
            ),
            CliError::Renard(err) => write!(f, "{}", err),
            CliError::Io(err) => write!(f, "output error: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Renard(err) => Some(err),
            CliError::Io(err) => Some(err),
            CliError::InvalidValue { .. } => None,
        }
    }
}

impl From<RenardError> for CliError {
    fn from(err: RenardError) -> Self {
        CliError::Renard(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Parse and execute a command line (without the program name), writing
/// results to `out` and diagnostics to `err`. Returns the exit code.
pub fn run<I, T>(args: I, out: &mut impl Write, err: &mut impl Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match parse(args, out, err) {
        Ok(cli) => dispatch(&cli, out, err),
        Err(code) => code,
    }
}

/// Parse a command line (without the program name).
///
/// Help and version requests are printed to `out` and yield `EX_OK`;
/// malformed command lines are reported on `err` and yield `EX_USAGE`.
pub fn parse<I, T>(args: I, out: &mut impl Write, err: &mut impl Write) -> Result<Cli, i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv = std::iter::once(OsString::from(PROGRAM)).chain(args.into_iter().map(Into::into));
    Cli::try_parse_from(argv).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", e.render());
            EX_OK
        },
        _ => {
            let _ = write!(err, "{}", e.render());
            EX_USAGE
        },
    })
}

/// Execute a parsed command line, returning the exit code.
pub fn dispatch(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> i32 {
    tracing::debug!(command = cli.command.name(), "dispatching");
    match execute(&cli.command, out) {
        Ok(()) => EX_OK,
        Err(e) => {
            tracing::warn!(command = cli.command.name(), error = %e, "command failed");
            let _ = writeln!(err, "{}", e);
            e.exit_code()
        },
    }
}

/// Install the `tracing` subscriber for the binary.
///
/// `RUST_LOG` takes precedence; otherwise warnings only, or debug output
/// with `--verbose`.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

// ============================================================================
// Command Handlers
// ============================================================================

fn execute(command: &Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Nearest(args) => {
            let (key, value) = args.resolve()?;
            let nearest = find_nearest(key, value)?;
            writeln!(out, "{}", present(args.symbol, nearest)?)?;
        },
        Command::Nearby(args) => {
            let (key, value) = args.resolve()?;
            for item in find_nearest_few(key, value, MAX_NEAREST)? {
                writeln!(out, "{}", present(args.symbol, item)?)?;
            }
        },
        Command::Gt(args) => directional(args, Direction::Greater, out)?,
        Command::Ge(args) => directional(args, Direction::GreaterOrEqual, out)?,
        Command::Lt(args) => directional(args, Direction::Less, out)?,
        Command::Le(args) => directional(args, Direction::LessOrEqual, out)?,
        Command::Series { series: name } => {
            for item in series(key_from_name(name)?) {
                writeln!(out, "{:?}", item)?;
            }
        },
        Command::Range {
            series: name,
            start,
            stop,
            symbol,
        } => {
            let key = key_from_name(name)?;
            let start = parse_value(start, "start-value")?;
            let stop = parse_value(stop, "stop-value")?;
            for item in rrange(key, start, stop)? {
                writeln!(out, "{}", present(*symbol, item)?)?;
            }
        },
        Command::Precision { series: name } => {
            writeln!(out, "{}", precision(key_from_name(name)?))?;
        },
    }
    Ok(())
}

fn directional(
    args: &QueryArgs,
    direction: Direction,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let (key, value) = args.resolve()?;
    let found = find(key, value, direction)?;
    writeln!(out, "{}", present(args.symbol, found)?)?;
    Ok(())
}

impl QueryArgs {
    fn resolve(&self) -> Result<(SeriesKey, f64), CliError> {
        let key = key_from_name(&self.series)?;
        let value = parse_value(&self.value, "value")?;
        Ok((key, value))
    }
}

fn parse_value(text: &str, name: &'static str) -> Result<f64, CliError> {
    text.trim()
        .parse()
        .map_err(|_| CliError::InvalidValue {
            text: text.to_string(),
            name,
        })
}

fn present(symbol: bool, value: f64) -> Result<String, CliError> {
    Ok(format_value(value, &PresentationConfig::from_symbol_flag(symbol))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_line(line: &str) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(line.split_whitespace(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn assert_output(line: &str, expected: &str) {
        let (code, out, err) = run_line(line);
        assert_eq!(code, EX_OK, "{}: {}", line, err);
        assert_eq!(out, expected, "{}", line);
    }

    #[test]
    fn test_nearest() {
        assert_output("nearest R10 21", "20\n");
    }

    #[test]
    fn test_nearest_with_symbol() {
        assert_output("nearest R10 21000 -s", "20 k\n");
        assert_output("nearest R10 21000 --symbol", "20 k\n");
    }

    #[test]
    fn test_nearby() {
        assert_output("nearby R20 31", "28\n31.5\n35.5\n");
    }

    #[test]
    fn test_directional() {
        assert_output("gt R20 31", "31.5\n");
        assert_output("lt R20 31", "28\n");
        assert_output("ge R20 40", "40\n");
        assert_output("le R20 40", "40\n");
    }

    #[test]
    fn test_series() {
        assert_output("series R5", "1.0\n1.6\n2.5\n4.0\n6.3\n");
    }

    #[test]
    fn test_range() {
        assert_output("range R10 1700 3400", "2e3\n2.5e3\n3.15e3\n");
    }

    #[test]
    fn test_range_symbol() {
        assert_output("range R10 1700 3400 -s", "2 k\n2.5 k\n3.15 k\n");
    }

    #[test]
    fn test_precision() {
        assert_output("precision R5", "0.01\n");
        assert_output("precision RRR5", "0.5\n");
    }

    #[test]
    fn test_verbose_flag_accepted() {
        assert_output("-v nearest R10 21", "20\n");
        assert_output("nearest R10 21 --verbose", "20\n");
    }

    #[test]
    fn test_bogus_series_gives_data_error() {
        let (code, out, err) = run_line("series R13");
        assert_eq!(code, EX_DATAERR);
        assert!(out.is_empty());
        assert!(err.contains("R13"));
        assert!(err.contains("RRR20"));
    }

    #[test]
    fn test_bogus_series_precision_gives_data_error() {
        let (code, _, _) = run_line("precision R13");
        assert_eq!(code, EX_DATAERR);
    }

    #[test]
    fn test_bogus_value_gives_data_error() {
        let (code, _, err) = run_line("nearest R10 FOO");
        assert_eq!(code, EX_DATAERR);
        assert_eq!(
            err,
            "\"FOO\" could not be interpreted as a Renard series value\n"
        );
    }

    #[test]
    fn test_out_of_range_value_gives_data_error() {
        let (code, _, _) = run_line("nearest R10 -5");
        assert_eq!(code, EX_DATAERR);
        let (code, _, _) = run_line("range R10 3400 1700");
        assert_eq!(code, EX_DATAERR);
        let (code, _, _) = run_line("ge R10 inf");
        assert_eq!(code, EX_DATAERR);
    }

    #[test]
    fn test_malformed_command_gives_usage_error() {
        let (code, _, err) = run_line("foo R13 316");
        assert_eq!(code, EX_USAGE);
        assert!(!err.is_empty());

        let (code, _, _) = run_line("nearest R10");
        assert_eq!(code, EX_USAGE);
    }

    #[test]
    fn test_help_is_success() {
        let (code, out, _) = run_line("--help");
        assert_eq!(code, EX_OK);
        assert!(out.contains("nearest"));
    }

    #[test]
    fn test_error_exit_codes() {
        let err = CliError::InvalidValue {
            text: "x".to_string(),
            name: "value",
        };
        assert_eq!(err.exit_code(), EX_DATAERR);
        let err = CliError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.exit_code(), EX_IOERR);
    }
}
