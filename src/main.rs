// ============================================================================
// renard
// Command line front end for Renard series lookups
// ============================================================================

use renard::cli;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let code = match cli::parse(std::env::args_os().skip(1), &mut out, &mut err) {
        Ok(parsed) => {
            cli::init_tracing(parsed.verbose);
            cli::dispatch(&parsed, &mut out, &mut err)
        },
        Err(code) => code,
    };

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
