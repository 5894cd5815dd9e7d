// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, run the create flow, map the
//   result to an exit code.

use sammy_cli::{api::Rejection, app, logger::Logger, ui};
use crossterm::tty::IsTty;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    Logger::init();

    let err = match app::try_main(std::env::args_os(), &mut io::stdout()) {
        Ok(()) => return ExitCode::SUCCESS,
        Err(err) => err,
    };

    // --help and --version come back from clap as errors too
    if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
        let _ = clap_err.print();
        return if clap_err.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    let mut stderr = io::stderr();
    let color = stderr.is_tty();
    let _ = match err.downcast_ref::<Rejection>() {
        Some(rejection) => ui::print_rejection(&mut stderr, rejection, color),
        None => ui::print_error(&mut stderr, &err, color),
    };
    ExitCode::FAILURE
}
