// Entry flow shared by the binary and the integration tests: flags ->
// config -> one request -> outcome.

use crate::api::{ApiClient, Outcome, SammyRequest};
use crate::category::SammyType;
use crate::config::{Cli, Config};
use crate::ui;
use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;

/// Create one Sammy. The server message is written to `out` on success;
/// a rejected request comes back as a `Rejection` error.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let req = SammyRequest::new(config.name.clone(), SammyType::resolve(&config.sammy_type));
    let api = ApiClient::from_config(config)?;
    log::info!("Creating {} Sammy {:?}", req.sammy_type, req.name);

    let spinner = ui::spinner("Creating your Sammy...");
    let resp = api.create_sammy(&req);
    spinner.finish_and_clear();

    match resp?.into_outcome() {
        Outcome::Created { message } => {
            log::info!("{message}");
            ui::print_created(out, &message)
        }
        Outcome::Rejected(rejection) => {
            for (field, err) in rejection.field_errors() {
                log::debug!("Rejected field {field}: {err}");
            }
            Err(rejection.into())
        }
    }
}

/// Parse `args`, validate them and run. Argument errors from clap are
/// returned as errors rather than exiting the process.
pub fn try_main<I, T>(args: I, out: &mut impl Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let config = Config::from_cli(cli)?;
    run(&config, out)
}
