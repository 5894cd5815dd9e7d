// Command line surface and the explicit configuration built from it.

use crate::api::API_URL;
use crate::ui;
use anyhow::{bail, Result};
use clap::Parser;

/// Environment variable that overrides the API endpoint.
pub const API_URL_ENV: &str = "SAMMY_API_URL";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "sammy-cli", version, about = "Create your own Sammy", long_about = None)]
pub struct Cli {
    /// The name to give to your new Sammy.
    #[arg(short, long)]
    pub name: Option<String>,

    /// The type to give to your new Sammy: sammy, punk, dinosaur, retro,
    /// pizza, robot, pony, bootcamp or xray (case-insensitive).
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub sammy_type: Option<String>,

    /// Prompt for any value not passed on the command line.
    #[arg(short, long)]
    pub interactive: bool,
}

/// Everything a single run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub name: String,
    /// Raw type input; resolved when the request is built.
    pub sammy_type: String,
    pub api_url: String,
}

impl Config {
    /// Validate parsed flags. Runs before any network activity.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Self::from_cli_with_url(cli, api_url_from_env())
    }

    pub fn from_cli_with_url(cli: Cli, api_url: String) -> Result<Self> {
        let mut name = cli.name.filter(|n| !is_blank(n));
        let mut sammy_type = cli.sammy_type.filter(|t| !is_blank(t));

        if cli.interactive {
            if name.is_none() {
                name = Some(ui::prompt_name()?);
            }
            if sammy_type.is_none() {
                sammy_type = Some(ui::prompt_type()?.to_string());
            }
        }

        let Some(name) = name else {
            bail!("Sammy has to have a name");
        };
        let Some(sammy_type) = sammy_type else {
            bail!("Sammy has to have a type");
        };

        Ok(Config {
            name,
            sammy_type,
            api_url,
        })
    }
}

/// Empty or whitespace-only input counts as missing, both for flags and
/// for interactive prompts.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Read `SAMMY_API_URL` or fall back to the public endpoint.
pub fn api_url_from_env() -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| API_URL.into())
}
