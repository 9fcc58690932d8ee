//
//  cloudfoundry-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod app;
mod config;
mod domain;
mod package;

pub use app::AppCommand;
pub use config::ConfigCommand;
pub use domain::DomainCommand;
pub use package::PackageCommand;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::api::{CloudFoundryClient, Error};
use crate::config::Config;
use crate::exit_codes;
use crate::output::{OutputFormat, OutputWriter};

/// cf - Work with Cloud Foundry from the command line
#[derive(Parser, Debug)]
#[command(
    name = "cf",
    version,
    about = "Work with Cloud Foundry from the command line",
    long_about = "cf talks to the Cloud Foundry Cloud Controller API.\n\n\
                  It manages v3 packages and v2 domains from your terminal.",
    propagate_version = true,
    after_help = "Use 'cf <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Cloud Controller API root, e.g. https://api.example.com
    #[arg(long, global = true, env = "CF_API")]
    pub api: Option<String>,

    /// OAuth access token (the output of `cf oauth-token` is accepted)
    #[arg(long, global = true, env = "CF_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Loads the configuration file and applies `--api` / `--token`.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        if let Some(api) = &self.api {
            config.api = api.clone();
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        Ok(config)
    }

    /// A client for the configured API.
    pub fn client(&self) -> Result<CloudFoundryClient> {
        let config = self.config()?;
        tracing::debug!("using API {}", config.api);
        Ok(CloudFoundryClient::from_config(&config)?)
    }

    /// The output writer selected by `--json`.
    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_json_flag(self.json))
    }
}

/// Paging flags of v3 list commands.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page to retrieve, starting at 1
    #[arg(long)]
    pub page: Option<i32>,

    /// Resources per page (1-5000)
    #[arg(long)]
    pub per_page: Option<i32>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage v3 packages
    #[command(visible_alias = "pkg")]
    Package(PackageCommand),

    /// Work with v3 applications
    App(AppCommand),

    /// Manage v2 domains
    Domain(DomainCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

/// Maps a command failure to the process exit code.
///
/// ```rust
/// use cloudfoundry_client::cli::exit_code;
/// use cloudfoundry_client::exit_codes;
///
/// let error = anyhow::anyhow!("boom");
/// assert_eq!(exit_code(&error), exit_codes::ERROR);
/// ```
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::InvalidRequest(_)) => exit_codes::INVALID_REQUEST,
        Some(Error::Platform(platform)) => match platform.status {
            401 | 403 => exit_codes::AUTH_ERROR,
            404 => exit_codes::NOT_FOUND,
            _ => exit_codes::PLATFORM_ERROR,
        },
        _ => exit_codes::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{ValidationErrors, Violation};
    use crate::api::PlatformError;

    fn platform(status: u16) -> anyhow::Error {
        Error::Platform(PlatformError {
            status,
            code: "10000".to_string(),
            description: "nope".to_string(),
            error_code: None,
        })
        .into()
    }

    #[test]
    fn test_exit_codes() {
        let invalid: anyhow::Error = Error::InvalidRequest(ValidationErrors(vec![Violation {
            field: "id",
            message: "id must be specified".to_string(),
        }]))
        .into();

        assert_eq!(exit_code(&invalid), exit_codes::INVALID_REQUEST);
        assert_eq!(exit_code(&platform(401)), exit_codes::AUTH_ERROR);
        assert_eq!(exit_code(&platform(404)), exit_codes::NOT_FOUND);
        assert_eq!(exit_code(&platform(422)), exit_codes::PLATFORM_ERROR);
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cf",
            "package",
            "get",
            "guid-1",
            "--api",
            "https://api.example.com",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.global.api.as_deref(), Some("https://api.example.com"));
        assert!(cli.global.json);
    }
}
