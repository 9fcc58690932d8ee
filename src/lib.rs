//
//  cloudfoundry-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Cloud Foundry Client Library
//!
//! A typed client for the Cloud Foundry Cloud Controller REST API, plus the
//! `cf` command-line tool built on top of it.
//!
//! ## Overview
//!
//! Each resource exposes one async method per operation. An operation takes
//! a request value, validates it locally, issues exactly one HTTP request,
//! and returns a typed response or an [`api::Error`].
//!
//! ## Features
//!
//! - **v3 Packages**: create, copy, upload, download, stage, get, list, delete
//! - **v3 Applications**: list an application's packages
//! - **v2 Domains**: create, delete, get, list, list spaces
//! - **Local validation**: every missing field is reported at once
//! - **Streamed downloads**: package bits are never buffered whole
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client, resources and shared types
//! - [`auth`]: Credentials applied to every request
//! - [`config`]: Configuration file management
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cloudfoundry_client::api::CloudFoundryClient;
//! use cloudfoundry_client::api::v3::packages::{ListPackagesRequest, Packages};
//! use cloudfoundry_client::Config;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let client = CloudFoundryClient::from_config(&config)?;
//!
//! let page = client.packages().list(&ListPackagesRequest::default()).await?;
//! for package in page.resources {
//!     println!("{:?} {:?}", package.id, package.state);
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// API client for the Cloud Controller.
pub mod api;

/// Authentication credentials.
pub mod auth;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/cf/config.toml`
/// - macOS: `~/Library/Application Support/cf/config.toml`
/// - Windows: `%APPDATA%\cf\config.toml`
pub mod config;

/// Output formatting for different modes.
///
/// - Table format: Human-readable tables for interactive use
/// - JSON format: Structured output for scripting and automation
pub mod output;

pub use cli::Cli;
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "cf";

/// Application version constant, taken from Cargo.toml at compile time.
///
/// ```rust
/// use cloudfoundry_client::VERSION;
///
/// println!("cf version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// ```rust,no_run
/// use cloudfoundry_client::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::INVALID_REQUEST);
/// ```
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// The request failed local validation and was never sent.
    pub const INVALID_REQUEST: i32 = 3;

    /// Authentication required or rejected (HTTP 401 or 403).
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// The Cloud Controller rejected the request with any other status.
    pub const PLATFORM_ERROR: i32 = 16;
}
