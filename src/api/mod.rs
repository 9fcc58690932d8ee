//
//  cloudfoundry-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the Cloud Foundry Cloud
//! Controller REST API.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication and request handling
//! - [`v3`]: v3 resources (packages, application packages)
//! - [`v2`]: v2 resources (domains and their spaces)
//! - [`common`]: Errors, request validation and streamed downloads
//!
//! Every operation validates its request first. An invalid request fails
//! with [`Error::InvalidRequest`] and never touches the network; otherwise
//! exactly one HTTP request is issued.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloudfoundry_client::api::CloudFoundryClient;
//! use cloudfoundry_client::auth::Credential;
//!
//! let client = CloudFoundryClient::new("https://api.example.com")
//!     .expect("Failed to create client")
//!     .with_auth(Credential::bearer("your-token"));
//! ```
//!
//! ## Error Handling
//!
//! - `InvalidRequest`: the request failed validation; lists every violation
//! - `Platform`: the Cloud Controller answered with a non-2xx status
//! - `Transport`: connection, I/O, URL or decoding failures

/// Core HTTP client wrapper.
pub mod client;

/// Shared error, validation and download types.
pub mod common;

/// Cloud Controller API v2.
pub mod v2;

/// Cloud Controller API v3.
pub mod v3;

pub use client::CloudFoundryClient;
pub use common::{Error, PlatformError, Result};
