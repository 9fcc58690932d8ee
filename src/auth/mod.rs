//
//  cloudfoundry-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials attached to every outgoing Cloud Foundry request.
//!
//! The client does not obtain, refresh or store tokens. A caller that holds
//! a UAA access token (for example the output of `cf oauth-token`) hands it
//! over as a [`Credential::Bearer`]; the client sends it unchanged.
//!
//! ## Example
//!
//! ```rust
//! use cloudfoundry_client::auth::Credential;
//!
//! // The "bearer " prefix printed by `cf oauth-token` is accepted and stripped
//! let credential = Credential::bearer("bearer eyJhbGciOiJSUzI1NiJ9");
//! assert_eq!(credential, Credential::Bearer { token: "eyJhbGciOiJSUzI1NiJ9".to_string() });
//! ```

use reqwest::RequestBuilder;

/// Authentication credentials applied to API requests.
///
/// # Variants
///
/// - `Bearer`: an OAuth access token issued by UAA. This is what Cloud
///   Foundry's Cloud Controller expects.
/// - `Basic`: username and password, for gateways and test doubles that
///   front the API with HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// OAuth 2.0 access token sent as `Authorization: Bearer <token>`.
    Bearer {
        /// The raw access token, without any `bearer ` prefix.
        token: String,
    },
    /// HTTP Basic authentication.
    Basic {
        /// The username for authentication.
        username: String,
        /// The password for authentication.
        password: String,
    },
}

impl Credential {
    /// Creates a bearer credential, stripping a leading `bearer ` if present.
    pub fn bearer(token: impl AsRef<str>) -> Self {
        let token = token.as_ref().trim();
        let token = token
            .strip_prefix("bearer ")
            .or_else(|| token.strip_prefix("Bearer "))
            .unwrap_or(token);

        Self::Bearer {
            token: token.trim().to_string(),
        }
    }

    /// Creates a basic credential.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Adds the matching `Authorization` header to `request`.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Bearer { token } => request.bearer_auth(token),
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
        }
    }
}

// Secrets stay out of logs and panic messages.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &"<redacted>").finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_strips_prefix() {
        assert_eq!(
            Credential::bearer("Bearer abc.def"),
            Credential::Bearer { token: "abc.def".to_string() }
        );
        assert_eq!(
            Credential::bearer("abc.def\n"),
            Credential::Bearer { token: "abc.def".to_string() }
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", Credential::basic("admin", "s3cret"));
        assert!(debug.contains("admin"));
        assert!(!debug.contains("s3cret"));

        let debug = format!("{:?}", Credential::bearer("token-value"));
        assert!(!debug.contains("token-value"));
    }
}
