//
//  cloudfoundry-client
//  api/v3/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud Foundry API v3 implementation.
//!
//! This module contains the v3 resources and the types every v3 payload
//! shares: [`Link`], [`Hash`], [`Pagination`] and the generic
//! [`PaginatedResponse`] list envelope.
//!
//! # Module Organization
//!
//! - [`packages`] - Package create, copy, upload, download, stage and friends
//! - [`applications`] - Operations scoped to an application
//!
//! # Links
//!
//! Every v3 resource carries a `_links` object mapping relation names
//! (`self`, `app`, `upload`, `download`, `stage`, `assign_current_droplet`, ...)
//! to a [`Link`]. The client never follows them; they are exposed verbatim
//! through [`Linked`] so callers can build the next request themselves.
//!
//! ```rust
//! use cloudfoundry_client::api::v3::{Link, Linked};
//! use cloudfoundry_client::api::v3::packages::Package;
//!
//! let json = r#"{
//!     "guid": "guid-9067cc41",
//!     "_links": {
//!         "self": {"href": "/v3/packages/guid-9067cc41"},
//!         "upload": {"href": "/v3/packages/guid-9067cc41/upload", "method": "POST"}
//!     }
//! }"#;
//!
//! let package: Package = serde_json::from_str(json).unwrap();
//! assert_eq!(
//!     package.link("upload"),
//!     Some(&Link::with_method("/v3/packages/guid-9067cc41/upload", "POST"))
//! );
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod applications;
pub mod packages;

/// A named relation to another resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relative URL of the related resource.
    pub href: String,

    /// HTTP method to use when following the link, when it is not GET.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl Link {
    /// A link without a method.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            method: None,
        }
    }

    /// A link annotated with the HTTP method to use.
    pub fn with_method(href: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            method: Some(method.into()),
        }
    }
}

/// Relation name to link. A relation appears at most once.
pub type Links = BTreeMap<String, Link>;

/// Implemented by every v3 resource that carries `_links`.
pub trait Linked {
    /// All links of the resource.
    fn links(&self) -> &Links;

    /// The link for relation `rel`, if present.
    fn link(&self, rel: &str) -> Option<&Link> {
        self.links().get(rel)
    }
}

/// A checksum of a package's or droplet's bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hash {
    /// Algorithm name, e.g. `sha1`.
    #[serde(rename = "type", default)]
    pub hash_type: Option<String>,

    /// Hex digest; `null` until bits have been uploaded.
    #[serde(default)]
    pub value: Option<String>,
}

/// Navigation metadata of a v3 result page.
///
/// ```json
/// {
///   "total_results": 3,
///   "first": {"href": "/v3/packages?page=1&per_page=2"},
///   "last": {"href": "/v3/packages?page=2&per_page=2"},
///   "next": {"href": "/v3/packages?page=2&per_page=2"}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of resources across all pages.
    #[serde(default)]
    pub total_results: Option<u32>,

    /// Link to the first page.
    #[serde(default)]
    pub first: Option<Link>,

    /// Link to the last page.
    #[serde(default)]
    pub last: Option<Link>,

    /// Link to the next page; absent on the last page.
    #[serde(default)]
    pub next: Option<Link>,

    /// Link to the previous page; absent on the first page.
    #[serde(default)]
    pub previous: Option<Link>,
}

/// A page of v3 resources.
///
/// `resources` keeps the order the server returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<R> {
    /// Page metadata.
    #[serde(default)]
    pub pagination: Pagination,

    /// The resources on this page, in server order.
    #[serde(default = "Vec::new")]
    pub resources: Vec<R>,
}

impl<R> Default for PaginatedResponse<R> {
    fn default() -> Self {
        Self {
            pagination: Pagination::default(),
            resources: Vec::new(),
        }
    }
}

impl<R> PaginatedResponse<R> {
    /// Returns `true` when the server advertised a next page.
    pub fn has_next(&self) -> bool {
        self.pagination.next.is_some()
    }
}
