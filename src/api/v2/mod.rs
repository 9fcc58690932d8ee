//
//  cloudfoundry-client
//  api/v2/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud Foundry API v2 implementation.
//!
//! v2 resources are wrapped in a `metadata` / `entity` envelope and listed
//! through a page envelope that carries `total_results`, `total_pages` and
//! previous/next URLs.
//!
//! # Module Organization
//!
//! - [`domains`] - Domain create, delete, get, list and space listing
//! - [`spaces`] - The space entity returned by domain space listing
//!
//! # Filters
//!
//! List operations accept filters that become repeated `q` parameters of
//! the form `field IN a,b`. Empty filter lists are not sent.

use serde::{Deserialize, Serialize};

use crate::api::client::Query;

pub mod domains;
pub mod spaces;

/// Identity and timestamps of a v2 resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// The resource guid.
    #[serde(rename = "guid", default)]
    pub id: Option<String>,

    /// Relative URL of the resource.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A v2 resource: metadata plus a typed entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource<E> {
    #[serde(default)]
    pub metadata: Option<Metadata>,

    #[serde(default)]
    pub entity: Option<E>,
}

impl<E> Default for Resource<E> {
    fn default() -> Self {
        Self {
            metadata: None,
            entity: None,
        }
    }
}

impl<E> Resource<E> {
    /// The guid from the metadata, if present.
    pub fn id(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.id.as_deref())
    }
}

/// A page of v2 resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<R> {
    #[serde(default)]
    pub total_results: Option<u32>,

    #[serde(default)]
    pub total_pages: Option<u32>,

    #[serde(default)]
    pub prev_url: Option<String>,

    #[serde(default)]
    pub next_url: Option<String>,

    /// The resources on this page, in server order.
    #[serde(default = "Vec::new")]
    pub resources: Vec<R>,
}

impl<R> Default for PaginatedResponse<R> {
    fn default() -> Self {
        Self {
            total_results: None,
            total_pages: None,
            prev_url: None,
            next_url: None,
            resources: Vec::new(),
        }
    }
}

impl<R> PaginatedResponse<R> {
    /// Returns `true` when the server advertised a next page.
    pub fn has_next(&self) -> bool {
        self.next_url.is_some()
    }
}

/// Sort direction of a v2 list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl std::fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderDirection::Asc => write!(f, "asc"),
            OrderDirection::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for OrderDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(OrderDirection::Asc),
            "desc" => Ok(OrderDirection::Desc),
            _ => Err(format!("Invalid order direction: {}. Use 'asc' or 'desc'", s)),
        }
    }
}

/// State of an asynchronous v2 job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEntity {
    #[serde(rename = "guid", default)]
    pub id: Option<String>,

    /// `queued`, `running`, `finished` or `failed`.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<serde_json::Value>,
}

/// Appends `q=field IN a,b` when `values` is non-empty.
pub(crate) fn filter(query: Query, field: &str, values: &[String]) -> Query {
    if values.is_empty() {
        return query;
    }
    query.push("q", format!("{} IN {}", field, values.join(",")))
}

/// Appends the shared v2 paging and ordering parameters.
pub(crate) fn paging(
    query: Query,
    page: Option<i32>,
    results_per_page: Option<i32>,
    order_direction: Option<OrderDirection>,
) -> Query {
    query
        .param("page", page)
        .param("results-per-page", results_per_page)
        .param("order-direction", order_direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_skips_empty_lists() {
        let query = filter(Query::new(), "name", &[]);
        assert!(query.is_empty());
    }

    #[test]
    fn test_filter_joins_values() {
        let query = filter(
            Query::new(),
            "owning_organization_guid",
            &["org-1".to_string(), "org-2".to_string()],
        );
        assert_eq!(
            query.pairs(),
            &[(
                "q".to_string(),
                "owning_organization_guid IN org-1,org-2".to_string()
            )]
        );
    }

    #[test]
    fn test_paging_uses_hyphenated_keys() {
        let query = paging(Query::new(), Some(2), Some(50), Some(OrderDirection::Desc));
        let keys: Vec<&str> = query.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["page", "results-per-page", "order-direction"]);
        assert_eq!(query.pairs()[2].1, "desc");
    }

    #[test]
    fn test_resource_envelope() {
        let json = r#"{
            "metadata": {"guid": "abc", "url": "/v2/jobs/abc", "created_at": "2016-06-08T16:41:41Z"},
            "entity": {"guid": "abc", "status": "queued"}
        }"#;
        let job: Resource<JobEntity> = serde_json::from_str(json).unwrap();
        assert_eq!(job.id(), Some("abc"));
        assert_eq!(job.entity.unwrap().status.as_deref(), Some("queued"));
    }
}
