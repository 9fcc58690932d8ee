//
//  cloudfoundry-client
//  api/v2/domains.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! v2 Domains API.
//!
//! Domains are the host names routes are registered under. A domain with
//! an owning organization is private to it; one without is shared.
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudfoundry_client::api::CloudFoundryClient;
//! use cloudfoundry_client::api::v2::domains::{Domains, ListDomainsRequest};
//!
//! # async fn example(client: CloudFoundryClient) -> cloudfoundry_client::api::common::Result<()> {
//! let page = client
//!     .domains()
//!     .list(&ListDomainsRequest {
//!         names: vec!["example.com".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for domain in &page.resources {
//!     println!("{:?}", domain.id());
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::spaces::SpaceResource;
use super::{filter, paging, JobEntity, OrderDirection, PaginatedResponse, Resource};
use crate::api::client::{CloudFoundryClient, Query};
use crate::api::common::validation::{self, required};
use crate::api::common::{Result, Validate, ValidationResult};

/// Main entry point to the v2 Domains API.
#[async_trait]
pub trait Domains {
    /// Creates a domain.
    async fn create(&self, request: &CreateDomainRequest) -> Result<CreateDomainResponse>;

    /// Deletes a domain. An asynchronous delete returns the job.
    async fn delete(&self, request: &DeleteDomainRequest) -> Result<DeleteDomainResponse>;

    /// Retrieves a domain.
    async fn get(&self, request: &GetDomainRequest) -> Result<GetDomainResponse>;

    /// Lists domains.
    async fn list(&self, request: &ListDomainsRequest) -> Result<ListDomainsResponse>;

    /// Lists the spaces a domain is visible to.
    async fn list_spaces(&self, request: &ListDomainSpacesRequest)
        -> Result<ListDomainSpacesResponse>;
}

/// A domain, as returned inside a v2 resource envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntity {
    #[serde(default)]
    pub name: Option<String>,

    /// The owning organization; absent for shared domains.
    #[serde(rename = "owning_organization_guid", default)]
    pub owning_organization_id: Option<String>,

    #[serde(default)]
    pub owning_organization_url: Option<String>,

    #[serde(default)]
    pub shared_organizations_url: Option<String>,

    #[serde(default)]
    pub spaces_url: Option<String>,

    #[serde(default)]
    pub wildcard: Option<bool>,
}

/// A domain resource.
pub type DomainResource = Resource<DomainEntity>;

/// The request payload for the Create Domain operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDomainRequest {
    /// The domain name, e.g. `example.com`.
    pub name: Option<String>,

    /// The organization that owns the domain. Omit for a shared domain.
    #[serde(
        rename = "owning_organization_guid",
        skip_serializing_if = "Option::is_none"
    )]
    pub owning_organization_id: Option<String>,

    /// Whether the domain accepts routes with a host.
    pub wildcard: Option<bool>,
}

impl Validate for CreateDomainRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result
            .require("name", &self.name)
            .require("wildcard", &self.wildcard);
        result
    }
}

pub type CreateDomainResponse = DomainResource;

/// The request payload for the Delete Domain operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDomainRequest {
    pub id: Option<String>,

    /// Run the delete as a background job.
    pub async_: Option<bool>,
}

impl Validate for DeleteDomainRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_id("id", &self.id);
        result
    }
}

/// The job of an asynchronous delete. Empty when the delete completed
/// synchronously.
pub type DeleteDomainResponse = Resource<JobEntity>;

/// The request payload for the Get Domain operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDomainRequest {
    pub id: Option<String>,
}

impl Validate for GetDomainRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_id("id", &self.id);
        result
    }
}

pub type GetDomainResponse = DomainResource;

/// The request payload for the List Domains operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDomainsRequest {
    /// Filter by domain name.
    pub names: Vec<String>,

    /// Filter by owning organization.
    pub owning_organization_ids: Vec<String>,

    pub page: Option<i32>,

    /// Resources per page, 1 to 100.
    pub results_per_page: Option<i32>,

    pub order_direction: Option<OrderDirection>,
}

impl Validate for ListDomainsRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        validation::validate_v2_paging(&mut result, self.page, self.results_per_page);
        result
    }
}

pub type ListDomainsResponse = PaginatedResponse<DomainResource>;

/// The request payload for the List Domain Spaces operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDomainSpacesRequest {
    /// The domain whose spaces are listed.
    pub id: Option<String>,

    /// Filter by application.
    pub application_ids: Vec<String>,

    /// Filter by developer user.
    pub developer_ids: Vec<String>,

    /// Filter by space name.
    pub names: Vec<String>,

    /// Filter by organization.
    pub organization_ids: Vec<String>,

    pub page: Option<i32>,

    pub results_per_page: Option<i32>,

    pub order_direction: Option<OrderDirection>,
}

impl Validate for ListDomainSpacesRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_id("id", &self.id);
        validation::validate_v2_paging(&mut result, self.page, self.results_per_page);
        result
    }
}

pub type ListDomainSpacesResponse = PaginatedResponse<SpaceResource>;

/// [`Domains`] over HTTP.
#[derive(Debug, Clone)]
pub struct DomainsClient {
    client: CloudFoundryClient,
}

impl DomainsClient {
    pub fn new(client: CloudFoundryClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Domains for DomainsClient {
    async fn create(&self, request: &CreateDomainRequest) -> Result<CreateDomainResponse> {
        request.validate().into_result()?;

        let url = self.client.url(&["v2", "domains"], &Query::new())?;
        self.client.post(url, Some(request)).await
    }

    async fn delete(&self, request: &DeleteDomainRequest) -> Result<DeleteDomainResponse> {
        request.validate().into_result()?;
        let id = required(&request.id);

        let query = Query::new().param("async", request.async_);
        let url = self.client.url(&["v2", "domains", id], &query)?;

        Ok(self.client.delete(url).await?.unwrap_or_default())
    }

    async fn get(&self, request: &GetDomainRequest) -> Result<GetDomainResponse> {
        request.validate().into_result()?;
        let id = required(&request.id);

        let url = self.client.url(&["v2", "domains", id], &Query::new())?;
        self.client.get(url).await
    }

    async fn list(&self, request: &ListDomainsRequest) -> Result<ListDomainsResponse> {
        request.validate().into_result()?;

        let query = filter(Query::new(), "name", &request.names);
        let query = filter(
            query,
            "owning_organization_guid",
            &request.owning_organization_ids,
        );
        let query = paging(
            query,
            request.page,
            request.results_per_page,
            request.order_direction,
        );

        let url = self.client.url(&["v2", "domains"], &query)?;
        self.client.get(url).await
    }

    async fn list_spaces(
        &self,
        request: &ListDomainSpacesRequest,
    ) -> Result<ListDomainSpacesResponse> {
        request.validate().into_result()?;
        let id = required(&request.id);

        let query = filter(Query::new(), "name", &request.names);
        let query = filter(query, "organization_guid", &request.organization_ids);
        let query = filter(query, "developer_guid", &request.developer_ids);
        let query = filter(query, "app_guid", &request.application_ids);
        let query = paging(
            query,
            request.page,
            request.results_per_page,
            request.order_direction,
        );

        let url = self.client.url(&["v2", "domains", id, "spaces"], &query)?;
        self.client.get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_name_and_wildcard() {
        let result = CreateDomainRequest::default().validate();
        assert_eq!(result.fields(), vec!["name", "wildcard"]);
    }

    #[test]
    fn test_create_body_omits_unset_owner() {
        let request = CreateDomainRequest {
            name: Some("example.com".to_string()),
            owning_organization_id: None,
            wildcard: Some(true),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({"name": "example.com", "wildcard": true}));
    }

    #[test]
    fn test_create_body_renames_owner() {
        let request = CreateDomainRequest {
            name: Some("example.com".to_string()),
            owning_organization_id: Some("org-guid".to_string()),
            wildcard: Some(false),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["owning_organization_guid"], "org-guid");
    }

    #[test]
    fn test_list_spaces_requires_id() {
        let request = ListDomainSpacesRequest {
            results_per_page: Some(0),
            ..Default::default()
        };
        assert_eq!(request.validate().fields(), vec!["id", "results_per_page"]);
    }

    #[test]
    fn test_private_domain_entity() {
        let json = r#"{
            "metadata": {"guid": "domain-guid"},
            "entity": {"name": "private.example.com", "owning_organization_guid": "org-guid", "wildcard": true}
        }"#;
        let domain: DomainResource = serde_json::from_str(json).unwrap();
        let entity = domain.entity.unwrap();
        assert_eq!(entity.owning_organization_id.as_deref(), Some("org-guid"));
        assert_eq!(entity.wildcard, Some(true));
    }
}
