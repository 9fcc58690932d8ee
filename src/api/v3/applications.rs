//
//  cloudfoundry-client
//  api/v3/applications.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! v3 Applications API.
//!
//! Operations scoped to a single application. Only the package listing is
//! bound; the application's own lifecycle is managed elsewhere.

use async_trait::async_trait;

use super::packages::Package;
use super::PaginatedResponse;
use crate::api::client::{CloudFoundryClient, Query};
use crate::api::common::validation::{self, required};
use crate::api::common::{Result, Validate, ValidationResult};

/// Main entry point to the v3 Applications API.
#[async_trait]
pub trait Applications {
    /// Lists the packages of an application.
    async fn list_packages(
        &self,
        request: &ListApplicationPackagesRequest,
    ) -> Result<ListApplicationPackagesResponse>;
}

/// The request payload for the List Application Packages operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListApplicationPackagesRequest {
    /// The application whose packages are listed.
    pub application_id: Option<String>,

    /// Page to retrieve, starting at 1.
    pub page: Option<i32>,

    /// Resources per page, 1 to 5000.
    pub per_page: Option<i32>,
}

impl Validate for ListApplicationPackagesRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_id("application_id", &self.application_id);
        validation::validate_v3_paging(&mut result, self.page, self.per_page);
        result
    }
}

/// The response payload for the List Application Packages operation.
pub type ListApplicationPackagesResponse = PaginatedResponse<Package>;

/// [`Applications`] over HTTP.
#[derive(Debug, Clone)]
pub struct ApplicationsClient {
    client: CloudFoundryClient,
}

impl ApplicationsClient {
    pub fn new(client: CloudFoundryClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Applications for ApplicationsClient {
    async fn list_packages(
        &self,
        request: &ListApplicationPackagesRequest,
    ) -> Result<ListApplicationPackagesResponse> {
        request.validate().into_result()?;
        let application_id = required(&request.application_id);

        let query = Query::new()
            .param("page", request.page)
            .param("per_page", request.per_page);
        let url = self
            .client
            .url(&["v3", "apps", application_id, "packages"], &query)?;

        self.client.get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_application_and_bad_page_reported_together() {
        let request = ListApplicationPackagesRequest {
            page: Some(0),
            ..Default::default()
        };
        assert_eq!(request.validate().fields(), vec!["application_id", "page"]);
    }
}
