//
//  cloudfoundry-client
//  api/v3/packages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! v3 Packages API.
//!
//! A package holds an application's source: either uploaded bits or a
//! pointer to a Docker image. Staging a package produces a droplet.
//!
//! # Package Lifecycle
//!
//! ```text
//! bits:   AWAITING_UPLOAD -> PROCESSING_UPLOAD -> READY
//!                                              \-> FAILED
//! docker: READY
//! ```
//!
//! # Operations
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `POST /v3/apps/{application_id}/packages` | [`CreatePackageRequest`] |
//! | `POST /v3/apps/{application_id}/packages?source_package_guid=` | [`CopyPackageRequest`] |
//! | `GET /v3/packages/{id}` | [`GetPackageRequest`] |
//! | `GET /v3/packages` | [`ListPackagesRequest`] |
//! | `DELETE /v3/packages/{id}` | [`DeletePackageRequest`] |
//! | `POST /v3/packages/{id}/upload` | [`UploadPackageRequest`] |
//! | `GET /v3/packages/{id}/download` | [`DownloadPackageRequest`] |
//! | `POST /v3/packages/{id}/droplets` | [`StagePackageRequest`] |
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudfoundry_client::api::CloudFoundryClient;
//! use cloudfoundry_client::api::v3::packages::{CreatePackageRequest, PackageType, Packages};
//!
//! # async fn example(client: CloudFoundryClient) -> cloudfoundry_client::api::common::Result<()> {
//! let request = CreatePackageRequest {
//!     application_id: Some("app-guid".to_string()),
//!     package_type: Some(PackageType::Docker),
//!     url: Some("docker://cloudfoundry/runtime-ci".to_string()),
//! };
//!
//! let package = client.packages().create(&request).await?;
//! assert_eq!(package.state.as_deref(), Some("READY"));
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use super::{Hash, Linked, Links, PaginatedResponse};
use crate::api::client::{CloudFoundryClient, Query};
use crate::api::common::validation::{self, required};
use crate::api::common::{Download, Result, Validate, ValidationResult};

/// Main entry point to the v3 Packages API.
#[async_trait]
pub trait Packages {
    /// Copies the bits of a source package into a new package of the application.
    async fn copy(&self, request: &CopyPackageRequest) -> Result<CopyPackageResponse>;

    /// Creates a package for an application.
    async fn create(&self, request: &CreatePackageRequest) -> Result<CreatePackageResponse>;

    /// Deletes a package.
    async fn delete(&self, request: &DeletePackageRequest) -> Result<()>;

    /// Downloads a package's bits as a stream of chunks.
    async fn download(&self, request: &DownloadPackageRequest) -> Result<Download>;

    /// Retrieves a package.
    async fn get(&self, request: &GetPackageRequest) -> Result<GetPackageResponse>;

    /// Lists packages visible to the caller.
    async fn list(&self, request: &ListPackagesRequest) -> Result<ListPackagesResponse>;

    /// Stages a package, producing a droplet.
    async fn stage(&self, request: &StagePackageRequest) -> Result<StagePackageResponse>;

    /// Uploads bits into a `bits` package.
    async fn upload(&self, request: &UploadPackageRequest) -> Result<UploadPackageResponse>;
}

/// The kind of package to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    /// Application bits uploaded by the caller.
    Bits,
    /// A Docker image reference.
    Docker,
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bits => f.write_str("bits"),
            Self::Docker => f.write_str("docker"),
        }
    }
}

impl std::str::FromStr for PackageType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bits" => Ok(Self::Bits),
            "docker" => Ok(Self::Docker),
            other => Err(format!("unknown package type '{}'", other)),
        }
    }
}

/// A v3 package as returned by every package operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// The package guid.
    #[serde(rename = "guid", default)]
    pub id: Option<String>,

    /// `bits` or `docker`.
    #[serde(rename = "type", default)]
    pub package_type: Option<String>,

    /// Checksum of the uploaded bits.
    #[serde(default)]
    pub hash: Option<Hash>,

    /// Docker image URL, for docker packages.
    #[serde(default)]
    pub url: Option<String>,

    /// Lifecycle state, e.g. `AWAITING_UPLOAD` or `READY`.
    #[serde(default)]
    pub state: Option<String>,

    /// Processing error, if the upload failed.
    #[serde(default)]
    pub error: Option<String>,

    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,

    /// ISO 8601 timestamp of the last update.
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Related resources.
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Linked for Package {
    fn links(&self) -> &Links {
        &self.links
    }
}

/// A droplet, the result of staging a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Droplet {
    /// The droplet guid.
    #[serde(rename = "guid", default)]
    pub id: Option<String>,

    /// Staging state, e.g. `PENDING`, `STAGED` or `FAILED`.
    #[serde(default)]
    pub state: Option<String>,

    /// Checksum of the droplet.
    #[serde(default)]
    pub hash: Option<Hash>,

    /// The buildpack used to stage.
    #[serde(default)]
    pub buildpack: Option<String>,

    /// Staging error, if staging failed.
    #[serde(default)]
    pub error: Option<String>,

    /// Environment variables the droplet was staged with.
    #[serde(default)]
    pub environment_variables: BTreeMap<String, serde_json::Value>,

    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,

    /// ISO 8601 timestamp of the last update.
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Related resources.
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Linked for Droplet {
    fn links(&self) -> &Links {
        &self.links
    }
}

/// The request payload for the Copy Package operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyPackageRequest {
    /// The application receiving the copy.
    pub application_id: Option<String>,

    /// The package to copy from.
    pub source_package_id: Option<String>,
}

impl Validate for CopyPackageRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result
            .require_id("application_id", &self.application_id)
            .require_id("source_package_id", &self.source_package_id);
        result
    }
}

/// The response payload for the Copy Package operation.
pub type CopyPackageResponse = Package;

/// The request payload for the Create Package operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatePackageRequest {
    /// The owning application; part of the path.
    #[serde(skip)]
    pub application_id: Option<String>,

    /// The kind of package.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub package_type: Option<PackageType>,

    /// Docker image URL, for docker packages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Validate for CreatePackageRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result
            .require_id("application_id", &self.application_id)
            .require("type", &self.package_type);
        result
    }
}

/// The response payload for the Create Package operation.
pub type CreatePackageResponse = Package;

/// The request payload for the Delete Package operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePackageRequest {
    /// The package to delete.
    pub id: Option<String>,
}

impl Validate for DeletePackageRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_id("id", &self.id);
        result
    }
}

/// The request payload for the Download Package operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadPackageRequest {
    /// The package to download.
    pub id: Option<String>,
}

impl Validate for DownloadPackageRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_id("id", &self.id);
        result
    }
}

/// The request payload for the Get Package operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPackageRequest {
    /// The package to retrieve.
    pub id: Option<String>,
}

impl Validate for GetPackageRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_id("id", &self.id);
        result
    }
}

/// The response payload for the Get Package operation.
pub type GetPackageResponse = Package;

/// The request payload for the List Packages operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPackagesRequest {
    /// Page to retrieve, starting at 1.
    pub page: Option<i32>,

    /// Resources per page, 1 to 5000.
    pub per_page: Option<i32>,
}

impl Validate for ListPackagesRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        validation::validate_v3_paging(&mut result, self.page, self.per_page);
        result
    }
}

/// The response payload for the List Packages operation.
pub type ListPackagesResponse = PaginatedResponse<Package>;

/// The request payload for the Stage Package operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StagePackageRequest {
    /// The package to stage; part of the path.
    #[serde(skip)]
    pub id: Option<String>,

    /// Buildpack name or git URL; detected when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildpack: Option<String>,

    /// Environment variables visible during staging.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub environment_variables: BTreeMap<String, String>,

    /// Stack to stage on, e.g. `cflinuxfs2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,

    /// Memory limit for the staging task, in MB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<u64>,

    /// Disk limit for the staging task, in MB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_limit: Option<u64>,
}

impl Validate for StagePackageRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_id("id", &self.id);
        result
    }
}

/// The response payload for the Stage Package operation.
pub type StagePackageResponse = Droplet;

/// A file the platform may already hold, sent along with an upload so
/// unchanged files need not be transferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResource {
    /// Path of the file inside the package.
    #[serde(rename = "fn")]
    pub path: String,

    /// SHA-1 of the file contents.
    pub sha1: String,

    /// File size in bytes.
    pub size: u64,
}

/// The request payload for the Upload Package operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadPackageRequest {
    /// The package receiving the bits.
    pub id: Option<String>,

    /// Local zip file with the application bits.
    pub file: Option<PathBuf>,

    /// Files already known to the platform.
    pub resources: Vec<UploadResource>,
}

impl Validate for UploadPackageRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require_id("id", &self.id).require("file", &self.file);
        result
    }
}

/// The response payload for the Upload Package operation.
pub type UploadPackageResponse = Package;

/// [`Packages`] over HTTP.
#[derive(Debug, Clone)]
pub struct PackagesClient {
    client: CloudFoundryClient,
}

impl PackagesClient {
    pub fn new(client: CloudFoundryClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Packages for PackagesClient {
    async fn copy(&self, request: &CopyPackageRequest) -> Result<CopyPackageResponse> {
        request.validate().into_result()?;
        let (application_id, source_package_id) =
            (required(&request.application_id), required(&request.source_package_id));

        let query = Query::new().push("source_package_guid", source_package_id);
        let url = self
            .client
            .url(&["v3", "apps", application_id, "packages"], &query)?;

        self.client.post(url, None::<&()>).await
    }

    async fn create(&self, request: &CreatePackageRequest) -> Result<CreatePackageResponse> {
        request.validate().into_result()?;
        let application_id = required(&request.application_id);

        let url = self
            .client
            .url(&["v3", "apps", application_id, "packages"], &Query::new())?;

        self.client.post(url, Some(request)).await
    }

    async fn delete(&self, request: &DeletePackageRequest) -> Result<()> {
        request.validate().into_result()?;
        let id = required(&request.id);

        let url = self.client.url(&["v3", "packages", id], &Query::new())?;
        self.client.delete::<serde_json::Value>(url).await?;
        Ok(())
    }

    async fn download(&self, request: &DownloadPackageRequest) -> Result<Download> {
        request.validate().into_result()?;
        let id = required(&request.id);

        let url = self
            .client
            .url(&["v3", "packages", id, "download"], &Query::new())?;

        self.client.get_stream(url).await
    }

    async fn get(&self, request: &GetPackageRequest) -> Result<GetPackageResponse> {
        request.validate().into_result()?;
        let id = required(&request.id);

        let url = self.client.url(&["v3", "packages", id], &Query::new())?;
        self.client.get(url).await
    }

    async fn list(&self, request: &ListPackagesRequest) -> Result<ListPackagesResponse> {
        request.validate().into_result()?;

        let query = Query::new()
            .param("page", request.page)
            .param("per_page", request.per_page);
        let url = self.client.url(&["v3", "packages"], &query)?;

        self.client.get(url).await
    }

    async fn stage(&self, request: &StagePackageRequest) -> Result<StagePackageResponse> {
        request.validate().into_result()?;
        let id = required(&request.id);

        let url = self
            .client
            .url(&["v3", "packages", id, "droplets"], &Query::new())?;

        self.client.post(url, Some(request)).await
    }

    async fn upload(&self, request: &UploadPackageRequest) -> Result<UploadPackageResponse> {
        request.validate().into_result()?;
        let id = required(&request.id);
        let file = request.file.as_deref().unwrap_or_else(|| std::path::Path::new(""));

        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "application.zip".to_string());
        let bits = tokio::fs::read(file).await?;
        tracing::debug!("uploading {} ({} bytes)", file.display(), bits.len());

        let mut form = Form::new().part(
            "bits",
            Part::bytes(bits)
                .file_name(file_name)
                .mime_str("application/zip")?,
        );
        if !request.resources.is_empty() {
            form = form.text("resources", serde_json::to_string(&request.resources)?);
        }

        let url = self
            .client
            .url(&["v3", "packages", id, "upload"], &Query::new())?;

        self.client.post_multipart(url, form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_body_omits_path_and_unset_fields() {
        let request = CreatePackageRequest {
            application_id: Some("test-application-id".to_string()),
            package_type: Some(PackageType::Bits),
            url: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({"type": "bits"}));
    }

    #[test]
    fn test_create_invalid_request_lists_every_field() {
        let result = CreatePackageRequest::default().validate();
        assert_eq!(result.fields(), vec!["application_id", "type"]);
    }

    #[test]
    fn test_copy_invalid_request_lists_every_field() {
        let result = CopyPackageRequest::default().validate();
        assert_eq!(result.fields(), vec!["application_id", "source_package_id"]);
    }

    #[test]
    fn test_list_without_filters_is_valid() {
        assert!(ListPackagesRequest::default().validate().is_valid());
    }

    #[test]
    fn test_list_negative_page_is_invalid() {
        let request = ListPackagesRequest {
            page: Some(-1),
            ..Default::default()
        };
        assert_eq!(request.validate().fields(), vec!["page"]);
    }

    #[test]
    fn test_upload_requires_id_and_file() {
        let result = UploadPackageRequest::default().validate();
        assert_eq!(result.fields(), vec!["id", "file"]);
    }

    #[test]
    fn test_stage_body_skips_empty_environment() {
        let request = StagePackageRequest {
            id: Some("test-id".to_string()),
            stack: Some("cflinuxfs2".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({"stack": "cflinuxfs2"}));
    }

    #[test]
    fn test_package_type_parses_case_insensitively() {
        assert_eq!("Docker".parse::<PackageType>(), Ok(PackageType::Docker));
        assert!("zip".parse::<PackageType>().is_err());
    }
}
