//
//  cloudfoundry-client
//  api/v2/spaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The v2 space entity.

use serde::{Deserialize, Serialize};

use super::Resource;

/// A space, as returned inside a v2 resource envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceEntity {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "organization_guid", default)]
    pub organization_id: Option<String>,

    #[serde(rename = "space_quota_definition_guid", default)]
    pub space_quota_definition_id: Option<String>,

    #[serde(default)]
    pub allow_ssh: Option<bool>,

    #[serde(default)]
    pub organization_url: Option<String>,

    #[serde(default)]
    pub developers_url: Option<String>,

    #[serde(default)]
    pub managers_url: Option<String>,

    #[serde(default)]
    pub auditors_url: Option<String>,

    #[serde(default)]
    pub apps_url: Option<String>,

    #[serde(default)]
    pub routes_url: Option<String>,

    #[serde(default)]
    pub domains_url: Option<String>,

    #[serde(default)]
    pub service_instances_url: Option<String>,

    #[serde(default)]
    pub app_events_url: Option<String>,

    #[serde(default)]
    pub events_url: Option<String>,

    #[serde(default)]
    pub security_groups_url: Option<String>,
}

/// A space resource.
pub type SpaceResource = Resource<SpaceEntity>;
