//
//  cloudfoundry-client
//  cli/domain.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Domain commands
//!
//! Domains are the host names routes live under. A domain owned by an
//! organization is private; otherwise it is shared by every organization.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::v2::domains::{
    CreateDomainRequest, DeleteDomainRequest, DomainResource, Domains, GetDomainRequest,
    ListDomainSpacesRequest, ListDomainsRequest,
};
use crate::api::v2::spaces::SpaceResource;
use crate::api::v2::{OrderDirection, PaginatedResponse};
use crate::output::{
    format_bool, format_state, or_dash, print_field, print_header, write_json, TableBuilder,
    TableOutput,
};

use super::GlobalOptions;

/// Manage v2 domains
#[derive(Args, Debug)]
pub struct DomainCommand {
    #[command(subcommand)]
    pub command: DomainSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DomainSubcommand {
    /// Create a domain
    Create(CreateArgs),

    /// Delete a domain
    Delete(DeleteArgs),

    /// Show a domain
    #[command(visible_alias = "view")]
    Get(IdArgs),

    /// List domains
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// List the spaces a domain is visible to
    Spaces(SpacesArgs),
}

/// Paging flags of v2 list commands.
#[derive(Args, Debug, Clone, Default)]
pub struct V2PageArgs {
    /// Page to retrieve, starting at 1
    #[arg(long)]
    pub page: Option<i32>,

    /// Resources per page (1-100)
    #[arg(long)]
    pub results_per_page: Option<i32>,

    /// Sort direction (asc or desc)
    #[arg(long, value_parser = parse_order_direction)]
    pub order_direction: Option<OrderDirection>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Domain name, e.g. apps.example.com
    pub name: String,

    /// Whether routes under the domain may have a host (true or false)
    #[arg(long)]
    pub wildcard: Option<bool>,

    /// GUID of the organization owning a private domain
    #[arg(long)]
    pub owning_organization: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Domain GUID
    pub id: String,

    /// Delete in a background job
    #[arg(long = "async")]
    pub async_: bool,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Domain GUID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by domain name (repeatable)
    #[arg(long = "name")]
    pub names: Vec<String>,

    /// Filter by owning organization GUID (repeatable)
    #[arg(long = "owning-organization")]
    pub owning_organizations: Vec<String>,

    #[command(flatten)]
    pub paging: V2PageArgs,
}

#[derive(Args, Debug)]
pub struct SpacesArgs {
    /// Domain GUID
    pub id: String,

    /// Filter by space name (repeatable)
    #[arg(long = "name")]
    pub names: Vec<String>,

    /// Filter by organization GUID (repeatable)
    #[arg(long = "organization")]
    pub organizations: Vec<String>,

    /// Filter by developer user GUID (repeatable)
    #[arg(long = "developer")]
    pub developers: Vec<String>,

    /// Filter by application GUID (repeatable)
    #[arg(long = "app")]
    pub apps: Vec<String>,

    #[command(flatten)]
    pub paging: V2PageArgs,
}

fn parse_order_direction(s: &str) -> Result<OrderDirection, String> {
    s.parse()
}

impl TableOutput for DomainResource {
    fn print_table(&self, color: bool) {
        let entity = self.entity.clone().unwrap_or_default();
        let metadata = self.metadata.clone().unwrap_or_default();

        print_header(&or_dash(entity.name.as_deref()), color);
        println!();
        print_field("GUID", &or_dash(metadata.id.as_deref()), color);
        print_field(
            "Owning organization",
            entity.owning_organization_id.as_deref().unwrap_or("shared"),
            color,
        );
        print_field(
            "Wildcard",
            &entity
                .wildcard
                .map(|w| format_bool(w, color))
                .unwrap_or_else(|| "-".to_string()),
            color,
        );
        print_field("Created", &or_dash(metadata.created_at.as_deref()), color);
    }
}

impl TableOutput for PaginatedResponse<DomainResource> {
    fn print_table(&self, color: bool) {
        if self.resources.is_empty() {
            println!("No domains found.");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["GUID", "NAME", "OWNING ORGANIZATION", "WILDCARD"])
            .rows(self.resources.iter().map(|d| {
                let entity = d.entity.clone().unwrap_or_default();
                vec![
                    or_dash(d.id()),
                    or_dash(entity.name.as_deref()),
                    entity
                        .owning_organization_id
                        .unwrap_or_else(|| "shared".to_string()),
                    entity
                        .wildcard
                        .map(|w| format_bool(w, color))
                        .unwrap_or_else(|| "-".to_string()),
                ]
            }))
            .print();

        print_page_footer(self.resources.len(), self.total_results, "domain(s)", self.has_next());
    }
}

impl TableOutput for PaginatedResponse<SpaceResource> {
    fn print_table(&self, color: bool) {
        if self.resources.is_empty() {
            println!("No spaces found.");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["GUID", "NAME", "ORGANIZATION", "SSH"])
            .rows(self.resources.iter().map(|s| {
                let entity = s.entity.clone().unwrap_or_default();
                vec![
                    or_dash(s.id()),
                    or_dash(entity.name.as_deref()),
                    or_dash(entity.organization_id.as_deref()),
                    entity
                        .allow_ssh
                        .map(|a| format_bool(a, color))
                        .unwrap_or_else(|| "-".to_string()),
                ]
            }))
            .print();

        print_page_footer(self.resources.len(), self.total_results, "space(s)", self.has_next());
    }
}

fn print_page_footer(shown: usize, total: Option<u32>, noun: &str, has_next: bool) {
    let total = total
        .map(|t| t.to_string())
        .unwrap_or_else(|| "?".to_string());
    println!("Showing {} of {} {}", shown, total, noun);
    if has_next {
        println!("More results available; use --page to continue.");
    }
}

impl DomainCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            DomainSubcommand::Create(args) => self.create(args, global).await,
            DomainSubcommand::Delete(args) => self.delete(args, global).await,
            DomainSubcommand::Get(args) => self.get(args, global).await,
            DomainSubcommand::List(args) => self.list(args, global).await,
            DomainSubcommand::Spaces(args) => self.spaces(args, global).await,
        }
    }

    /// Create a domain
    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let domain = client
            .domains()
            .create(&CreateDomainRequest {
                name: Some(args.name.clone()),
                owning_organization_id: args.owning_organization.clone(),
                wildcard: args.wildcard,
            })
            .await?;

        global.writer().write(&domain)
    }

    /// Delete a domain
    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let job = client
            .domains()
            .delete(&DeleteDomainRequest {
                id: Some(args.id.clone()),
                async_: args.async_.then_some(true),
            })
            .await?;

        if global.json {
            return write_json(&job);
        }

        match job.entity {
            Some(entity) => {
                let status = entity.status.as_deref().unwrap_or("queued");
                println!(
                    "{} Delete of domain {} scheduled as job {} ({})",
                    style("→").cyan(),
                    args.id,
                    or_dash(entity.id.as_deref()),
                    format_state(status, console::colors_enabled())
                );
            }
            None => global
                .writer()
                .write_success(&format!("Deleted domain {}", args.id)),
        }

        Ok(())
    }

    /// Show a domain
    async fn get(&self, args: &IdArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let domain = client
            .domains()
            .get(&GetDomainRequest {
                id: Some(args.id.clone()),
            })
            .await?;

        global.writer().write(&domain)
    }

    /// List domains
    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let page = client
            .domains()
            .list(&ListDomainsRequest {
                names: args.names.clone(),
                owning_organization_ids: args.owning_organizations.clone(),
                page: args.paging.page,
                results_per_page: args.paging.results_per_page,
                order_direction: args.paging.order_direction,
            })
            .await?;

        global.writer().write(&page)
    }

    /// List the spaces of a domain
    async fn spaces(&self, args: &SpacesArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let page = client
            .domains()
            .list_spaces(&ListDomainSpacesRequest {
                id: Some(args.id.clone()),
                application_ids: args.apps.clone(),
                developer_ids: args.developers.clone(),
                names: args.names.clone(),
                organization_ids: args.organizations.clone(),
                page: args.paging.page,
                results_per_page: args.paging.results_per_page,
                order_direction: args.paging.order_direction,
            })
            .await?;

        global.writer().write(&page)
    }
}
