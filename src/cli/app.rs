//
//  cloudfoundry-client
//  cli/app.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Application commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::v3::applications::{Applications, ListApplicationPackagesRequest};

use super::{GlobalOptions, PageArgs};

/// Work with v3 applications
#[derive(Args, Debug)]
pub struct AppCommand {
    #[command(subcommand)]
    pub command: AppSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AppSubcommand {
    /// List the packages of an application
    Packages(PackagesArgs),
}

#[derive(Args, Debug)]
pub struct PackagesArgs {
    /// Application GUID
    pub app: String,

    #[command(flatten)]
    pub paging: PageArgs,
}

impl AppCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AppSubcommand::Packages(args) => self.packages(args, global).await,
        }
    }

    /// List the packages of an application
    async fn packages(&self, args: &PackagesArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let page = client
            .applications()
            .list_packages(&ListApplicationPackagesRequest {
                application_id: Some(args.app.clone()),
                page: args.paging.page,
                per_page: args.paging.per_page,
            })
            .await?;

        global.writer().write(&page)
    }
}
