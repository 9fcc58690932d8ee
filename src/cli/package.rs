//
//  cloudfoundry-client
//  cli/package.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Package commands
//!
//! Packages hold an application's bits or Docker image reference. These
//! commands create, copy, inspect and delete packages, move bits in and out,
//! and stage a package into a droplet.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncWriteExt;

use crate::api::v3::packages::{
    CopyPackageRequest, CreatePackageRequest, DeletePackageRequest, Droplet,
    DownloadPackageRequest, GetPackageRequest, ListPackagesRequest, Package, PackageType,
    Packages, StagePackageRequest, UploadPackageRequest, UploadResource,
};
use crate::api::common::Download;
use crate::api::v3::{Linked, PaginatedResponse};
use crate::output::{
    format_size, format_state, or_dash, print_field, print_header, write_json, TableBuilder,
    TableOutput,
};

use super::{GlobalOptions, PageArgs};

/// Manage v3 packages
#[derive(Args, Debug)]
pub struct PackageCommand {
    #[command(subcommand)]
    pub command: PackageSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PackageSubcommand {
    /// Create a package for an application
    Create(CreateArgs),

    /// Copy the bits of a package into a new package of an application
    Copy(CopyArgs),

    /// Show a package
    #[command(visible_alias = "view")]
    Get(IdArgs),

    /// List packages
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Delete a package
    Delete(IdArgs),

    /// Upload a zip of application bits into a package
    Upload(UploadArgs),

    /// Download the bits of a package
    Download(DownloadArgs),

    /// Stage a package into a droplet
    Stage(StageArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Application GUID
    pub app: String,

    /// Package type
    #[arg(long = "type", short = 't', value_parser = parse_package_type)]
    pub package_type: Option<PackageType>,

    /// Docker image URL (docker packages only)
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Application GUID receiving the copy
    pub app: String,

    /// GUID of the package to copy
    pub source_package: String,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Package GUID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Package GUID
    pub id: String,

    /// Zip file with the application bits
    pub file: PathBuf,

    /// File already known to the platform, as PATH:SHA1:SIZE (repeatable)
    #[arg(long = "resource", value_parser = parse_resource)]
    pub resources: Vec<UploadResource>,
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Package GUID
    pub id: String,

    /// Output file (defaults to <GUID>.zip)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct StageArgs {
    /// Package GUID
    pub id: String,

    /// Buildpack name or URL
    #[arg(long, short = 'b')]
    pub buildpack: Option<String>,

    /// Stack to stage on
    #[arg(long, short = 's')]
    pub stack: Option<String>,

    /// Staging environment variable as KEY=VALUE (repeatable)
    #[arg(long = "env", short = 'e', value_parser = parse_env)]
    pub env: Vec<(String, String)>,

    /// Memory limit for staging, in MB
    #[arg(long)]
    pub memory_limit: Option<u64>,

    /// Disk limit for staging, in MB
    #[arg(long)]
    pub disk_limit: Option<u64>,
}

/// `bits.zip` -> `bits.zip.part`, next to the final file.
fn partial_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "download".into());
    name.push(".part");
    output.with_file_name(name)
}

/// Writes every remaining chunk of `download` to `path`, returning the size.
async fn stream_to_file(download: &mut Download, path: &Path, pb: &ProgressBar) -> Result<u64> {
    let mut file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let mut written = 0u64;
    while let Some(chunk) = download.next_chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
        pb.set_position(written);
    }
    file.flush().await?;
    Ok(written)
}

fn parse_package_type(s: &str) -> Result<PackageType, String> {
    s.parse()
}

/// `path/to/file:sha1:size`; the path may itself contain colons.
fn parse_resource(s: &str) -> Result<UploadResource, String> {
    let mut parts = s.rsplitn(3, ':');
    let (size, sha1, path) = match (parts.next(), parts.next(), parts.next()) {
        (Some(size), Some(sha1), Some(path)) if !path.is_empty() && !sha1.is_empty() => {
            (size, sha1, path)
        }
        _ => return Err(format!("Invalid resource '{}'. Use PATH:SHA1:SIZE", s)),
    };

    let size = size
        .parse()
        .map_err(|_| format!("Invalid size '{}' in resource '{}'", size, s))?;

    Ok(UploadResource {
        path: path.to_string(),
        sha1: sha1.to_string(),
        size,
    })
}

fn parse_env(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("Invalid environment variable '{}'. Use KEY=VALUE", s)),
    }
}

impl TableOutput for Package {
    fn print_table(&self, color: bool) {
        print_header(&format!("Package {}", or_dash(self.id.as_deref())), color);
        println!();
        print_field("Type", &or_dash(self.package_type.as_deref()), color);
        print_field("State", &format_state(self.state.as_deref().unwrap_or("-"), color), color);
        if let Some(url) = &self.url {
            print_field("Image", url, color);
        }
        if let Some(hash) = self.hash.as_ref().and_then(|h| h.value.as_deref()) {
            print_field("Hash", hash, color);
        }
        if let Some(error) = &self.error {
            print_field("Error", error, color);
        }
        print_field("Created", &or_dash(self.created_at.as_deref()), color);
        print_field("Updated", &or_dash(self.updated_at.as_deref()), color);

        if !self.links().is_empty() {
            println!();
            print_header("Links", color);
            for (rel, link) in self.links() {
                let method = link.method.as_deref().unwrap_or("GET");
                print_field(rel, &format!("{} {}", method, link.href), color);
            }
        }
    }
}

impl TableOutput for PaginatedResponse<Package> {
    fn print_table(&self, color: bool) {
        if self.resources.is_empty() {
            println!("No packages found.");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["GUID", "TYPE", "STATE", "CREATED"])
            .rows(self.resources.iter().map(|p| {
                vec![
                    or_dash(p.id.as_deref()),
                    or_dash(p.package_type.as_deref()),
                    format_state(p.state.as_deref().unwrap_or("-"), color),
                    or_dash(p.created_at.as_deref()),
                ]
            }))
            .print();

        let total = self
            .pagination
            .total_results
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!("Showing {} of {} package(s)", self.resources.len(), total);
        if self.has_next() {
            println!("More results available; use --page to continue.");
        }
    }
}

impl TableOutput for Droplet {
    fn print_table(&self, color: bool) {
        print_header(&format!("Droplet {}", or_dash(self.id.as_deref())), color);
        println!();
        print_field("State", &format_state(self.state.as_deref().unwrap_or("-"), color), color);
        print_field("Buildpack", &or_dash(self.buildpack.as_deref()), color);
        if let Some(error) = &self.error {
            print_field("Error", error, color);
        }
        print_field("Created", &or_dash(self.created_at.as_deref()), color);
        for (key, value) in &self.environment_variables {
            let value = value
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string());
            print_field(&format!("env {}", key), &value, color);
        }
    }
}

impl PackageCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            PackageSubcommand::Create(args) => self.create(args, global).await,
            PackageSubcommand::Copy(args) => self.copy(args, global).await,
            PackageSubcommand::Get(args) => self.get(args, global).await,
            PackageSubcommand::List(args) => self.list(args, global).await,
            PackageSubcommand::Delete(args) => self.delete(args, global).await,
            PackageSubcommand::Upload(args) => self.upload(args, global).await,
            PackageSubcommand::Download(args) => self.download(args, global).await,
            PackageSubcommand::Stage(args) => self.stage(args, global).await,
        }
    }

    /// Create a package
    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let package = client
            .packages()
            .create(&CreatePackageRequest {
                application_id: Some(args.app.clone()),
                package_type: args.package_type,
                url: args.image.clone(),
            })
            .await?;

        global.writer().write(&package)
    }

    /// Copy a package
    async fn copy(&self, args: &CopyArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let package = client
            .packages()
            .copy(&CopyPackageRequest {
                application_id: Some(args.app.clone()),
                source_package_id: Some(args.source_package.clone()),
            })
            .await?;

        global.writer().write(&package)
    }

    /// Show a package
    async fn get(&self, args: &IdArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let package = client
            .packages()
            .get(&GetPackageRequest {
                id: Some(args.id.clone()),
            })
            .await?;

        global.writer().write(&package)
    }

    /// List packages
    async fn list(&self, args: &PageArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let page = client
            .packages()
            .list(&ListPackagesRequest {
                page: args.page,
                per_page: args.per_page,
            })
            .await?;

        global.writer().write(&page)
    }

    /// Delete a package
    async fn delete(&self, args: &IdArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        client
            .packages()
            .delete(&DeletePackageRequest {
                id: Some(args.id.clone()),
            })
            .await?;

        if global.json {
            write_json(&serde_json::json!({"success": true, "id": args.id}))?;
        } else {
            global
                .writer()
                .write_success(&format!("Deleted package {}", args.id));
        }
        Ok(())
    }

    /// Upload bits
    async fn upload(&self, args: &UploadArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        if !global.json {
            println!(
                "{} Uploading {} to package {}...",
                style("→").cyan(),
                args.file.display(),
                args.id
            );
        }

        let package = client
            .packages()
            .upload(&UploadPackageRequest {
                id: Some(args.id.clone()),
                file: Some(args.file.clone()),
                resources: args.resources.clone(),
            })
            .await?;

        global.writer().write(&package)
    }

    /// Download bits, streaming them to disk
    async fn download(&self, args: &DownloadArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.zip", args.id)));

        let mut download = client
            .packages()
            .download(&DownloadPackageRequest {
                id: Some(args.id.clone()),
            })
            .await?;

        let pb = if global.json {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(download.content_length().unwrap_or(0));
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")?
                    .progress_chars("#>-"),
            );
            pb
        };

        // Bits land in a sibling `.part` file and only replace `output` once complete
        let partial = partial_path(&output);
        let written = match stream_to_file(&mut download, &partial, &pb).await {
            Ok(written) => written,
            Err(e) => {
                pb.abandon();
                let _ = tokio::fs::remove_file(&partial).await;
                return Err(e);
            }
        };
        pb.finish_and_clear();

        tokio::fs::rename(&partial, &output)
            .await
            .with_context(|| format!("Failed to move download to {}", output.display()))?;

        if global.json {
            write_json(&serde_json::json!({
                "success": true,
                "id": args.id,
                "path": output.display().to_string(),
                "size": written,
            }))?;
        } else {
            println!(
                "{} Downloaded to {}",
                style("✓").green(),
                output.display()
            );
            println!("  Size: {}", format_size(written));
        }

        Ok(())
    }

    /// Stage a package
    async fn stage(&self, args: &StageArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let environment_variables: BTreeMap<String, String> = args.env.iter().cloned().collect();

        let droplet = client
            .packages()
            .stage(&StagePackageRequest {
                id: Some(args.id.clone()),
                buildpack: args.buildpack.clone(),
                environment_variables,
                stack: args.stack.clone(),
                memory_limit: args.memory_limit,
                disk_limit: args.disk_limit,
            })
            .await?;

        global.writer().write(&droplet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_path_sits_next_to_output() {
        assert_eq!(
            partial_path(Path::new("out/bits.zip")),
            PathBuf::from("out/bits.zip.part")
        );
        assert_eq!(partial_path(Path::new("pkg")), PathBuf::from("pkg.part"));
    }

    #[test]
    fn test_parse_resource_keeps_colons_in_path() {
        let resource = parse_resource("dir/a:b.txt:0123abcd:42").unwrap();
        assert_eq!(resource.path, "dir/a:b.txt");
        assert_eq!(resource.sha1, "0123abcd");
        assert_eq!(resource.size, 42);
    }

    #[test]
    fn test_parse_resource_rejects_bad_input() {
        assert!(parse_resource("file.txt").is_err());
        assert!(parse_resource("file.txt:abc:big").is_err());
    }

    #[test]
    fn test_parse_env() {
        assert_eq!(
            parse_env("KEY=a=b").unwrap(),
            ("KEY".to_string(), "a=b".to_string())
        );
        assert!(parse_env("=value").is_err());
        assert!(parse_env("novalue").is_err());
    }
}
