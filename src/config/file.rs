//
//  cloudfoundry-client
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File Operations
//!
//! Thin file helpers behind [`Config::load_from`](super::Config::load_from)
//! and [`Config::save_to`](super::Config::save_to). They deal in raw
//! strings; parsing and serialization live on `Config`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads the configuration file at `path` into a string.
///
/// # Errors
///
/// Fails if the file does not exist or cannot be read. Use
/// [`config_exists`] first when a missing file is acceptable.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Writes `content` to `path`, creating parent directories as needed.
///
/// Overwrites an existing file. The file holds credentials, so on Unix it is
/// owner read/write only (0600), including when it already existed.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .with_context(|| format!("Failed to restrict {}", path.display()))?;
    }

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

/// Returns `true` if a file exists at `path`.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}
