// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::env as vars;
use crate::resource::OwnerMatch;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;

/// Resource client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory templates are loaded from
    pub template_dir: PathBuf,
    pub owner_match: OwnerMatch,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let template_dir = lookup(vars::TEMPLATE_DIR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .with_context(|| format!("{} environment variable not set", vars::TEMPLATE_DIR))?;

        let owner_match = match lookup(vars::OWNER_REFERENCE_MATCH) {
            Some(mode) => mode
                .parse::<OwnerMatch>()
                .map_err(|e: String| anyhow!(e))
                .with_context(|| format!("Invalid {}", vars::OWNER_REFERENCE_MATCH))?,
            None => OwnerMatch::default(),
        };

        Ok(Config {
            template_dir,
            owner_match,
        })
    }
}
