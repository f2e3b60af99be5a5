// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reifier backed by YAML template files on disk

use super::{template, Reifier};
use crate::config::Config;
use crate::error::{ResourceError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Loads templates from a directory, expands them and encodes the result as JSON.
#[derive(Debug, Clone)]
pub struct FileReifier {
    template_dir: PathBuf,
}

impl FileReifier {
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.template_dir)
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Resolve a template identifier to a file inside the template directory.
    /// Absolute paths and `..` segments are rejected.
    fn template_path(&self, template_name: &str) -> Result<PathBuf> {
        let relative = Path::new(template_name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(ResourceError::reify(
                template_name,
                "template identifier must be a path relative to the template directory",
            ));
        }
        Ok(self.template_dir.join(relative))
    }
}

impl Reifier for FileReifier {
    fn reify(&self, template_name: &str, data: &Value) -> Result<Vec<u8>> {
        let path = self.template_path(template_name)?;
        debug!("Reifying template {}", path.display());

        let source = fs::read_to_string(&path).map_err(|e| {
            let message = format!("failed to read {}: {}", path.display(), e);
            ResourceError::reify(template_name, message)
        })?;

        let rendered =
            template::render(&source, data).map_err(|e| ResourceError::reify(template_name, e))?;

        let document: Value = serde_yaml::from_str(&rendered).map_err(|e| {
            ResourceError::reify(template_name, format!("invalid YAML after rendering: {}", e))
        })?;

        if document.is_null() {
            return Err(ResourceError::reify(
                template_name,
                "template produced an empty document",
            ));
        }

        serde_json::to_vec(&document).map_err(|e| ResourceError::reify(template_name, e))
    }
}
