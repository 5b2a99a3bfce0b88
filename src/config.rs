// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_FALLBACK_NAMESPACE;
use crate::overrides::OverrideSet;
use anyhow::{Context, Result};
use std::env;
use std::io::Read;
use std::path::PathBuf;

/// Runner configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// File holding the multi-document manifest stream; stdin when unset
    pub manifest_path: Option<PathBuf>,
    /// YAML file holding the override set
    pub overrides_path: Option<PathBuf>,
    /// Namespace for namespaced objects that do not set one
    pub fallback_namespace: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let manifest_path = env::var_os("MANIFEST_PATH").map(PathBuf::from);
        let overrides_path = env::var_os("OVERRIDES_PATH").map(PathBuf::from);
        let fallback_namespace = env::var("FALLBACK_NAMESPACE")
            .ok()
            .filter(|ns| !ns.is_empty())
            .unwrap_or_else(|| DEFAULT_FALLBACK_NAMESPACE.to_string());

        Ok(Config {
            manifest_path,
            overrides_path,
            fallback_namespace,
        })
    }

    /// Read the raw manifest stream from the configured file or stdin
    pub fn read_manifests(&self) -> Result<String> {
        match &self.manifest_path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read manifests from {}", path.display())),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read manifests from stdin")?;
                Ok(buf)
            }
        }
    }

    /// Load the override set, or an empty one when no file is configured
    pub fn load_overrides(&self) -> Result<OverrideSet> {
        let Some(path) = &self.overrides_path else {
            return Ok(OverrideSet::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read overrides from {}", path.display()))?;
        parse_overrides(&content)
            .with_context(|| format!("Failed to parse overrides in {}", path.display()))
    }
}

fn parse_overrides(content: &str) -> Result<OverrideSet> {
    if content.trim().is_empty() {
        return Ok(OverrideSet::default());
    }
    Ok(serde_yaml::from_str(content)?)
}
