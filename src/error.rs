// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to decode manifest document {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Manifest document {index} is not a Kubernetes object: {reason}")]
    InvalidDocument { index: usize, reason: String },

    #[error("Failed to convert document {index} ({kind}): {source}")]
    Conversion {
        index: usize,
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API discovery failed: {0}")]
    Discovery(#[source] kube::Error),

    #[error("No REST mapping for {api_version}/{kind} (document {index})")]
    MappingNotFound {
        index: usize,
        api_version: String,
        kind: String,
    },

    #[error("Failed to create {kind} '{name}' (document {index}): {source}")]
    Create {
        index: usize,
        kind: String,
        name: String,
        #[source]
        source: kube::Error,
    },
}

pub type Result<T> = std::result::Result<T, SeedError>;
